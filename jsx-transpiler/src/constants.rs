//! Holds constant string values used throughout the transpiler.
#![allow(clippy::missing_docs_in_private_items)]

/// Callee used for every element unless configured otherwise.
pub const DEFAULT_TAG_CALL: &str = "JSX.tag";
/// Object that known tag names resolve against in targeted mode.
pub const DEFAULT_DOM_TARGET: &str = "React.DOM";

pub const JSX_PRAGMA: &str = "@jsx";
pub const COMPONENTS_PRAGMA: &str = "@components";

/// Group name for attributes that carry no namespace prefix.
pub const DEFAULT_NAMESPACE: &str = "#default";
pub const NAMESPACE_SEPARATOR: char = ':';
pub const PREFIX_SEPARATOR: char = '-';

pub const THIS: &str = "this";

pub const NAMESPACE_TAGS_UNSUPPORTED: &str = "Namespace tags are not supported";
