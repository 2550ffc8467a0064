//! Construction-time configuration for [`transform()`](crate::transform).

use std::{fmt, str::FromStr};

use oxc::syntax::identifier::is_identifier_name;
use thiserror::Error;

use crate::constants::{DEFAULT_DOM_TARGET, DEFAULT_TAG_CALL};

/// How elements are lowered into calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoweringMode {
	/// `<tag_call>("div", {id: "x"}, [children])`.
	#[default]
	Generic,
	/// Like [`LoweringMode::Generic`], but attributes are grouped into one
	/// object per namespace prefix: `{data: {foo: "1"}, "#default": {id: "x"}}`.
	Grouped,
	/// The tag itself becomes the callee: `React.DOM.div({id: "x"}, [children])`.
	///
	/// Known tag names resolve against the DOM target, other names against
	/// the components target (if any). Both targets may be overridden per
	/// file with `@jsx <path>` / `@components <path>` header comments.
	/// Namespaced tags are rejected.
	Targeted,
}

/// Errors produced when parsing a [`DottedPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DottedPathError {
	/// The path was empty.
	#[error("expected a dotted path, got an empty string")]
	Empty,
	/// One of the segments is not usable as a bare identifier.
	#[error("`{segment}` is not a valid identifier (in path `{path}`)")]
	InvalidSegment {
		/// The full path as given.
		path: String,
		/// The offending segment.
		segment: String,
	},
}

/// A dotted access path such as `JSX.tag` or `React.DOM`.
///
/// Every segment is a valid identifier name, so the path can always be
/// rendered as a chain of static member accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
	/// The individual identifiers; never empty.
	segments: Vec<String>,
}

impl DottedPath {
	/// The path's segments, outermost object first.
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().map(String::as_str)
	}
}

impl FromStr for DottedPath {
	type Err = DottedPathError;

	fn from_str(path: &str) -> Result<Self, Self::Err> {
		if path.is_empty() {
			return Err(DottedPathError::Empty);
		}

		let segments = path
			.split('.')
			.map(|segment| {
				if is_identifier_name(segment) {
					Ok(segment.to_string())
				} else {
					Err(DottedPathError::InvalidSegment {
						path: path.to_string(),
						segment: segment.to_string(),
					})
				}
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { segments })
	}
}

impl fmt::Display for DottedPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}

/// Options for a transformation.
///
/// These are fixed for the lifetime of a transform; per-file overrides
/// (header comments) never write back into them.
#[derive(Debug, Clone)]
pub struct TransformOptions {
	/// The lowering policy.
	pub mode: LoweringMode,
	/// The callee of every lowered element in the generic and grouped modes.
	pub tag_call: DottedPath,
	/// Where known tags resolve in [`LoweringMode::Targeted`].
	pub dom_target: DottedPath,
	/// Where unknown tags resolve in [`LoweringMode::Targeted`].
	/// When unset, unknown tags stay bare identifiers.
	pub components_target: Option<DottedPath>,
}

impl Default for TransformOptions {
	fn default() -> Self {
		Self {
			mode: LoweringMode::default(),
			tag_call: DottedPath::from_str(DEFAULT_TAG_CALL).expect("default tag call is valid"),
			dom_target: DottedPath::from_str(DEFAULT_DOM_TARGET)
				.expect("default DOM target is valid"),
			components_target: None,
		}
	}
}
