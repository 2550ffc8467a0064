//! # JSX transpiler
//! Lowers JSX elements into plain call expressions, so that the program
//! can be emitted as ordinary JavaScript.
//!
//! ```jsx
//! <div id="x" disabled>hello</div>
//! ```
//!
//! becomes, with the default options,
//!
//! ```js
//! JSX.tag("div", { id: "x", disabled: true }, ["hello"])
//! ```
//!
//! See [`LoweringMode`] for the other call shapes.

mod attributes;
mod children;
mod constants;
mod element;
mod header;
mod known_tags;
mod options;
mod traverser;
mod visit;

use oxc::{
	allocator::{Allocator, FromIn},
	ast::ast::Program,
	diagnostics::OxcDiagnostic,
	semantic::Scoping,
	span::Atom,
};

pub use self::{
	constants::{DEFAULT_DOM_TARGET, DEFAULT_TAG_CALL},
	known_tags::is_known_tag,
	options::{DottedPath, DottedPathError, LoweringMode, TransformOptions},
};
use self::traverser::JsxTraverser;

/// Return value from [`transform()`].
pub struct TransformReturn {
	/// The [`Scoping`] instance after transformation.
	pub scoping: Scoping,
	/// How many elements and fragments were lowered.
	pub lowered_elements: usize,
}

/// Helper function to decode HTML entities in a string literal.
fn decode_html_entities<'a>(allocator: &'a Allocator, value: Atom<'a>) -> Atom<'a> {
	if !value.contains('&') {
		return value;
	}
	let decoded = htmlentity::entity::decode(value.as_bytes()).bytes();
	let decoded = String::from_utf8_lossy(decoded.as_ref());
	Atom::from_in(decoded.as_ref(), allocator)
}

/// Lowers all JSX in [`Program`], in-place.
///
/// Programs without JSX are left untouched.
///
/// # Errors
/// Returns every diagnostic raised during lowering (e.g. namespaced tags
/// in [`LoweringMode::Targeted`]). The program is then only partially
/// lowered and must be discarded.
pub fn transform<'a>(
	allocator: &'a Allocator,
	program: &mut Program<'a>,
	scoping: Scoping,
	options: &TransformOptions,
) -> Result<TransformReturn, Vec<OxcDiagnostic>> {
	let mut traverser = JsxTraverser::new_in(options, allocator);
	let scoping = oxc_traverse::traverse_mut(&mut traverser, allocator, program, scoping);

	debug_assert!(traverser.element_stack.is_empty());

	if !traverser.errors.is_empty() {
		return Err(traverser.errors);
	}

	Ok(TransformReturn {
		scoping,
		lowered_elements: traverser.lowered_elements,
	})
}
