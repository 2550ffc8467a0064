use oxc::{
	allocator::{Allocator, Box, Vec},
	ast::ast::{ArrayExpressionElement, CallExpression, Expression, SpreadElement, StringLiteral},
	span::{Atom, Span},
};

use crate::attributes::AttributeEntry;

/// A text child, tracked with both its decoded value and its raw source
/// so that edge trimming can narrow the span alongside the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChild<'a> {
	/// The span of `raw` in the source.
	pub span: Span,
	/// The text with HTML entities decoded.
	pub value: &'a str,
	/// The text exactly as written.
	pub raw: &'a str,
}

impl<'a> TextChild<'a> {
	/// Converts this text into a string literal argument.
	pub fn into_literal(self) -> StringLiteral<'a> {
		StringLiteral {
			span: self.span,
			value: Atom::from(self.value),
			raw: None,
			lossy: false,
		}
	}
}

/// A lowered child of an element or fragment.
pub enum Child<'a> {
	/// Literal text.
	Text(TextChild<'a>),
	/// Any expression: an unwrapped `{...}` container, or a nested element's call.
	Expression(Expression<'a>),
	/// A `{...items}` spread child.
	Spread(Box<'a, SpreadElement<'a>>),
}

impl<'a> Child<'a> {
	/// Converts this child into an element of the children array.
	pub fn into_array_element(self, allocator: &'a Allocator) -> ArrayExpressionElement<'a> {
		match self {
			Child::Text(text) => {
				ArrayExpressionElement::StringLiteral(Box::new_in(text.into_literal(), allocator))
			}
			Child::Expression(expr) => expr.into(),
			Child::Spread(spread) => ArrayExpressionElement::SpreadElement(spread),
		}
	}
}

/// An element (or fragment) whose lowering is in progress.
///
/// One is pushed when the traversal enters a `JSXElement` or `JSXFragment`
/// and popped when it leaves it; in between, the opening tag, attributes
/// and children fill it in.
pub struct LoweredElement<'a> {
	/// The callee and leading arguments, built when the opening tag is left.
	/// Fragments never have one.
	pub call: Option<CallExpression<'a>>,
	/// The resolved tag, computed when the opening tag is entered.
	pub tag: Option<Tag<'a>>,
	/// The attributes, in source order.
	pub attributes: Vec<'a, AttributeEntry<'a>>,
	/// The children, in source order.
	pub children: Vec<'a, Child<'a>>,
}

impl<'a> LoweredElement<'a> {
	/// Creates an empty element frame.
	pub fn new_in(allocator: &'a Allocator) -> Self {
		Self {
			call: None,
			tag: None,
			attributes: Vec::new_in(allocator),
			children: Vec::new_in(allocator),
		}
	}
}

/// A normalised tag name.
pub enum Tag<'a> {
	/// The tag's name, passed as the first argument to the tag call.
	Name {
		/// The name, e.g. `div` or `svg:rect`.
		name: Atom<'a>,
		/// The span of the name in the opening tag.
		span: Span,
	},
	/// An expression that is called directly.
	Callee(Expression<'a>),
}
