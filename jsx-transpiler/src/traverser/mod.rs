mod enter_jsx_opening_element;
mod enter_program;
mod exit_jsx_attribute;
mod exit_jsx_child;
mod exit_jsx_element;
mod exit_jsx_opening_element;
mod oxc_impl;

use std::cell::Cell;

use oxc::{
	allocator::{Allocator, Box, FromIn, Vec},
	ast::ast::{
		ArrayExpression, ComputedMemberExpression, Expression, IdentifierName,
		IdentifierReference, JSXEmptyExpression, JSXExpression, JSXExpressionContainer,
		NullLiteral, StaticMemberExpression, StringLiteral,
	},
	diagnostics::OxcDiagnostic,
	semantic::ReferenceId,
	span::{Atom, GetSpan, Span},
	syntax::identifier::is_identifier_name,
};
use oxc_traverse::TraverseCtx;

use crate::{
	TransformOptions,
	element::{Child, LoweredElement},
	options::DottedPath,
};

/// Call targets resolved for the tree being traversed.
pub struct Targets<'a> {
	/// The callee of every element in the generic and grouped modes.
	pub tag_call: Expression<'a>,
	/// The object known tags are looked up on.
	pub dom: Expression<'a>,
	/// The object other tags are looked up on, if any.
	pub components: Option<Expression<'a>>,
}

/// Traverser that lowers JSX into calls.
pub struct JsxTraverser<'a, 'o> {
	/// The construction-time options.
	pub options: &'o TransformOptions,
	/// The targets for the current tree; resolved on entering the program.
	pub targets: Option<Targets<'a>>,
	/// The stack of elements and fragments being lowered.
	pub element_stack: Vec<'a, LoweredElement<'a>>,
	/// The most recently lowered element or fragment, waiting to be placed
	/// into the slot that held it.
	pub lowered: Option<Expression<'a>>,
	/// How many elements and fragments were lowered.
	pub lowered_elements: usize,
	/// The underlying Bumpalo allocator.
	pub allocator: &'a Allocator,
	/// Any errors that were emitted during lowering.
	pub errors: std::vec::Vec<OxcDiagnostic>,
}

impl<'a, 'o> JsxTraverser<'a, 'o> {
	/// Creates a new traverser using the given Bumpalo allocator.
	pub fn new_in(options: &'o TransformOptions, allocator: &'a Allocator) -> Self {
		Self {
			options,
			targets: None,
			element_stack: Vec::new_in(allocator),
			lowered: None,
			lowered_elements: 0,
			allocator,
			errors: std::vec::Vec::new(),
		}
	}

	/// Returns the targets of the current tree.
	pub fn targets(&self) -> &Targets<'a> {
		self.targets
			.as_ref()
			.expect("targets are resolved when entering the program")
	}

	/// Returns the element currently being lowered.
	pub fn current_element(&mut self) -> &mut LoweredElement<'a> {
		self.element_stack
			.last_mut()
			.expect("jsx element stack underflow")
	}

	/// Parks a lowered element until its slot is left.
	pub fn stash_lowered(&mut self, expr: Expression<'a>) {
		assert!(self.lowered.replace(expr).is_none());
	}

	/// Takes the most recently lowered element.
	pub fn take_lowered(&mut self) -> Expression<'a> {
		self.lowered.take().expect("no lowered jsx element to place")
	}

	/// Builds `a.b.c` from a dotted path.
	pub fn path_to_expression(&self, ctx: &mut TraverseCtx<'a>, path: &DottedPath) -> Expression<'a> {
		let mut segments = path.segments();
		let root = segments.next().expect("dotted paths are never empty");
		let root = Expression::Identifier(ctx.alloc(IdentifierReference {
			span: Span::default(),
			name: Atom::from_in(root, self.allocator),
			reference_id: Cell::new(None),
		}));

		segments.fold(root, |object, segment| {
			Expression::StaticMemberExpression(ctx.alloc(StaticMemberExpression {
				span: Span::default(),
				object,
				property: IdentifierName {
					span: Span::default(),
					name: Atom::from_in(segment, self.allocator),
				},
				optional: false,
			}))
		})
	}

	/// Accesses `property` on `object`; statically when `property` is an
	/// identifier name (`a.b`), computed otherwise (`a["b-c"]`).
	pub fn member_access(
		&self,
		ctx: &mut TraverseCtx<'a>,
		span: Span,
		object: Expression<'a>,
		property: Atom<'a>,
		property_span: Span,
	) -> Expression<'a> {
		if is_identifier_name(&property) {
			Expression::StaticMemberExpression(ctx.alloc(StaticMemberExpression {
				span,
				object,
				property: IdentifierName {
					span: property_span,
					name: property,
				},
				optional: false,
			}))
		} else {
			Expression::ComputedMemberExpression(ctx.alloc(ComputedMemberExpression {
				span,
				object,
				expression: Expression::StringLiteral(ctx.alloc(StringLiteral {
					span: property_span,
					value: property,
					raw: None,
					lossy: false,
				})),
				optional: false,
			}))
		}
	}

	/// Builds an identifier reference.
	pub fn identifier(
		ctx: &mut TraverseCtx<'a>,
		span: Span,
		name: Atom<'a>,
		reference_id: Option<ReferenceId>,
	) -> Expression<'a> {
		Expression::Identifier(ctx.alloc(IdentifierReference {
			span,
			name,
			reference_id: Cell::new(reference_id),
		}))
	}

	/// Builds the children array of an element or fragment.
	pub fn children_array(&self, span: Span, children: Vec<'a, Child<'a>>) -> ArrayExpression<'a> {
		ArrayExpression {
			span,
			elements: Vec::from_iter_in(
				children
					.into_iter()
					.map(|child| child.into_array_element(self.allocator)),
				self.allocator,
			),
			trailing_comma: None,
		}
	}
}

/// Builds a `null` literal.
pub fn null_literal<'a>(span: Span, allocator: &'a Allocator) -> Expression<'a> {
	Expression::NullLiteral(Box::new_in(NullLiteral { span }, allocator))
}

/// Moves an expression out of the tree, leaving `null` in its place.
pub fn take_expression<'a>(expr: &mut Expression<'a>, allocator: &'a Allocator) -> Expression<'a> {
	let span = expr.span();
	std::mem::replace(expr, null_literal(span, allocator))
}

/// Unwraps a `{...}` container, moving its expression out of the tree.
///
/// Empty containers have already been rewritten to `null` by the time
/// their parent is left.
pub fn take_container_expression<'a>(container: &mut JSXExpressionContainer<'a>) -> Expression<'a> {
	let span = container.span;
	std::mem::replace(
		&mut container.expression,
		JSXExpression::EmptyExpression(JSXEmptyExpression { span }),
	)
	.into_expression()
}
