use oxc::ast::ast::{Argument, Expression, JSXElement, JSXFragment};
use oxc_traverse::TraverseCtx;

use crate::children::normalize_children;

impl<'a> super::JsxTraverser<'a, '_> {
	/// Finishes an element's call: normalises its children and appends
	/// them as a single array argument, if any are left.
	pub(crate) fn inner_exit_jsx_element(
		&mut self,
		node: &mut JSXElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let mut elem = self
			.element_stack
			.pop()
			.expect("jsx element stack underflow");
		let mut call = elem
			.call
			.take()
			.expect("call is built on leaving the opening element");

		normalize_children(&mut elem.children);

		if !elem.children.is_empty() {
			let children = self.children_array(node.span, elem.children);
			call.arguments
				.push(Argument::ArrayExpression(ctx.alloc(children)));
		}

		call.span = node.span;
		self.lowered_elements += 1;
		log::trace!("lowered element at {}..{}", node.span.start, node.span.end);

		Expression::CallExpression(ctx.alloc(call))
	}

	/// Lowers a fragment to the array of its normalised children.
	pub(crate) fn inner_exit_jsx_fragment(
		&mut self,
		node: &mut JSXFragment<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		let mut elem = self
			.element_stack
			.pop()
			.expect("jsx element stack underflow");
		debug_assert!(elem.call.is_none());

		normalize_children(&mut elem.children);

		self.lowered_elements += 1;
		log::trace!("lowered fragment at {}..{}", node.span.start, node.span.end);

		Expression::ArrayExpression(ctx.alloc(self.children_array(node.span, elem.children)))
	}
}
