//! The handler table: which node kinds the traverser reacts to, on
//! entry or exit. Every node kind without a method here falls through to
//! the trait's no-op default and is left untouched.
//!
//! Handlers that may swap a node out report a [`Visit`]; this is where it
//! gets applied to the slot the node lives in.

use oxc::ast::ast::{
	Expression, JSXAttribute, JSXChild, JSXElement, JSXExpression, JSXFragment,
	JSXOpeningElement, JSXSpreadAttribute, Program,
};
use oxc_traverse::{Traverse, TraverseCtx};

use super::null_literal;
use crate::{element::LoweredElement, visit::Visit};

impl<'a> Traverse<'a> for super::JsxTraverser<'a, '_> {
	fn enter_program(&mut self, node: &mut Program<'a>, ctx: &mut TraverseCtx<'a>) {
		self.inner_enter_program(node, ctx);
	}

	fn exit_program(&mut self, _node: &mut Program<'a>, _ctx: &mut TraverseCtx<'a>) {
		assert!(self.element_stack.is_empty());
		assert!(self.lowered.is_none());
	}

	fn enter_jsx_element(&mut self, _node: &mut JSXElement<'a>, _ctx: &mut TraverseCtx<'a>) {
		self.element_stack
			.push(LoweredElement::new_in(self.allocator));
	}

	fn exit_jsx_element(&mut self, node: &mut JSXElement<'a>, ctx: &mut TraverseCtx<'a>) {
		let expr = self.inner_exit_jsx_element(node, ctx);
		self.stash_lowered(expr);
	}

	fn enter_jsx_fragment(&mut self, _node: &mut JSXFragment<'a>, _ctx: &mut TraverseCtx<'a>) {
		self.element_stack
			.push(LoweredElement::new_in(self.allocator));
	}

	fn exit_jsx_fragment(&mut self, node: &mut JSXFragment<'a>, ctx: &mut TraverseCtx<'a>) {
		let expr = self.inner_exit_jsx_fragment(node, ctx);
		self.stash_lowered(expr);
	}

	fn enter_jsx_opening_element(
		&mut self,
		node: &mut JSXOpeningElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		self.inner_enter_jsx_opening_element(node, ctx);
	}

	fn exit_jsx_opening_element(
		&mut self,
		node: &mut JSXOpeningElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		self.inner_exit_jsx_opening_element(node, ctx);
	}

	fn exit_jsx_attribute(&mut self, node: &mut JSXAttribute<'a>, ctx: &mut TraverseCtx<'a>) {
		self.inner_exit_jsx_attribute(node, ctx);
	}

	fn exit_jsx_spread_attribute(
		&mut self,
		node: &mut JSXSpreadAttribute<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		self.inner_exit_jsx_spread_attribute(node, ctx);
	}

	fn exit_jsx_child(&mut self, node: &mut JSXChild<'a>, ctx: &mut TraverseCtx<'a>) {
		self.inner_exit_jsx_child(node, ctx);
	}

	fn exit_jsx_expression(&mut self, node: &mut JSXExpression<'a>, _ctx: &mut TraverseCtx<'a>) {
		if let Visit::Replace(expr) = self.leave_jsx_expression(node) {
			*node = expr.into();
		}
	}

	fn exit_expression(&mut self, node: &mut Expression<'a>, _ctx: &mut TraverseCtx<'a>) {
		if let Visit::Replace(expr) = self.leave_expression(node) {
			*node = expr;
		}
	}
}

impl<'a> super::JsxTraverser<'a, '_> {
	/// `{}` and `{/* comment */}` become `null`. A lowered element that is
	/// still parked is placed here.
	fn leave_jsx_expression(&mut self, node: &JSXExpression<'a>) -> Visit<Expression<'a>> {
		match node {
			JSXExpression::EmptyExpression(empty) => {
				Visit::Replace(null_literal(empty.span, self.allocator))
			}
			JSXExpression::JSXElement(_) | JSXExpression::JSXFragment(_)
				if self.lowered.is_some() =>
			{
				Visit::Replace(self.take_lowered())
			}
			_ => Visit::Keep,
		}
	}

	/// An element or fragment in expression position is replaced by its
	/// lowered form.
	fn leave_expression(&mut self, node: &Expression<'a>) -> Visit<Expression<'a>> {
		match node {
			Expression::JSXElement(_) | Expression::JSXFragment(_) => {
				Visit::Replace(self.take_lowered())
			}
			_ => Visit::Keep,
		}
	}
}
