use oxc::ast::ast::{JSXChild, SpreadElement};
use oxc_traverse::TraverseCtx;

use super::{take_container_expression, take_expression};
use crate::{
	decode_html_entities,
	element::{Child, TextChild},
};

impl<'a> super::JsxTraverser<'a, '_> {
	/// Moves a lowered child into its parent's children list.
	pub(crate) fn inner_exit_jsx_child(&mut self, node: &mut JSXChild<'a>, ctx: &mut TraverseCtx<'a>) {
		let child = match node {
			JSXChild::Text(text) => {
				// Skip any empty text nodes.
				if text.value.is_empty() {
					return;
				}

				Child::Text(TextChild {
					span: text.span,
					value: decode_html_entities(self.allocator, text.value).as_str(),
					raw: text.raw.unwrap_or(text.value).as_str(),
				})
			}
			// Lowered when the element was left.
			JSXChild::Element(_) | JSXChild::Fragment(_) => Child::Expression(self.take_lowered()),
			JSXChild::ExpressionContainer(container) => {
				Child::Expression(take_container_expression(container))
			}
			JSXChild::Spread(spread) => {
				Child::Spread(ctx.alloc(SpreadElement {
					span: spread.span,
					argument: take_expression(&mut spread.expression, self.allocator),
				}))
			}
		};

		self.current_element().children.push(child);
	}
}
