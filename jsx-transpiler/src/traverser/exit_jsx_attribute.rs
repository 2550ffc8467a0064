use oxc::{
	allocator::FromIn,
	ast::ast::{
		BooleanLiteral, Expression, JSXAttribute, JSXAttributeName, JSXAttributeValue,
		JSXSpreadAttribute, SpreadElement, StringLiteral,
	},
	span::Atom,
};
use oxc_traverse::TraverseCtx;

use super::{take_container_expression, take_expression};
use crate::{attributes::AttributeEntry, constants::NAMESPACE_SEPARATOR, decode_html_entities};

impl<'a> super::JsxTraverser<'a, '_> {
	pub(crate) fn inner_exit_jsx_attribute(
		&mut self,
		node: &mut JSXAttribute<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		let name = match &node.name {
			JSXAttributeName::Identifier(ident) => ident.name,
			JSXAttributeName::NamespacedName(nsident) => {
				let name = format!(
					"{}{NAMESPACE_SEPARATOR}{}",
					nsident.namespace.name, nsident.name.name
				);
				Atom::from_in(name.as_str(), self.allocator)
			}
		};

		let value = match &mut node.value {
			// A bare attribute is `true`.
			None => {
				Expression::BooleanLiteral(ctx.alloc(BooleanLiteral {
					span: node.span,
					value: true,
				}))
			}
			Some(JSXAttributeValue::StringLiteral(lit)) => {
				Expression::StringLiteral(ctx.alloc(StringLiteral {
					span: lit.span,
					value: decode_html_entities(self.allocator, lit.value),
					raw: None,
					lossy: false,
				}))
			}
			Some(JSXAttributeValue::ExpressionContainer(container)) => {
				take_container_expression(container)
			}
			// Lowered when the element was left.
			Some(JSXAttributeValue::Element(_) | JSXAttributeValue::Fragment(_)) => {
				self.take_lowered()
			}
		};

		self.current_element()
			.attributes
			.push(AttributeEntry::Property {
				span: node.span,
				name,
				value,
			});
	}

	pub(crate) fn inner_exit_jsx_spread_attribute(
		&mut self,
		node: &mut JSXSpreadAttribute<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		let spread = ctx.alloc(SpreadElement {
			span: node.span,
			argument: take_expression(&mut node.argument, self.allocator),
		});

		self.current_element()
			.attributes
			.push(AttributeEntry::Spread(spread));
	}
}
