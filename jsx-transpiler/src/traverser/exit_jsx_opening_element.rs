use oxc::{
	allocator::{CloneIn, Vec},
	ast::ast::{Argument, CallExpression, JSXOpeningElement, StringLiteral},
};
use oxc_traverse::TraverseCtx;

use crate::{
	LoweringMode,
	attributes::{flat_props, grouped_props},
	element::Tag,
};

impl<'a> super::JsxTraverser<'a, '_> {
	/// Builds the element's call from its tag and attributes. Children are
	/// appended once the whole element has been left.
	pub(crate) fn inner_exit_jsx_opening_element(
		&mut self,
		node: &mut JSXOpeningElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		let allocator = self.allocator;
		let elem = self.current_element();
		let tag = elem.tag.take().expect("tag is resolved on entering the opening element");
		let attributes = std::mem::replace(&mut elem.attributes, Vec::new_in(allocator));

		let props = match self.options.mode {
			LoweringMode::Grouped => grouped_props(node.span, attributes, allocator),
			LoweringMode::Generic | LoweringMode::Targeted => {
				flat_props(node.span, attributes, allocator)
			}
		};

		let (callee, arguments) = match tag {
			Tag::Name { name, span } => {
				let name = Argument::StringLiteral(ctx.alloc(StringLiteral {
					span,
					value: name,
					raw: None,
					lossy: false,
				}));
				(
					self.targets().tag_call.clone_in(allocator),
					Vec::from_array_in([name, props.into()], allocator),
				)
			}
			Tag::Callee(callee) => (callee, Vec::from_array_in([props.into()], allocator)),
		};

		let call = CallExpression {
			span: node.span,
			callee,
			type_arguments: None,
			arguments,
			optional: false,
			pure: false,
		};

		let old_call = self.current_element().call.replace(call);
		assert!(old_call.is_none());
	}
}
