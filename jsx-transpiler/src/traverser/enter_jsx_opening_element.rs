use oxc::{
	allocator::{CloneIn, FromIn},
	ast::ast::{
		Expression, JSXElementName, JSXMemberExpression, JSXMemberExpressionObject,
		JSXOpeningElement,
	},
	diagnostics::OxcDiagnostic,
	semantic::ReferenceId,
	span::{Atom, GetSpan, Span},
	syntax::identifier::is_identifier_name,
};
use oxc_traverse::TraverseCtx;

use crate::{
	LoweringMode,
	constants::{NAMESPACE_SEPARATOR, NAMESPACE_TAGS_UNSUPPORTED, THIS},
	element::Tag,
	known_tags::is_known_tag,
};

/// Flattens `a.b.c` into `a:b:c`.
fn member_tag_name(member: &JSXMemberExpression<'_>) -> String {
	let object = match &member.object {
		JSXMemberExpressionObject::IdentifierReference(ident) => ident.name.to_string(),
		JSXMemberExpressionObject::MemberExpression(inner) => member_tag_name(inner),
		JSXMemberExpressionObject::ThisExpression(_) => THIS.to_string(),
	};
	format!("{object}{NAMESPACE_SEPARATOR}{}", member.property.name)
}

impl<'a> super::JsxTraverser<'a, '_> {
	pub(crate) fn inner_enter_jsx_opening_element(
		&mut self,
		node: &mut JSXOpeningElement<'a>,
		ctx: &mut TraverseCtx<'a>,
	) {
		let tag = match self.options.mode {
			LoweringMode::Generic | LoweringMode::Grouped => {
				Tag::Name {
					name: self.tag_name(&node.name),
					span: node.name.span(),
				}
			}
			LoweringMode::Targeted => Tag::Callee(self.tag_callee(&node.name, ctx)),
		};

		let old_tag = self.current_element().tag.replace(tag);
		assert!(old_tag.is_none());
	}

	/// The tag's name as passed to the tag call.
	fn tag_name(&self, name: &JSXElementName<'a>) -> Atom<'a> {
		match name {
			JSXElementName::Identifier(ident) => ident.name,
			JSXElementName::IdentifierReference(ident) => ident.name,
			JSXElementName::NamespacedName(nsident) => {
				let name = format!(
					"{}{NAMESPACE_SEPARATOR}{}",
					nsident.namespace.name, nsident.name.name
				);
				Atom::from_in(name.as_str(), self.allocator)
			}
			JSXElementName::MemberExpression(member) => {
				Atom::from_in(member_tag_name(member).as_str(), self.allocator)
			}
			JSXElementName::ThisExpression(_) => Atom::new_const(THIS),
		}
	}

	/// The expression the tag resolves to in [`LoweringMode::Targeted`].
	fn tag_callee(
		&mut self,
		name: &JSXElementName<'a>,
		ctx: &mut TraverseCtx<'a>,
	) -> Expression<'a> {
		match name {
			JSXElementName::Identifier(ident) => {
				self.resolve_plain_tag(ctx, ident.span, ident.name, None)
			}
			JSXElementName::IdentifierReference(ident) => {
				self.resolve_plain_tag(ctx, ident.span, ident.name, ident.reference_id.get())
			}
			JSXElementName::NamespacedName(nsident) => {
				self.errors.push(
					OxcDiagnostic::error(NAMESPACE_TAGS_UNSUPPORTED)
						.with_label(nsident.span)
						.with_help("use a member tag such as `<svg.rect>`, or the generic lowering mode"),
				);
				Self::identifier(ctx, nsident.name.span, nsident.name.name, None)
			}
			JSXElementName::MemberExpression(member) => self.member_callee(ctx, member),
			JSXElementName::ThisExpression(this) => {
				Expression::ThisExpression(this.clone_in(self.allocator))
			}
		}
	}

	/// Routes a plain tag name: known tags to the DOM target, anything else
	/// to the components target, or left bare when there is none.
	fn resolve_plain_tag(
		&self,
		ctx: &mut TraverseCtx<'a>,
		span: Span,
		name: Atom<'a>,
		reference_id: Option<ReferenceId>,
	) -> Expression<'a> {
		let targets = self.targets();

		let object = if is_known_tag(&name) {
			&targets.dom
		} else if let Some(components) = &targets.components {
			components
		} else if is_identifier_name(&name) {
			return Self::identifier(ctx, span, name, reference_id);
		} else {
			// Can't be a bare identifier; fall back to a computed DOM lookup.
			&targets.dom
		};

		self.member_access(ctx, span, object.clone_in(self.allocator), name, span)
	}

	/// Converts `<a.b.c>` into the member expression `a.b.c`.
	fn member_callee(
		&self,
		ctx: &mut TraverseCtx<'a>,
		member: &JSXMemberExpression<'a>,
	) -> Expression<'a> {
		let object = match &member.object {
			JSXMemberExpressionObject::IdentifierReference(ident) => {
				Expression::Identifier(ident.clone_in(self.allocator))
			}
			JSXMemberExpressionObject::MemberExpression(inner) => self.member_callee(ctx, inner),
			JSXMemberExpressionObject::ThisExpression(this) => {
				Expression::ThisExpression(this.clone_in(self.allocator))
			}
		};

		self.member_access(
			ctx,
			member.span,
			object,
			member.property.name,
			member.property.span,
		)
	}
}
