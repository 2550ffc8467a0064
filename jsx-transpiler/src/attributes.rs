//! Lowering of an element's attribute list into its props argument.

use oxc::{
	allocator::{Allocator, Box, FromIn, Vec},
	ast::ast::{
		Expression, IdentifierName, ObjectExpression, ObjectProperty,
		ObjectPropertyKind, PropertyKey, PropertyKind, SpreadElement, StringLiteral,
	},
	span::{Atom, Span},
	syntax::identifier::is_identifier_name,
};

use crate::{
	constants::{DEFAULT_NAMESPACE, NAMESPACE_SEPARATOR, PREFIX_SEPARATOR},
	traverser::null_literal,
};

/// A single lowered attribute.
pub enum AttributeEntry<'a> {
	/// `name="value"`, `name={value}` or a bare `name`.
	Property {
		/// The span of the whole attribute.
		span: Span,
		/// The attribute's full name, e.g. `id`, `data-id` or `xlink:href`.
		name: Atom<'a>,
		/// The attribute's value; `true` for bare attributes.
		value: Expression<'a>,
	},
	/// `{...rest}`.
	Spread(Box<'a, SpreadElement<'a>>),
}

/// Builds an object property key: an identifier when `name` allows it,
/// a string literal otherwise.
pub fn property_key<'a>(name: Atom<'a>, span: Span, allocator: &'a Allocator) -> PropertyKey<'a> {
	if is_identifier_name(&name) {
		PropertyKey::StaticIdentifier(Box::new_in(IdentifierName { span, name }, allocator))
	} else {
		PropertyKey::StringLiteral(Box::new_in(
			StringLiteral {
				span,
				value: name,
				raw: None,
				lossy: false,
			},
			allocator,
		))
	}
}

/// Builds a plain `key: value` property.
fn init_property<'a>(
	span: Span,
	key: PropertyKey<'a>,
	value: Expression<'a>,
	allocator: &'a Allocator,
) -> ObjectPropertyKind<'a> {
	ObjectPropertyKind::ObjectProperty(Box::new_in(
		ObjectProperty {
			span,
			kind: PropertyKind::Init,
			key,
			value,
			method: false,
			shorthand: false,
			computed: false,
		},
		allocator,
	))
}

/// Wraps `properties` in an object expression, or returns `null` if there
/// are none.
fn object_or_null<'a>(
	span: Span,
	properties: Vec<'a, ObjectPropertyKind<'a>>,
	allocator: &'a Allocator,
) -> Expression<'a> {
	if properties.is_empty() {
		null_literal(span, allocator)
	} else {
		Expression::ObjectExpression(Box::new_in(
			ObjectExpression {
				span,
				properties,
				trailing_comma: None,
			},
			allocator,
		))
	}
}

/// Lowers `attributes` into a single flat object, in source order.
pub fn flat_props<'a>(
	span: Span,
	attributes: Vec<'a, AttributeEntry<'a>>,
	allocator: &'a Allocator,
) -> Expression<'a> {
	let properties = Vec::from_iter_in(
		attributes.into_iter().map(|attribute| {
			match attribute {
				AttributeEntry::Property { span, name, value } => {
					init_property(span, property_key(name, span, allocator), value, allocator)
				}
				AttributeEntry::Spread(spread) => ObjectPropertyKind::SpreadProperty(spread),
			}
		}),
		allocator,
	);

	object_or_null(span, properties, allocator)
}

/// Splits an attribute name into its namespace and local name.
///
/// The namespace is whatever precedes the first `:`, or failing that the
/// first `-`. Names with neither belong to [`DEFAULT_NAMESPACE`].
pub fn split_namespace(name: &str) -> (&str, &str) {
	name.split_once(NAMESPACE_SEPARATOR)
		.or_else(|| name.split_once(PREFIX_SEPARATOR))
		.unwrap_or((DEFAULT_NAMESPACE, name))
}

/// One namespace's worth of properties.
struct Group<'a> {
	/// The span of the first attribute in the group.
	span: Span,
	/// The namespace.
	namespace: Atom<'a>,
	/// The properties, namespace prefix removed.
	properties: Vec<'a, ObjectPropertyKind<'a>>,
}

/// Lowers `attributes` into one object per namespace, in order of each
/// namespace's first appearance. Spreads land in [`DEFAULT_NAMESPACE`].
pub fn grouped_props<'a>(
	span: Span,
	attributes: Vec<'a, AttributeEntry<'a>>,
	allocator: &'a Allocator,
) -> Expression<'a> {
	let mut groups: std::vec::Vec<Group<'a>> = std::vec::Vec::new();

	for attribute in attributes {
		let (attr_span, namespace, property) = match attribute {
			AttributeEntry::Property { span, name, value } => {
				let (namespace, local) = split_namespace(&name);
				let namespace = Atom::from_in(namespace, allocator);
				let key = property_key(Atom::from_in(local, allocator), span, allocator);
				(span, namespace, init_property(span, key, value, allocator))
			}
			AttributeEntry::Spread(spread) => {
				(
					spread.span,
					Atom::new_const(DEFAULT_NAMESPACE),
					ObjectPropertyKind::SpreadProperty(spread),
				)
			}
		};

		let index = if let Some(index) = groups.iter().position(|g| g.namespace == namespace) {
			index
		} else {
			groups.push(Group {
				span: attr_span,
				namespace,
				properties: Vec::new_in(allocator),
			});
			groups.len() - 1
		};

		groups[index].properties.push(property);
	}

	let properties = Vec::from_iter_in(
		groups.into_iter().map(|group| {
			let key = property_key(group.namespace, group.span, allocator);
			let value = object_or_null(group.span, group.properties, allocator);
			init_property(group.span, key, value, allocator)
		}),
		allocator,
	);

	object_or_null(span, properties, allocator)
}
