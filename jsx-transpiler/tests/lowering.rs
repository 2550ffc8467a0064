#![allow(missing_docs, clippy::missing_docs_in_private_items)]

use jsx_transpiler::{DottedPath, LoweringMode, TransformOptions, transform};
use oxc::{
	allocator::Allocator,
	ast::ast::{
		Argument, ArrayExpressionElement, CallExpression, Expression, ObjectExpression,
		ObjectPropertyKind, Program, PropertyKey, Statement,
	},
	codegen::Codegen,
	diagnostics::OxcDiagnostic,
	parser::Parser,
	semantic::SemanticBuilder,
	span::SourceType,
};
use pretty_assertions::assert_eq;

fn options(mode: LoweringMode) -> TransformOptions {
	TransformOptions {
		mode,
		..TransformOptions::default()
	}
}

/// Parses `source`, lowers it and hands the result to `check`.
fn lower<R>(
	source: &str,
	options: &TransformOptions,
	check: impl FnOnce(Result<&Program<'_>, Vec<OxcDiagnostic>>) -> R,
) -> R {
	let allocator = Allocator::default();
	let parsed = Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(parsed.errors.is_empty(), "parse errors: {:?}", parsed.errors);

	let mut program = parsed.program;
	let scoping = SemanticBuilder::new()
		.build(&program)
		.semantic
		.into_scoping();

	match transform(&allocator, &mut program, scoping, options) {
		Ok(_) => check(Ok(&program)),
		Err(errors) => check(Err(errors)),
	}
}

fn print(program: &Program<'_>) -> String {
	Codegen::new().build(program).code
}

fn first_expression<'p, 'a>(program: &'p Program<'a>) -> &'p Expression<'a> {
	match &program.body[0] {
		Statement::ExpressionStatement(stmt) => &stmt.expression,
		other => panic!("expected an expression statement, got {other:?}"),
	}
}

fn as_call<'p, 'a>(expr: &'p Expression<'a>) -> &'p CallExpression<'a> {
	match expr {
		Expression::CallExpression(call) => call,
		other => panic!("expected a call, got {other:?}"),
	}
}

fn as_object<'p, 'a>(arg: &'p Argument<'a>) -> &'p ObjectExpression<'a> {
	match arg {
		Argument::ObjectExpression(object) => object,
		other => panic!("expected an object, got {other:?}"),
	}
}

fn string_arg(arg: &Argument<'_>) -> String {
	match arg {
		Argument::StringLiteral(lit) => lit.value.to_string(),
		other => panic!("expected a string literal, got {other:?}"),
	}
}

fn key_name(key: &PropertyKey<'_>) -> String {
	match key {
		PropertyKey::StaticIdentifier(ident) => ident.name.to_string(),
		PropertyKey::StringLiteral(lit) => format!("{:?}", lit.value.as_str()),
		other => panic!("unexpected key {other:?}"),
	}
}

/// Renders an expression in a compact, codegen-independent form.
fn render(expr: &Expression<'_>) -> String {
	match expr {
		Expression::StringLiteral(lit) => format!("{:?}", lit.value.as_str()),
		Expression::BooleanLiteral(lit) => lit.value.to_string(),
		Expression::NullLiteral(_) => "null".into(),
		Expression::NumericLiteral(lit) => lit.value.to_string(),
		Expression::Identifier(ident) => ident.name.to_string(),
		Expression::ThisExpression(_) => "this".into(),
		Expression::StaticMemberExpression(member) => {
			format!("{}.{}", render(&member.object), member.property.name)
		}
		Expression::ComputedMemberExpression(member) => {
			format!("{}[{}]", render(&member.object), render(&member.expression))
		}
		Expression::ObjectExpression(object) => render_object(object),
		Expression::ArrayExpression(array) => {
			let elements = array
				.elements
				.iter()
				.map(|element| {
					match element {
						ArrayExpressionElement::SpreadElement(spread) => {
							format!("...{}", render(&spread.argument))
						}
						other => render(other.to_expression()),
					}
				})
				.collect::<Vec<_>>();
			format!("[{}]", elements.join(", "))
		}
		Expression::CallExpression(call) => render_call(call),
		other => panic!("unexpected expression {other:?}"),
	}
}

fn render_object(object: &ObjectExpression<'_>) -> String {
	let properties = object
		.properties
		.iter()
		.map(|property| {
			match property {
				ObjectPropertyKind::ObjectProperty(property) => {
					format!("{}: {}", key_name(&property.key), render(&property.value))
				}
				ObjectPropertyKind::SpreadProperty(spread) => {
					format!("...{}", render(&spread.argument))
				}
			}
		})
		.collect::<Vec<_>>();
	format!("{{{}}}", properties.join(", "))
}

fn render_call(call: &CallExpression<'_>) -> String {
	let arguments = call
		.arguments
		.iter()
		.map(|arg| render(arg.to_expression()))
		.collect::<Vec<_>>();
	format!("{}({})", render(&call.callee), arguments.join(", "))
}

/// Lowers a single expression statement and renders it.
fn lower_one(source: &str, options: &TransformOptions) -> String {
	lower(source, options, |program| {
		let program = program.expect("transform failed");
		render(first_expression(program))
	})
}

fn generic(source: &str) -> String {
	lower_one(source, &TransformOptions::default())
}

#[test]
fn empty_element_lowers_to_name_and_null() {
	lower("<div/>;", &TransformOptions::default(), |program| {
		let program = program.unwrap();
		let call = as_call(first_expression(program));
		assert_eq!(render(&call.callee), "JSX.tag");
		assert_eq!(call.arguments.len(), 2);
		assert_eq!(string_arg(&call.arguments[0]), "div");
		assert!(matches!(call.arguments[1], Argument::NullLiteral(_)));
		assert!(print(program).contains("JSX.tag("));
	});
}

#[test]
fn attribute_values() {
	lower(r#"<div id="x"/>;"#, &TransformOptions::default(), |program| {
		let call = as_call(first_expression(program.unwrap()));
		let props = as_object(&call.arguments[1]);
		assert_eq!(props.properties.len(), 1);
		let ObjectPropertyKind::ObjectProperty(id) = &props.properties[0] else {
			panic!("expected a plain property");
		};
		assert_eq!(key_name(&id.key), "id");
		assert!(matches!(&id.value, Expression::StringLiteral(lit) if lit.value.as_str() == "x"));
	});

	assert_eq!(generic("<div disabled/>;"), r#"JSX.tag("div", {disabled: true})"#);
	assert_eq!(generic("<input value={a} />;"), r#"JSX.tag("input", {value: a})"#);
	assert_eq!(generic("<a b={}/>;"), r#"JSX.tag("a", {b: null})"#);
}

#[test]
fn attribute_keys() {
	assert_eq!(
		generic(r##"<div aria-label="x" xlink:href="#a" className="c"/>;"##),
		r##"JSX.tag("div", {"aria-label": "x", "xlink:href": "#a", className: "c"})"##
	);
}

#[test]
fn attribute_strings_are_entity_decoded() {
	assert_eq!(
		generic(r#"<a title="Tom &amp; Jerry"/>;"#),
		r#"JSX.tag("a", {title: "Tom & Jerry"})"#
	);
}

#[test]
fn spread_attributes_keep_their_position() {
	assert_eq!(
		generic(r#"<div a="1" {...rest} b/>;"#),
		r#"JSX.tag("div", {a: "1", ...rest, b: true})"#
	);
}

#[test]
fn element_valued_attributes_are_lowered() {
	assert_eq!(
		generic("<Layout header=<h1/> />;"),
		r#"JSX.tag("Layout", {header: JSX.tag("h1", null)})"#
	);
}

#[test]
fn grouped_attributes() {
	let grouped = options(LoweringMode::Grouped);
	assert_eq!(
		lower_one(r#"<div data-foo="1" data-bar="2" plain="3"/>;"#, &grouped),
		r##"JSX.tag("div", {data: {foo: "1", bar: "2"}, "#default": {plain: "3"}})"##
	);
	assert_eq!(
		lower_one(r##"<svg xlink:href="#a" id="s" xlink:title="t"/>;"##, &grouped),
		r##"JSX.tag("svg", {xlink: {href: "#a", title: "t"}, "#default": {id: "s"}})"##
	);
	assert_eq!(lower_one("<div/>;", &grouped), r#"JSX.tag("div", null)"#);
	assert_eq!(
		lower_one("<div {...rest} on-click={f}/>;", &grouped),
		r##"JSX.tag("div", {"#default": {...rest}, on: {click: f}})"##
	);
}

#[test]
fn children_edges_are_trimmed() {
	lower(
		"<div>\n  <span/>  text  \n</div>;",
		&TransformOptions::default(),
		|program| {
			let call = as_call(first_expression(program.unwrap()));
			assert_eq!(call.arguments.len(), 3);
			let Argument::ArrayExpression(children) = &call.arguments[2] else {
				panic!("expected a children array");
			};
			assert_eq!(children.elements.len(), 2);
			assert_eq!(
				render(children.elements[0].to_expression()),
				r#"JSX.tag("span", null)"#
			);
			assert_eq!(render(children.elements[1].to_expression()), r#""  text""#);
		},
	);
}

#[test]
fn interior_whitespace_is_preserved() {
	assert_eq!(
		generic("<p>\n  <b/> <i/>\n</p>;"),
		r#"JSX.tag("p", null, [JSX.tag("b", null), " ", JSX.tag("i", null)])"#
	);
}

#[test]
fn sole_whitespace_child_is_blanked() {
	assert_eq!(generic("<p>   </p>;"), r#"JSX.tag("p", null, [""])"#);
	assert_eq!(generic("<p></p>;"), r#"JSX.tag("p", null)"#);
}

#[test]
fn text_is_entity_decoded() {
	assert_eq!(
		generic("<p> a &lt; b </p>;"),
		r#"JSX.tag("p", null, ["a < b"])"#
	);
}

#[test]
fn expression_containers_are_unwrapped() {
	assert_eq!(
		generic("<p>{name}{/* comment */}{}</p>;"),
		r#"JSX.tag("p", null, [name, null, null])"#
	);
	assert_eq!(
		generic("<ul>{items.length}{...rest}</ul>;"),
		r#"JSX.tag("ul", null, [items.length, ...rest])"#
	);
}

#[test]
fn nested_elements_inside_expressions() {
	lower(
		"<p>{ok ? <b/> : <i>x</i>}</p>;",
		&TransformOptions::default(),
		|program| {
			let code = print(program.unwrap());
			assert!(!code.contains('<'), "jsx left in output: {code}");
			assert!(code.contains("JSX.tag(\"b\", null)"), "{code}");
		},
	);
}

#[test]
fn fragments_lower_to_arrays() {
	assert_eq!(generic("<>\n  <a/>\n  text\n</>;"), r#"[JSX.tag("a", null), "\n  text"]"#);
	assert_eq!(generic("<></>;"), "[]");
	assert_eq!(
		generic("<div><>x</></div>;"),
		r#"JSX.tag("div", null, [["x"]])"#
	);
}

#[test]
fn generic_tag_names() {
	assert_eq!(generic("<my-tag/>;"), r#"JSX.tag("my-tag", null)"#);
	assert_eq!(generic("<svg:rect/>;"), r#"JSX.tag("svg:rect", null)"#);
	assert_eq!(generic("<A.B/>;"), r#"JSX.tag("A:B", null)"#);
	assert_eq!(generic("<A.B.C/>;"), r#"JSX.tag("A:B:C", null)"#);
	assert_eq!(generic("<Foo/>;"), r#"JSX.tag("Foo", null)"#);
}

#[test]
fn custom_tag_call() {
	let options = TransformOptions {
		tag_call: "h".parse::<DottedPath>().unwrap(),
		..TransformOptions::default()
	};
	assert_eq!(lower_one("<div/>;", &options), r#"h("div", null)"#);
}

#[test]
fn targeted_tags() {
	let targeted = options(LoweringMode::Targeted);
	assert_eq!(lower_one("<div/>;", &targeted), "React.DOM.div(null)");
	assert_eq!(
		lower_one(r#"<div id="x">hi</div>;"#, &targeted),
		r#"React.DOM.div({id: "x"}, ["hi"])"#
	);
	assert_eq!(lower_one("<Button/>;", &targeted), "Button(null)");
	assert_eq!(lower_one("<A.B/>;", &targeted), "A.B(null)");
	assert_eq!(lower_one("<my-tag/>;", &targeted), r#"React.DOM["my-tag"](null)"#);
}

#[test]
fn targeted_member_tag_is_a_member_expression() {
	lower("<A.B/>;", &options(LoweringMode::Targeted), |program| {
		let call = as_call(first_expression(program.unwrap()));
		let Expression::StaticMemberExpression(member) = &call.callee else {
			panic!("expected a member expression callee");
		};
		assert!(matches!(&member.object, Expression::Identifier(ident) if ident.name.as_str() == "A"));
		assert_eq!(member.property.name.as_str(), "B");
	});
}

#[test]
fn targeted_components_target() {
	let options = TransformOptions {
		mode: LoweringMode::Targeted,
		components_target: Some("UI".parse().unwrap()),
		..TransformOptions::default()
	};
	assert_eq!(lower_one("<Button/>;", &options), "UI.Button(null)");
	assert_eq!(lower_one("<span/>;", &options), "React.DOM.span(null)");
	assert_eq!(lower_one("<my-tag/>;", &options), r#"UI["my-tag"](null)"#);
}

#[test]
fn header_annotations_override_targets_per_tree() {
	let targeted = options(LoweringMode::Targeted);
	assert_eq!(
		lower_one("/** @jsx h.dom @components App.UI */\n<div><Nav/></div>;", &targeted),
		"h.dom.div(null, [App.UI.Nav(null)])"
	);
	// A later tree without annotations is back to the configured targets.
	assert_eq!(
		lower_one("<div><Nav/></div>;", &targeted),
		"React.DOM.div(null, [Nav(null)])"
	);
	// Comments after the first statement are not headers.
	assert_eq!(lower_one("<div/>;\n/* @jsx h */", &targeted), "React.DOM.div(null)");
}

#[test]
fn prose_mentions_of_pragmas_keep_the_configured_targets() {
	let targeted = options(LoweringMode::Targeted);
	assert_eq!(
		lower_one("// Rendered without the @jsx pragma on purpose.\n<div/>;", &targeted),
		"React.DOM.div(null)"
	);
	assert_eq!(
		lower_one("/* Uses @components when set. */\n<Nav/>;", &targeted),
		"Nav(null)"
	);
}

#[test]
fn header_annotations_are_ignored_outside_targeted_mode() {
	assert_eq!(generic("/** @jsx h */\n<div/>;"), r#"JSX.tag("div", null)"#);
}

#[test]
fn targeted_namespace_tags_are_fatal() {
	lower("<ns:Foo/>;", &options(LoweringMode::Targeted), |result| {
		let errors = result.expect_err("namespace tags must fail");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].to_string(), "Namespace tags are not supported");
	});
}

#[test]
fn programs_without_jsx_are_untouched() {
	let source = "const a = { b: [1, 2], c: f(x) };\nfunction g(y) {\n\treturn y?.z ?? 'q';\n}\n";

	let allocator = Allocator::default();
	let mut program = Parser::new(&allocator, source, SourceType::jsx())
		.parse()
		.program;
	let before = print(&program);
	let scoping = SemanticBuilder::new()
		.build(&program)
		.semantic
		.into_scoping();

	let result = transform(&allocator, &mut program, scoping, &TransformOptions::default())
		.unwrap_or_else(|errors| panic!("{errors:?}"));

	assert_eq!(result.lowered_elements, 0);
	assert_eq!(print(&program), before);
}

#[test]
fn counts_lowered_elements() {
	let allocator = Allocator::default();
	let source = "const x = <div><a/><>{<b/>}</></div>;";
	let mut program = Parser::new(&allocator, source, SourceType::jsx())
		.parse()
		.program;
	let scoping = SemanticBuilder::new()
		.build(&program)
		.semantic
		.into_scoping();

	let result = transform(&allocator, &mut program, scoping, &TransformOptions::default())
		.unwrap_or_else(|errors| panic!("{errors:?}"));

	assert_eq!(result.lowered_elements, 4);
	assert!(!print(&program).contains('<'));
}
