//! High level CLI-as-a-library for the JSX transpiler.
//!
//! This is directly called to by the `jsx-transpiler` CLI binary, and by
//! the fixture tests. It's a thin wrapper around parsing, lowering and
//! code generation; embedders wanting control over the AST should use
//! [`jsx_transpiler::transform`] directly.
use std::sync::Arc;

use jsx_transpiler::{
	DEFAULT_DOM_TARGET, DEFAULT_TAG_CALL, DottedPath, LoweringMode, TransformOptions,
};
use oxc::{
	allocator::Allocator,
	codegen::{Codegen, CodegenOptions},
	diagnostics::{OxcDiagnostic, Severity},
	semantic::SemanticBuilder,
	span::SourceType,
};

/// Command-line spelling of [`LoweringMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
	/// `JSX.tag("div", props, [children])`
	#[default]
	Generic,
	/// Like `generic`, with attributes grouped by namespace prefix
	Grouped,
	/// `React.DOM.div(props, [children])`
	Targeted,
}

impl From<Mode> for LoweringMode {
	fn from(mode: Mode) -> Self {
		match mode {
			Mode::Generic => Self::Generic,
			Mode::Grouped => Self::Grouped,
			Mode::Targeted => Self::Targeted,
		}
	}
}

/// Options for a single transpilation.
#[derive(Debug, Clone, clap::Args)]
pub struct Args {
	/// Where to output the result. Defaults to
	/// stdout; intermediate folders must exist
	#[arg(short = 'o', long = "output")]
	pub output: Option<String>,
	/// Treat warnings as errors
	#[arg(short = 'W')]
	pub warnings_as_errors: bool,
	/// Minify the output (drops comments)
	#[arg(short = 'M', long = "minify")]
	pub minify: bool,
	/// When set, enables sourcemaps (embedded in the output).
	#[arg(short = 'm', long = "map")]
	pub generate_sourcemaps: bool,
	/// The file to transpile
	/// (defaults to stdin)
	pub entry_point: Option<String>,
	/// Allow typescript syntax in the input
	#[arg(short = 'T', long = "typescript")]
	pub typescript: bool,
	/// The shape of the generated calls
	#[arg(long = "mode", value_enum, default_value_t = Mode::Generic)]
	pub mode: Mode,
	/// The function called for every element in
	/// `generic` and `grouped` mode
	#[arg(long = "tag-call", default_value = DEFAULT_TAG_CALL)]
	pub tag_call: DottedPath,
	/// The object known tags resolve against in
	/// `targeted` mode (overridden by `@jsx`)
	#[arg(long = "dom", default_value = DEFAULT_DOM_TARGET)]
	pub dom: DottedPath,
	/// The object other tags resolve against in
	/// `targeted` mode (overridden by `@components`)
	#[arg(long = "components")]
	pub components: Option<DottedPath>,
}

impl Args {
	/// The library options these arguments describe.
	#[must_use]
	pub fn transform_options(&self) -> TransformOptions {
		TransformOptions {
			mode: self.mode.into(),
			tag_call: self.tag_call.clone(),
			dom_target: self.dom.clone(),
			components_target: self.components.clone(),
		}
	}
}

impl Default for Args {
	fn default() -> Self {
		let options = TransformOptions::default();
		Self {
			output: None,
			warnings_as_errors: false,
			minify: false,
			generate_sourcemaps: false,
			entry_point: None,
			typescript: false,
			mode: Mode::default(),
			tag_call: options.tag_call,
			dom: options.dom_target,
			components: options.components_target,
		}
	}
}

/// The `Ok` result type for the [`run`] function.
#[derive(Debug, Default)]
pub struct Compilation {
	/// The generated code.
	pub code: String,
	/// Any warnings
	pub warnings: Vec<String>,
	/// Any errors; if non-empty, `code` will be empty.
	pub errors: Vec<String>,
}

impl Compilation {
	/// Renders `diagnostics` into the compilation, returning how many
	/// of them are errors.
	fn report(
		&mut self,
		diagnostics: impl IntoIterator<Item = OxcDiagnostic>,
		args: &Args,
		source: &Arc<String>,
	) -> usize {
		let mut errors = 0;

		for mut diagnostic in diagnostics {
			if args.warnings_as_errors {
				diagnostic = diagnostic.with_severity(Severity::Error);
			}

			let is_error = diagnostic.severity == Severity::Error;
			let rendered = format!("{:?}", diagnostic.with_source_code(Arc::clone(source)));

			if is_error {
				errors += 1;
				self.errors.push(rendered);
			} else {
				self.warnings.push(rendered);
			}
		}

		errors
	}
}

/// Runs the transpiler over `source` with the given arguments.
///
/// This is identical to running the CLI (except for parsing the arguments
/// and writing the output).
///
/// `Err` results indicate fatal errors that prevent compilation from completing.
/// This does **not** include warnings or syntax errors, which are included in the [`Compilation`]
/// result.
pub fn run(source: String, args: &Args) -> Result<Compilation, Box<dyn std::error::Error>> {
	let mut result = Compilation::default();

	let source = Arc::new(source);

	let allocator = Allocator::default();
	let parse_result = oxc::parser::Parser::new(
		&allocator,
		&source,
		if args.typescript {
			SourceType::tsx()
		} else {
			SourceType::jsx()
		},
	)
	.parse();

	if parse_result.panicked && parse_result.errors.is_empty() {
		return Err("parser panicked, but no errors were reported".into());
	}

	if result.report(parse_result.errors, args, &source) > 0 {
		return Ok(result);
	}

	let mut program = parse_result.program;

	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);

	if result.report(semantic.errors, args, &source) > 0 {
		return Ok(result);
	}

	let scoping = semantic.semantic.into_scoping();
	let options = args.transform_options();
	log::debug!("lowering with {options:?}");

	let scoping = match jsx_transpiler::transform(&allocator, &mut program, scoping, &options) {
		Ok(transformed) => {
			log::debug!("lowered {} jsx elements", transformed.lowered_elements);
			transformed.scoping
		}
		Err(diagnostics) => {
			result.report(diagnostics, args, &source);
			return Ok(result);
		}
	};

	let codegen_options = CodegenOptions {
		minify: args.minify,
		comments: !args.minify,
		source_map_path: if args.generate_sourcemaps {
			if let Some(ref entry) = args.entry_point {
				Some(entry.into())
			} else {
				Some("jsx-transpiler.js.map".into())
			}
		} else {
			None
		},
		..CodegenOptions::default()
	};

	let generated = Codegen::new()
		.with_options(codegen_options)
		.with_scoping(Some(scoping))
		.build(&program);

	let sourcemap_string = if args.generate_sourcemaps {
		if let Some(ref sourcemap) = generated.map {
			Some(sourcemap.to_data_url())
		} else {
			result
				.warnings
				.push("sourcemap generation requested, but no sourcemap was generated".into());
			None
		}
	} else {
		None
	};

	result.code = generated.code;
	if let Some(ref sm) = sourcemap_string {
		result.code.push_str("\n//# sourceMappingURL=");
		result.code.push_str(sm);
	}

	Ok(result)
}
