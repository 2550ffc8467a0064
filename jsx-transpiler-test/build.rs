#![allow(
	missing_docs,
	clippy::missing_docs_in_private_items,
	clippy::similar_names
)]

use std::{collections::BTreeMap, io::Write, path::PathBuf};

use quote::quote;

/// What a fixture is expected to produce.
#[derive(Debug)]
enum Expectation {
	/// `<mode>.<case>.js`: the lowered code.
	Code(PathBuf),
	/// `<mode>.<case>.err`: text that must appear in one of the errors.
	Error(PathBuf),
}

#[derive(Debug, Default)]
struct TestCase {
	jsx_file: Option<PathBuf>,
	expectation: Option<Expectation>,
}

const MODES: &[(&str, &str)] = &[
	("generic", "Generic"),
	("grouped", "Grouped"),
	("targeted", "Targeted"),
];

fn main() {
	println!("cargo:rerun-if-changed=tests/");
	println!("cargo:rerun-if-changed=build.rs");

	let suites = discover_cases();
	let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
	let dest_path = out_dir.join("tests.rs");

	let mut file = std::fs::File::create(dest_path).unwrap();

	for (mode_name, cases) in suites {
		let variant = MODES
			.iter()
			.find(|(name, _)| *name == mode_name)
			.map(|(_, variant)| syn::Ident::new(variant, cs()))
			.unwrap_or_else(|| panic!("Unknown lowering mode: {mode_name}"));

		let mut tests = vec![];

		for (case_name, case) in cases {
			let jsx_file = case
				.jsx_file
				.unwrap_or_else(|| panic!("Case '{mode_name}.{case_name}' has no .jsx source"));
			let expectation = case.expectation.unwrap_or_else(|| {
				panic!("Case '{mode_name}.{case_name}' has neither a .js nor an .err expectation")
			});

			let jsx_src = std::fs::read_to_string(&jsx_file).unwrap_or_else(|_| {
				panic!("Failed to read JSX fixture file: {}", jsx_file.display())
			});
			let jsx_path = jsx_file.to_string_lossy().to_string();

			let test_fn_name = syn::Ident::new(&case_name, cs());

			let check = match expectation {
				Expectation::Code(path) => {
					let js_src = std::fs::read_to_string(&path).unwrap_or_else(|_| {
						panic!("Failed to read JS expectation file: {}", path.display())
					});
					quote! {
						crate::harness::assert_lowers(
							jsx_transpiler_cli::Mode::#variant,
							#jsx_path,
							#jsx_src,
							#js_src,
						);
					}
				}
				Expectation::Error(path) => {
					let message = std::fs::read_to_string(&path).unwrap_or_else(|_| {
						panic!("Failed to read error expectation file: {}", path.display())
					});
					let message = message.trim();
					quote! {
						crate::harness::assert_fails(
							jsx_transpiler_cli::Mode::#variant,
							#jsx_path,
							#jsx_src,
							#message,
						);
					}
				}
			};

			tests.push(quote! {
				#[test]
				fn #test_fn_name() {
					#check
				}
			});
		}

		let mod_name = syn::Ident::new(&mode_name, cs());
		let ts = quote! {
			#[cfg(test)]
			mod #mod_name {
				#(#tests)*
			}
		};

		let f = syn::parse2::<syn::File>(ts).unwrap();

		write!(file, "{}", prettyplease::unparse(&f)).unwrap();
	}
}

fn cs() -> proc_macro2::Span {
	proc_macro2::Span::call_site()
}

fn discover_cases() -> BTreeMap<String, BTreeMap<String, TestCase>> {
	// 1. Crawl `CARGO_MANIFEST_DIR/tests` for fixture files.
	// 2. Sources are `<mode>.<case>.jsx`; expectations are `<mode>.<case>.js`
	//    or `<mode>.<case>.err`.
	// 3. Panic on any folders.
	// 4. Panic on any filenames that do not match the above patterns.
	// 5. Mode and case names must be valid Rust identifiers. Panic if not.
	let mut suites: BTreeMap<String, BTreeMap<String, TestCase>> = BTreeMap::new();
	let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	let tests_dir = PathBuf::from(manifest_dir).join("tests");
	for entry in std::fs::read_dir(tests_dir).unwrap() {
		let entry = entry.unwrap();
		let path = entry.path();
		assert!(
			!path.is_dir(),
			"Directories are not allowed in the tests/ folder: {}",
			path.display()
		);
		let filename = path.file_name().unwrap().to_string_lossy().to_string();
		let parts: Vec<&str> = filename.split('.').collect();
		assert!(
			parts.len() == 3,
			"Fixture filename does not match pattern <mode>.<case>.<jsx|js|err>: {filename}"
		);
		let (mode_name, case_name, extension) = (parts[0], parts[1], parts[2]);
		assert!(
			is_valid_rust_identifier(mode_name),
			"Mode name is not a valid Rust identifier: {mode_name}"
		);
		assert!(
			is_valid_rust_identifier(case_name),
			"Case name is not a valid Rust identifier: {case_name}"
		);

		let case = suites
			.entry(mode_name.to_string())
			.or_default()
			.entry(case_name.to_string())
			.or_default();

		match extension {
			"jsx" => case.jsx_file = Some(path),
			"js" | "err" => {
				assert!(
					case.expectation.is_none(),
					"Case '{mode_name}.{case_name}' has more than one expectation"
				);
				case.expectation = Some(if extension == "js" {
					Expectation::Code(path)
				} else {
					Expectation::Error(path)
				});
			}
			_ => panic!("Invalid file in tests/ folder: {filename}"),
		}
	}
	suites
}

fn is_valid_rust_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => (),
		_ => return false,
	}
	for c in chars {
		if !(c.is_ascii_alphanumeric() || c == '_') {
			return false;
		}
	}
	true
}
