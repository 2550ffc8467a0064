//! `@jsx` / `@components` header annotations.
//!
//! A file may retarget [`LoweringMode::Targeted`](crate::LoweringMode::Targeted)
//! lowering by carrying annotations in the comments that precede its first
//! statement:
//!
//! ```js
//! /** @jsx React.DOM  @components App.Widgets */
//! ```
//!
//! Annotations only affect the file they appear in.

use oxc::{ast::ast::Program, span::GetSpan};

use crate::{
	constants::{COMPONENTS_PRAGMA, JSX_PRAGMA},
	options::DottedPath,
};

/// Target overrides found in a file header.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Annotations {
	/// The `@jsx` path, overriding the DOM target.
	pub jsx: Option<DottedPath>,
	/// The `@components` path, overriding the components target.
	pub components: Option<DottedPath>,
}

impl Annotations {
	/// Collects the annotations from the leading comments of `program`.
	pub fn from_program(program: &Program<'_>) -> Self {
		let first_code = program
			.directives
			.first()
			.map(|directive| directive.span.start)
			.or_else(|| program.body.first().map(|stmt| stmt.span().start))
			.unwrap_or(u32::MAX);

		let mut annotations = Self::default();
		for comment in &program.comments {
			if comment.span.end > first_code {
				break;
			}
			if !comment.is_block() {
				continue;
			}
			let text = &program.source_text[comment.span.start as usize..comment.span.end as usize];
			annotations.scan(text);
		}
		annotations
	}

	/// Reads annotations out of a single block comment's text. Only lines
	/// that begin with a pragma (after the optional `/**`, `/*` or `*`)
	/// count; later annotations override earlier ones.
	pub fn scan(&mut self, text: &str) {
		for line in text.lines() {
			let line = line.trim_start();
			let line = line
				.strip_prefix("/**")
				.or_else(|| line.strip_prefix("/*"))
				.or_else(|| line.strip_prefix('*'))
				.unwrap_or(line)
				.trim_start();

			if line.starts_with(JSX_PRAGMA) || line.starts_with(COMPONENTS_PRAGMA) {
				self.scan_line(line);
			}
		}
	}

	/// Reads the `@pragma path` pairs of a single docblock line.
	fn scan_line(&mut self, line: &str) {
		let mut words = line.split_whitespace();
		while let Some(word) = words.next() {
			let slot = match word {
				JSX_PRAGMA => &mut self.jsx,
				COMPONENTS_PRAGMA => &mut self.components,
				_ => continue,
			};

			let Some(value) = words.next() else {
				log::warn!("`{word}` annotation without a path");
				break;
			};

			// Block comment terminators can be glued to the path (`@jsx React.DOM*/`).
			let end = value
				.find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
				.unwrap_or(value.len());

			match value[..end].parse::<DottedPath>() {
				Ok(path) => *slot = Some(path),
				Err(err) => log::warn!("ignoring `{word}` annotation: {err}"),
			}
		}
	}
}
