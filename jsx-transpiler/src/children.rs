//! Whitespace normalisation of an element's children.
//!
//! Only the two edges of a children list are touched; interior text is
//! kept exactly as written. An edge text child that is entirely whitespace
//! is dropped, unless it is the only child left, in which case it is
//! blanked to `""`. An edge text child with content only loses the
//! whitespace on its outer side.

use oxc::{allocator::Vec, span::Span};

use crate::{
	element::{Child, TextChild},
	visit::Visit,
};

/// Which edge of a children list to trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// The first child; whitespace is stripped from its left.
	Start,
	/// The last child; whitespace is stripped from its right.
	End,
}

/// Trims both edges of `children`, start first.
pub fn normalize_children(children: &mut Vec<'_, Child<'_>>) {
	for side in [Side::Start, Side::End] {
		if !children.is_empty() {
			trim_edge(children, side);
		}
	}
}

/// Trims one edge of a non-empty `children` list.
fn trim_edge(children: &mut Vec<'_, Child<'_>>, side: Side) {
	let sole = children.len() == 1;
	let index = match side {
		Side::Start => 0,
		Side::End => children.len() - 1,
	};

	let Child::Text(text) = &children[index] else {
		return;
	};

	match text.trim(side, sole) {
		Visit::Keep => {}
		Visit::Replace(text) => children[index] = Child::Text(text),
		Visit::Remove => {
			children.remove(index);
		}
	}
}

impl<'a> TextChild<'a> {
	/// Decides what becomes of this text when it sits on the `side` edge.
	pub fn trim(&self, side: Side, sole: bool) -> Visit<Self> {
		if self.value.trim().is_empty() {
			return if sole {
				Visit::Replace(Self {
					span: Span::new(self.span.start, self.span.start),
					value: "",
					raw: "",
				})
			} else {
				Visit::Remove
			};
		}

		let (value, raw) = match side {
			Side::Start => (self.value.trim_start(), self.raw.trim_start()),
			Side::End => (self.value.trim_end(), self.raw.trim_end()),
		};

		if raw.len() == self.raw.len() && value.len() == self.value.len() {
			return Visit::Keep;
		}

		let trimmed = (self.raw.len() - raw.len()) as u32;
		let span = match side {
			Side::Start => Span::new(self.span.start + trimmed, self.span.end),
			Side::End => Span::new(self.span.start, self.span.end - trimmed),
		};

		Visit::Replace(Self { span, value, raw })
	}
}
