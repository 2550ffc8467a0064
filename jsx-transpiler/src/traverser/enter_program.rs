use oxc::ast::ast::Program;
use oxc_traverse::TraverseCtx;

use super::Targets;
use crate::{LoweringMode, header::Annotations};

impl<'a> super::JsxTraverser<'a, '_> {
	/// Resolves the call targets for this tree, applying any header
	/// annotations on top of the configured defaults.
	pub(crate) fn inner_enter_program(&mut self, node: &mut Program<'a>, ctx: &mut TraverseCtx<'a>) {
		let options = self.options;

		let annotations = if options.mode == LoweringMode::Targeted {
			Annotations::from_program(node)
		} else {
			Annotations::default()
		};

		let dom = annotations.jsx.as_ref().map_or(&options.dom_target, |path| {
			log::debug!("@jsx annotation overrides the DOM target: {path}");
			path
		});
		let components = annotations.components.as_ref().map_or(
			options.components_target.as_ref(),
			|path| {
				log::debug!("@components annotation overrides the components target: {path}");
				Some(path)
			},
		);

		let targets = Targets {
			tag_call: self.path_to_expression(ctx, &options.tag_call),
			dom: self.path_to_expression(ctx, dom),
			components: components.map(|path| self.path_to_expression(ctx, path)),
		};

		self.targets = Some(targets);
	}
}
