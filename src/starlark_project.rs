use std::cell::RefCell;

use starlark::{
	eval::Evaluator, //
	values::{none::NoneType, ProvidesStaticType},
};

use crate::descriptor::ProjectDescriptor;

/// Descriptor under construction while a kfile script runs. Handed to the evaluator as `extra`.
#[derive(Debug, Default, ProvidesStaticType)]
pub(crate) struct ScriptProject(RefCell<ProjectDescriptor>);

impl ScriptProject {
	pub fn new(descriptor: ProjectDescriptor) -> Self {
		ScriptProject(RefCell::new(descriptor))
	}

	pub fn into_descriptor(self) -> ProjectDescriptor {
		self.0.into_inner()
	}
}

pub(crate) fn with_project(eval: &Evaluator, f: impl FnOnce(&mut ProjectDescriptor)) -> anyhow::Result<NoneType> {
	let project = match eval.extra.and_then(|x| x.downcast_ref::<ScriptProject>()) {
		Some(x) => x,
		None => return Err(anyhow::anyhow!("kfile functions can only be called while evaluating a kfile")),
	};
	let mut descriptor = match project.0.try_borrow_mut() {
		Ok(x) => x,
		Err(e) => return Err(anyhow::anyhow!("Project is already being modified: {}", e)),
	};
	f(&mut *descriptor);
	Ok(NoneType)
}
