pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fragment;
pub mod glob;
pub mod platform;
pub mod resolve;
mod starlark_api;
mod starlark_project;

use std::{fs, path::Path};

use starlark::{
	environment::{
		GlobalsBuilder, //
		Module,
	},
	eval::Evaluator,
	syntax::{
		AstModule, //
		Dialect,
	},
};

pub use builder::{build, build_with, BuildOptions};
pub use descriptor::{ProjectDescriptor, ProjectIdentity};
pub use error::ConfigError;
pub use platform::{DialogBackend, Platform, RendererType};

use starlark_api::err_msg;
use starlark_project::ScriptProject;

pub const KFILE_STAR: &str = "kfile.star";

pub fn parse_script(script_path: &Path, options: &BuildOptions) -> Result<ProjectDescriptor, anyhow::Error> {
	let starlark_code = match fs::read_to_string(script_path) {
		Ok(x) => x,
		Err(e) => return err_msg(format!("Error reading {}: {}", script_path.display(), e)),
	};
	eval_script(&script_path.display().to_string(), starlark_code, options)
}

/// Runs a kfile script with `platform`, `renderer` and `dialog` predefined and returns what it built.
pub fn eval_script(
	filename: &str,
	starlark_code: String,
	options: &BuildOptions,
) -> Result<ProjectDescriptor, anyhow::Error> {
	let platform = options.target_platform()?;
	let ast = match AstModule::parse(filename, starlark_code, &Dialect::Extended) {
		Ok(x) => x,
		Err(e) => return err_msg(format!("Error parsing {}: {}", filename, e)),
	};

	let module = Module::new();
	module.set("platform", module.heap().alloc(platform.system_name()));
	module.set("renderer", module.heap().alloc(options.renderer.to_string()));
	module.set("dialog", module.heap().alloc(options.dialog_backend().to_string()));

	let globals = GlobalsBuilder::standard().with(starlark_api::build_api).build();
	let project = ScriptProject::new(ProjectDescriptor::new(options.identity.name.clone()));
	{
		let mut eval = Evaluator::new(&module);
		eval.extra = Some(&project);
		if let Err(e) = eval.eval_module(ast, &globals) {
			return err_msg(format!("Error evaluating {}: {}", filename, e));
		}
	}

	log::info!("evaluated {} for {}", filename, platform);
	Ok(project.into_descriptor())
}
