use starlark::{
	environment::GlobalsBuilder, //
	eval::Evaluator,
	starlark_module,
	values::{list::UnpackList, none::NoneType},
};

use crate::starlark_project::with_project;

pub(super) fn err_msg<T>(msg: String) -> Result<T, anyhow::Error> {
	Err(anyhow::Error::msg(msg))
}

#[starlark_module]
pub(crate) fn build_api(builder: &mut GlobalsBuilder) {
	fn add_project(name: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_project({})", name);
		with_project(eval, |project| {
			project.dependencies.insert(name.to_owned());
		})
	}

	fn set_icon(path: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("set_icon({})", path);
		with_project(eval, |project| project.icon = Some(path.to_owned()))
	}

	fn set_debug_dir(dir: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("set_debug_dir({})", dir);
		with_project(eval, |project| project.debug_dir = Some(dir.to_owned()))
	}

	fn add_include_dir(dir: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_include_dir({})", dir);
		with_project(eval, |project| project.include_dirs.push(dir.to_owned()))
	}

	fn add_file(pattern: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_file({})", pattern);
		with_project(eval, |project| project.sources.push(pattern.to_owned()))
	}

	fn add_files(patterns: UnpackList<String>, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_files({})", patterns.items.join(", "));
		with_project(eval, |project| project.sources.extend(patterns.items))
	}

	fn add_exclude(pattern: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_exclude({})", pattern);
		with_project(eval, |project| {
			project.excludes.insert(pattern.to_owned());
		})
	}

	fn add_lib(name: &str, eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("add_lib({})", name);
		with_project(eval, |project| project.libraries.push(name.to_owned()))
	}

	fn flatten(eval: &mut Evaluator) -> anyhow::Result<NoneType> {
		log::debug!("flatten()");
		with_project(eval, |project| {
			let descriptor = std::mem::take(project);
			*project = descriptor.flatten();
		})
	}
}
