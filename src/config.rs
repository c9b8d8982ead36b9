use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
	builder::BuildOptions,
	descriptor::ProjectIdentity,
	platform::{DialogBackend, Platform, RendererType},
};

pub const KFILE_TOML: &str = "kfile.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
	pub project: Option<ProjectManifest>,
	pub build: Option<BuildManifest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectManifest {
	pub name: Option<String>,
	pub icon: Option<String>,
	pub debug_dir: Option<String>,
	pub dependencies: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildManifest {
	pub platform: Option<String>,
	pub renderer: Option<String>,
	pub dialog: Option<String>,
}

/// Values given on the command line. They win over the manifest.
#[derive(Debug, Default)]
pub struct Overrides {
	pub platform: Option<String>,
	pub renderer: Option<String>,
	pub dialog: Option<String>,
}

pub fn parse_manifest(manifest_toml: &str) -> Result<Manifest, anyhow::Error> {
	Ok(toml::from_str::<Manifest>(manifest_toml)?)
}

pub fn read_manifest(manifest_path: &Path) -> Result<Manifest, anyhow::Error> {
	let manifest_toml = match fs::read_to_string(manifest_path) {
		Ok(x) => x,
		Err(e) => return Err(anyhow::anyhow!("Error opening {}: {}", manifest_path.display(), e)),
	};

	match parse_manifest(&manifest_toml) {
		Ok(x) => Ok(x),
		Err(e) => Err(anyhow::anyhow!("Error reading {}: {}", manifest_path.display(), e)),
	}
}

impl Manifest {
	pub fn identity(&self) -> ProjectIdentity {
		let mut identity = ProjectIdentity::default();
		if let Some(project) = &self.project {
			if let Some(name) = &project.name {
				identity.name = name.clone();
			}
			if let Some(icon) = &project.icon {
				identity.icon = Some(icon.clone());
			}
			if let Some(debug_dir) = &project.debug_dir {
				identity.debug_dir = Some(debug_dir.clone());
			}
			if let Some(dependencies) = &project.dependencies {
				identity.dependencies = dependencies.clone();
			}
		}
		identity
	}

	pub fn build_options(&self, overrides: &Overrides) -> Result<BuildOptions, anyhow::Error> {
		let build = self.build.as_ref();
		let pick = |cli: &Option<String>, manifest: Option<&Option<String>>| -> Option<String> {
			cli.clone().or_else(|| manifest.cloned().flatten())
		};

		let platform = match pick(&overrides.platform, build.map(|x| &x.platform)) {
			Some(x) => Some(x.parse::<Platform>()?),
			None => None,
		};
		let renderer = match pick(&overrides.renderer, build.map(|x| &x.renderer)) {
			Some(x) => x.parse::<RendererType>()?,
			None => RendererType::default(),
		};
		let dialog = match pick(&overrides.dialog, build.map(|x| &x.dialog)) {
			Some(x) => Some(x.parse::<DialogBackend>()?),
			None => None,
		};

		Ok(BuildOptions { identity: self.identity(), platform, renderer, dialog })
	}
}
