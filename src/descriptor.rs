use core::fmt;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::fragment::Fragment;

pub const DEFAULT_NAME: &str = "lit";
pub const DEFAULT_ICON: &str = "./icon.png";
pub const DEFAULT_DEBUG_DIR: &str = "Deployment";
pub const DEFAULT_DEPENDENCY: &str = "Kinc";

/// The fixed header of a project: everything that does not depend on platform or renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
	pub name: String,
	pub icon: Option<String>,
	pub debug_dir: Option<String>,
	pub dependencies: Vec<String>,
}

impl Default for ProjectIdentity {
	fn default() -> Self {
		ProjectIdentity {
			name: DEFAULT_NAME.to_owned(),
			icon: Some(DEFAULT_ICON.to_owned()),
			debug_dir: Some(DEFAULT_DEBUG_DIR.to_owned()),
			dependencies: vec![DEFAULT_DEPENDENCY.to_owned()],
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	pub include_dirs: Vec<String>,
	pub sources: Vec<String>,
	pub excludes: BTreeSet<String>,
	pub libraries: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub debug_dir: Option<String>,
	pub dependencies: BTreeSet<String>,
	pub flattened: bool,
}

impl ProjectDescriptor {
	pub fn new(name: String) -> Self {
		ProjectDescriptor { name, ..Default::default() }
	}

	pub fn from_identity(identity: &ProjectIdentity) -> Self {
		ProjectDescriptor {
			name: identity.name.clone(),
			icon: identity.icon.clone(),
			debug_dir: identity.debug_dir.clone(),
			dependencies: identity.dependencies.iter().cloned().collect(),
			..Default::default()
		}
	}

	pub fn apply(mut self, fragment: Fragment) -> Self {
		self.include_dirs.extend(fragment.include_dirs);
		self.sources.extend(fragment.sources);
		self.excludes.extend(fragment.excludes);
		self.libraries.extend(fragment.libraries);
		self
	}

	/// Normalizes every path in the descriptor for packaging. Running it twice changes nothing.
	pub fn flatten(self) -> Self {
		ProjectDescriptor {
			name: self.name,
			icon: self.icon.as_deref().map(normalize_path),
			include_dirs: self.include_dirs.iter().map(|x| normalize_path(x)).collect(),
			sources: self.sources.iter().map(|x| normalize_path(x)).collect(),
			excludes: self.excludes.iter().map(|x| normalize_path(x)).collect(),
			libraries: self.libraries,
			debug_dir: self.debug_dir.as_deref().map(normalize_path),
			dependencies: self.dependencies,
			flattened: true,
		}
	}

	pub fn is_excluded(&self, pattern: &str) -> bool {
		self.excludes.contains(pattern)
	}

	pub fn to_toml(&self) -> Result<String, anyhow::Error> {
		Ok(toml::to_string_pretty(self)?)
	}

	pub fn to_json(&self) -> Result<String, anyhow::Error> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

pub(crate) fn normalize_path(path: &str) -> String {
	let mut ret = path.replace('\\', "/");
	while ret.contains("//") {
		ret = ret.replace("//", "/");
	}
	while let Some(rest) = ret.strip_prefix("./") {
		ret = rest.to_owned();
	}
	if ret.len() > 1 && ret.ends_with('/') {
		ret.pop();
	}
	ret
}

fn format_strings<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
	let items = items.into_iter().collect::<Vec<_>>();
	let mut ret = items
		.iter()
		.map(|x| format!("\"{}\"", x))
		.collect::<Vec<_>>()
		.join(",\n      ");
	if items.len() > 1 {
		ret = String::from("\n      ") + &ret + ",\n   ";
	}
	ret
}

impl fmt::Display for ProjectDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			r#"Project{{
   name: "{}",
   icon: {},
   include_dirs: [{}],
   sources: [{}],
   excludes: [{}],
   libraries: [{}],
   debug_dir: {},
   dependencies: [{}],
   flattened: {},
}}"#,
			self.name,
			self.icon.as_deref().map_or("None".to_owned(), |x| format!("\"{}\"", x)),
			format_strings(&self.include_dirs),
			format_strings(&self.sources),
			format_strings(&self.excludes),
			format_strings(&self.libraries),
			self.debug_dir.as_deref().map_or("None".to_owned(), |x| format!("\"{}\"", x)),
			format_strings(&self.dependencies),
			self.flattened,
		)
	}
}
