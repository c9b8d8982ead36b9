use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::{descriptor::ProjectDescriptor, glob};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePath {
	pub full: PathBuf,
	pub name: String,
}

pub(crate) fn is_c_source(src_filename: &str) -> bool {
	src_filename.ends_with(".c") || src_filename.ends_with(".C")
}

pub(crate) fn is_cpp_source(src_filename: &str) -> bool {
	src_filename.ends_with(".cpp") || src_filename.ends_with(".cc") || src_filename.ends_with(".cxx")
}

pub(crate) fn is_objc_source(src_filename: &str) -> bool {
	src_filename.ends_with(".m") || src_filename.ends_with(".mm")
}

pub(crate) fn is_header(src_filename: &str) -> bool {
	src_filename.ends_with(".h") || src_filename.ends_with(".hpp")
}

pub(crate) fn is_shader(src_filename: &str) -> bool {
	const SHADER_EXTS: [&str; 5] = [".glsl", ".vert", ".frag", ".hlsl", ".metal"];
	src_filename.starts_with("Shaders/") || SHADER_EXTS.iter().any(|ext| src_filename.ends_with(ext))
}

#[derive(Debug, Default, Serialize)]
pub struct ResolvedSources {
	pub c: Vec<SourcePath>,
	pub cpp: Vec<SourcePath>,
	pub objc: Vec<SourcePath>,
	pub headers: Vec<SourcePath>,
	pub shaders: Vec<SourcePath>,
	pub other: Vec<SourcePath>,
}

impl ResolvedSources {
	pub fn iter(&self) -> impl Iterator<Item = &SourcePath> {
		self.c
			.iter()
			.chain(self.cpp.iter())
			.chain(self.objc.iter())
			.chain(self.headers.iter())
			.chain(self.shaders.iter())
			.chain(self.other.iter())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.iter().any(|x| x.name == name)
	}

	pub fn len(&self) -> usize {
		self.iter().count()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn push(&mut self, src: SourcePath) {
		if is_shader(&src.name) {
			self.shaders.push(src);
		} else if is_c_source(&src.name) {
			self.c.push(src);
		} else if is_cpp_source(&src.name) {
			self.cpp.push(src);
		} else if is_objc_source(&src.name) {
			self.objc.push(src);
		} else if is_header(&src.name) {
			self.headers.push(src);
		} else {
			self.other.push(src);
		}
	}
}

fn relative_name(root: &Path, path: &Path) -> Option<String> {
	let rel = path.strip_prefix(root).ok()?;
	let parts = rel.components().map(|x| x.as_os_str().to_str()).collect::<Option<Vec<_>>>()?;
	Some(parts.join("/"))
}

/// Applies the descriptor's source and exclude patterns to the files under `root`.
pub fn resolve(descriptor: &ProjectDescriptor, root: &Path) -> Result<ResolvedSources, anyhow::Error> {
	if !root.is_dir() {
		return Err(anyhow::anyhow!("Source directory does not exist: \"{}\"", root.display()));
	}

	let mut resolved = ResolvedSources::default();
	let mut matched_literals = vec![false; descriptor.sources.len()];

	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = match entry {
			Ok(x) => x,
			Err(e) => return Err(anyhow::anyhow!("Error walking \"{}\": {}", root.display(), e)),
		};
		if !entry.file_type().is_file() {
			continue;
		}
		let name = match relative_name(root, entry.path()) {
			Some(x) => x,
			None => {
				log::warn!("Skipping non UTF-8 path \"{}\"", entry.path().display());
				continue;
			}
		};

		let mut included = false;
		for (i, pattern) in descriptor.sources.iter().enumerate() {
			if glob::matches(pattern, &name) {
				included = true;
				matched_literals[i] = true;
			}
		}
		if !included {
			continue;
		}
		if descriptor.excludes.iter().any(|x| glob::matches(x, &name)) {
			log::debug!("excluded: {}", name);
			continue;
		}
		resolved.push(SourcePath { full: entry.path().to_path_buf(), name });
	}

	for (pattern, matched) in descriptor.sources.iter().zip(matched_literals) {
		if !matched && glob::is_literal(pattern) {
			log::warn!("Path does not exist: \"{}\"", root.join(pattern).display());
		}
	}

	Ok(resolved)
}
