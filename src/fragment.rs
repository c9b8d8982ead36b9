use std::collections::BTreeSet;

/// One branch's contribution to a project descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
	pub include_dirs: Vec<String>,
	pub sources: Vec<String>,
	pub excludes: BTreeSet<String>,
	pub libraries: Vec<String>,
}

fn to_vec_strs(paths: &[&str]) -> Vec<String> {
	paths.iter().copied().map(String::from).collect()
}

impl Fragment {
	pub fn new() -> Self {
		Fragment::default()
	}

	pub fn include_dirs(mut self, dirs: &[&str]) -> Self {
		self.include_dirs.extend(to_vec_strs(dirs));
		self
	}

	pub fn sources(mut self, patterns: &[&str]) -> Self {
		self.sources.extend(to_vec_strs(patterns));
		self
	}

	pub fn excludes(mut self, patterns: &[&str]) -> Self {
		self.excludes.extend(to_vec_strs(patterns));
		self
	}

	pub fn libraries(mut self, libs: &[&str]) -> Self {
		self.libraries.extend(to_vec_strs(libs));
		self
	}

	/// Appends `other` after `self`. Ordered lists keep both orders, excludes are united.
	pub fn merge(mut self, other: Fragment) -> Self {
		self.include_dirs.extend(other.include_dirs);
		self.sources.extend(other.sources);
		self.excludes.extend(other.excludes);
		self.libraries.extend(other.libraries);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.include_dirs.is_empty() && self.sources.is_empty() && self.excludes.is_empty() && self.libraries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_keeps_order_and_duplicates() {
		let a = Fragment::new().include_dirs(&["src", "src/gpu"]).libraries(&["gtk-3"]);
		let b = Fragment::new().include_dirs(&["src"]).libraries(&["glib-2.0"]);
		let merged = a.merge(b);
		assert_eq!(merged.include_dirs, vec!["src", "src/gpu", "src"]);
		assert_eq!(merged.libraries, vec!["gtk-3", "glib-2.0"]);
	}

	#[test]
	fn merge_unites_excludes() {
		let a = Fragment::new().excludes(&["a.c", "b.c"]);
		let b = Fragment::new().excludes(&["b.c", "c.c"]);
		let merged = a.merge(b);
		assert_eq!(merged.excludes.len(), 3);
		assert!(!merged.is_empty());
		assert!(Fragment::new().is_empty());
	}
}
