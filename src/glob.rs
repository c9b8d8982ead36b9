//! Minimal path globbing for descriptor patterns.
//!
//! Patterns are matched segment by segment against `/`-separated relative paths.
//! `*` and `?` stay within one segment, a segment of exactly `**` spans any number of them.

pub fn is_literal(pattern: &str) -> bool {
	!pattern.contains(['*', '?'])
}

pub fn matches(pattern: &str, path: &str) -> bool {
	let pattern = pattern.split('/').filter(|x| !x.is_empty()).collect::<Vec<_>>();
	let path = path.split('/').filter(|x| !x.is_empty()).collect::<Vec<_>>();
	match_segments(&pattern, &path)
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
	match pattern.split_first() {
		None => path.is_empty(),
		Some((&"**", rest)) => (0..=path.len()).any(|skip| match_segments(rest, &path[skip..])),
		Some((segment, rest)) => match path.split_first() {
			Some((name, path_rest)) => {
				let segment = segment.chars().collect::<Vec<_>>();
				let name = name.chars().collect::<Vec<_>>();
				match_segment(&segment, &name) && match_segments(rest, path_rest)
			}
			None => false,
		},
	}
}

fn match_segment(pattern: &[char], name: &[char]) -> bool {
	match pattern.split_first() {
		None => name.is_empty(),
		Some(('*', rest)) => (0..=name.len()).any(|skip| match_segment(rest, &name[skip..])),
		Some(('?', rest)) => !name.is_empty() && match_segment(rest, &name[1..]),
		Some((c, rest)) => name.first() == Some(c) && match_segment(rest, &name[1..]),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn double_star() {
		assert!(matches("src/**", "src/main.c"));
		assert!(matches("src/**", "src/api/dirmonitor/inotify.c"));
		assert!(!matches("src/**", "Shaders/painter.frag"));
		assert!(matches("**/*.h", "src/gpu/renderer.h"));
		assert!(matches("**/*.h", "api.h"));
		assert!(matches("src/**/renderer.c", "src/renderer.c"));
	}

	#[test]
	fn single_segment_wildcards() {
		assert!(matches("src/*.c", "src/main.c"));
		assert!(!matches("src/*.c", "src/api/system.c"));
		assert!(matches("src/?pu/renderer.c", "src/gpu/renderer.c"));
		assert!(!matches("src/?pu/renderer.c", "src/gpux/renderer.c"));
	}

	#[test]
	fn question_mark_is_one_character() {
		assert!(matches("src/?.c", "src/é.c"));
		assert!(matches("Shaders/?????.frag", "Shaders/ßhadé.frag"));
		assert!(!matches("src/??.c", "src/é.c"));
		assert!(matches("src/*é.c", "src/café.c"));
	}

	#[test]
	fn literals() {
		assert!(matches("Libraries/nfd/nfd_gtk.c", "Libraries/nfd/nfd_gtk.c"));
		assert!(!matches("Libraries/nfd/nfd_gtk.c", "Libraries/nfd/nfd_gtk.cpp"));
		assert!(is_literal("Libraries/nfd/nfd_gtk.c"));
		assert!(!is_literal("src/**"));
	}
}
