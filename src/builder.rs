use crate::{
	descriptor::{ProjectDescriptor, ProjectIdentity},
	error::ConfigError,
	fragment::Fragment,
	platform::{DialogBackend, Platform, RendererType},
};

pub const NFD_WIN: &str = "Libraries/nfd/nfd_win.cpp";
pub const NFD_GTK: &str = "Libraries/nfd/nfd_gtk.c";
pub const NFD_ZENITY: &str = "Libraries/nfd/nfd_zenity.c";
pub const NFD_COCOA: &str = "Libraries/nfd/nfd_cocoa.m";
pub const NFD_BACKENDS: [&str; 4] = [NFD_WIN, NFD_GTK, NFD_ZENITY, NFD_COCOA];

pub const DIRMONITOR_WIN32: &str = "src/api/dirmonitor/win32.c";
pub const DIRMONITOR_INOTIFY: &str = "src/api/dirmonitor/inotify.c";
pub const DIRMONITOR_FSEVENTS: &str = "src/api/dirmonitor/fsevents.c";
pub const DIRMONITOR_KQUEUE: &str = "src/api/dirmonitor/kqueue.c";
pub const DIRMONITOR_BACKENDS: [&str; 4] = [DIRMONITOR_WIN32, DIRMONITOR_INOTIFY, DIRMONITOR_FSEVENTS, DIRMONITOR_KQUEUE];

pub const CPU_RENDERER_FILES: [&str; 4] = [
	"src/cpu/renderer.c",
	"src/cpu/renderer.h",
	"src/cpu/rencache.c",
	"src/cpu/rencache.h",
];
pub const GPU_RENDERER_FILES: [&str; 2] = ["src/gpu/renderer.c", "src/gpu/renderer.h"];

pub const GTK_INCLUDE_DIRS: [&str; 10] = [
	"/usr/include/gtk-3.0",
	"/usr/include/glib-2.0",
	"/usr/lib/x86_64-linux-gnu/glib-2.0/include",
	"/usr/include/pango-1.0",
	"/usr/include/cairo",
	"/usr/include/gdk-pixbuf-2.0",
	"/usr/include/atk-1.0",
	"/usr/lib64/glib-2.0/include",
	"/usr/lib/glib-2.0/include",
	"/usr/include/harfbuzz",
];
pub const GTK_LIBRARIES: [&str; 3] = ["gtk-3", "gobject-2.0", "glib-2.0"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
	pub identity: ProjectIdentity,
	pub platform: Option<Platform>,
	pub renderer: RendererType,
	/// `None` means no explicit choice was made.
	pub dialog: Option<DialogBackend>,
}

impl BuildOptions {
	pub fn new(platform: Platform, renderer: RendererType) -> Self {
		BuildOptions { platform: Some(platform), renderer, ..Default::default() }
	}

	pub fn with_dialog(mut self, dialog: DialogBackend) -> Self {
		self.dialog = Some(dialog);
		self
	}

	pub fn dialog_backend(&self) -> DialogBackend {
		self.dialog.unwrap_or_default()
	}

	/// The target platform, falling back to the host when none was given.
	pub fn target_platform(&self) -> Result<Platform, ConfigError> {
		match self.platform {
			Some(x) => Ok(x),
			None => Platform::host(),
		}
	}
}

pub fn base_fragment() -> Fragment {
	Fragment::new().include_dirs(&["src"]).sources(&["src/**", "Shaders/**"])
}

pub fn renderer_fragment(renderer: RendererType) -> Fragment {
	match renderer {
		RendererType::Gpu => Fragment::new().include_dirs(&["src/gpu"]).excludes(&CPU_RENDERER_FILES),
		RendererType::Cpu => Fragment::new().include_dirs(&["src/cpu"]).excludes(&GPU_RENDERER_FILES),
	}
}

pub fn dialog_common_fragment() -> Fragment {
	Fragment::new()
		.include_dirs(&["Libraries/nfd/include"])
		.sources(&["Libraries/nfd/nfd_common.c"])
}

fn dirmonitor_excludes(keep: &str) -> Fragment {
	let excluded = DIRMONITOR_BACKENDS.iter().copied().filter(|x| *x != keep).collect::<Vec<_>>();
	Fragment::new().excludes(&excluded)
}

pub fn linux_dialog_fragment(dialog: DialogBackend) -> Fragment {
	match dialog {
		DialogBackend::Gtk => Fragment::new()
			.sources(&[NFD_GTK])
			.include_dirs(&GTK_INCLUDE_DIRS)
			.libraries(&GTK_LIBRARIES),
		DialogBackend::Zenity => Fragment::new().sources(&[NFD_ZENITY]),
	}
}

/// An explicitly requested dialog backend that `platform` will not use.
pub fn ignored_dialog(platform: Platform, dialog: Option<DialogBackend>) -> Option<DialogBackend> {
	match platform {
		Platform::Linux => None,
		Platform::FreeBsd => dialog.filter(|x| *x != DialogBackend::Zenity),
		_ => dialog,
	}
}

pub fn platform_fragment(platform: Platform, dialog: Option<DialogBackend>) -> Result<Fragment, ConfigError> {
	if let Some(ignored) = ignored_dialog(platform, dialog) {
		log::warn!("File dialog \"{}\" is not available on {}, ignored", ignored, platform);
	}
	let fragment = match platform {
		Platform::Windows => dirmonitor_excludes(DIRMONITOR_WIN32).sources(&[NFD_WIN]),
		Platform::Linux => {
			dirmonitor_excludes(DIRMONITOR_INOTIFY).merge(linux_dialog_fragment(dialog.unwrap_or_default()))
		}
		Platform::MacOs | Platform::Ios => dirmonitor_excludes(DIRMONITOR_FSEVENTS).sources(&[NFD_COCOA]),
		Platform::FreeBsd => dirmonitor_excludes(DIRMONITOR_KQUEUE).sources(&[NFD_ZENITY]),
		Platform::Android | Platform::Wasm => return Err(ConfigError::UnsupportedPlatform(platform)),
	};
	Ok(fragment)
}

pub fn build_with(options: &BuildOptions) -> Result<ProjectDescriptor, ConfigError> {
	let platform = options.target_platform()?;
	log::info!("platform: {}", platform);
	log::info!("renderer: {}", options.renderer);
	if platform == Platform::Linux {
		log::info!("file dialog: {}", options.dialog_backend());
	}

	let fragments = [
		base_fragment(),
		renderer_fragment(options.renderer),
		dialog_common_fragment(),
		platform_fragment(platform, options.dialog)?,
	];
	let descriptor = fragments
		.into_iter()
		.fold(ProjectDescriptor::from_identity(&options.identity), |acc, fragment| {
			log::debug!(
				"apply fragment: {} include dirs, {} sources, {} excludes, {} libraries",
				fragment.include_dirs.len(),
				fragment.sources.len(),
				fragment.excludes.len(),
				fragment.libraries.len()
			);
			acc.apply(fragment)
		});

	Ok(descriptor.flatten())
}

pub fn build(platform: Platform, renderer: RendererType) -> Result<ProjectDescriptor, ConfigError> {
	build_with(&BuildOptions::new(platform, renderer))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn supported() -> Vec<Platform> {
		Platform::ALL
			.into_iter()
			.filter(|x| !matches!(x, Platform::Android | Platform::Wasm))
			.collect()
	}

	fn expected_backend(platform: Platform) -> &'static str {
		match platform {
			Platform::Windows => NFD_WIN,
			Platform::Linux => NFD_GTK,
			Platform::MacOs | Platform::Ios => NFD_COCOA,
			Platform::FreeBsd => NFD_ZENITY,
			Platform::Android | Platform::Wasm => unreachable!(),
		}
	}

	#[test]
	fn exactly_one_dialog_backend() {
		for platform in supported() {
			for renderer in [RendererType::Gpu, RendererType::Cpu] {
				let desc = build(platform, renderer).unwrap();
				let backends = desc
					.sources
					.iter()
					.filter(|x| NFD_BACKENDS.contains(&x.as_str()))
					.collect::<Vec<_>>();
				assert_eq!(backends, vec![expected_backend(platform)], "{}", platform);
			}
		}
	}

	#[test]
	fn exactly_three_dirmonitor_excludes() {
		for platform in supported() {
			let desc = build(platform, RendererType::Gpu).unwrap();
			let excluded = DIRMONITOR_BACKENDS.iter().filter(|x| desc.is_excluded(x)).count();
			assert_eq!(excluded, 3, "{}", platform);
		}
	}

	#[test]
	fn renderer_exclusions_are_disjoint() {
		let gpu = renderer_fragment(RendererType::Gpu);
		let cpu = renderer_fragment(RendererType::Cpu);
		assert_eq!(gpu.excludes.len(), CPU_RENDERER_FILES.len());
		assert_eq!(cpu.excludes.len(), GPU_RENDERER_FILES.len());
		assert!(gpu.excludes.is_disjoint(&cpu.excludes));
		assert!(gpu.excludes.iter().all(|x| x.starts_with("src/cpu/")));
		assert!(cpu.excludes.iter().all(|x| x.starts_with("src/gpu/")));
		assert_eq!(gpu.include_dirs, vec!["src/gpu"]);
		assert_eq!(cpu.include_dirs, vec!["src/cpu"]);
	}

	#[test]
	fn linux_gtk_and_zenity() {
		let gtk = build_with(&BuildOptions::new(Platform::Linux, RendererType::Gpu)).unwrap();
		assert!(GTK_INCLUDE_DIRS.iter().all(|x| gtk.include_dirs.iter().any(|y| y == x)));
		assert_eq!(gtk.libraries, GTK_LIBRARIES.to_vec());
		assert!(!gtk.sources.iter().any(|x| x == NFD_ZENITY));

		let zenity = build_with(
			&BuildOptions::new(Platform::Linux, RendererType::Gpu).with_dialog(DialogBackend::Zenity),
		)
		.unwrap();
		assert!(zenity.sources.iter().any(|x| x == NFD_ZENITY));
		assert!(!zenity.sources.iter().any(|x| x == NFD_GTK));
		assert!(!GTK_INCLUDE_DIRS.iter().any(|x| zenity.include_dirs.iter().any(|y| y == x)));
		assert!(zenity.libraries.is_empty());
	}

	#[test]
	fn unsupported_platforms_fail() {
		assert_eq!(
			build(Platform::Android, RendererType::Gpu),
			Err(ConfigError::UnsupportedPlatform(Platform::Android))
		);
		assert_eq!(build(Platform::Wasm, RendererType::Cpu), Err(ConfigError::UnsupportedPlatform(Platform::Wasm)));
	}

	#[test]
	fn dialog_option_ignored_off_linux() {
		let win = build_with(&BuildOptions::new(Platform::Windows, RendererType::Gpu).with_dialog(DialogBackend::Zenity))
			.unwrap();
		assert_eq!(win, build(Platform::Windows, RendererType::Gpu).unwrap());
	}

	#[test]
	fn explicit_dialog_reported_when_ignored() {
		assert_eq!(ignored_dialog(Platform::Windows, Some(DialogBackend::Gtk)), Some(DialogBackend::Gtk));
		assert_eq!(ignored_dialog(Platform::MacOs, Some(DialogBackend::Zenity)), Some(DialogBackend::Zenity));
		assert_eq!(ignored_dialog(Platform::FreeBsd, Some(DialogBackend::Gtk)), Some(DialogBackend::Gtk));
		assert_eq!(ignored_dialog(Platform::FreeBsd, Some(DialogBackend::Zenity)), None);
		assert_eq!(ignored_dialog(Platform::Linux, Some(DialogBackend::Gtk)), None);
		assert_eq!(ignored_dialog(Platform::Windows, None), None);
		assert_eq!(BuildOptions::new(Platform::Linux, RendererType::Gpu).dialog_backend(), DialogBackend::Gtk);
	}

	#[test]
	fn fragment_order() {
		let desc = build(Platform::MacOs, RendererType::Gpu).unwrap();
		assert_eq!(desc.include_dirs, vec!["src", "src/gpu", "Libraries/nfd/include"]);
		assert_eq!(desc.sources, vec!["src/**", "Shaders/**", "Libraries/nfd/nfd_common.c", NFD_COCOA]);
		assert_eq!(desc.icon.as_deref(), Some("icon.png"));
		assert!(desc.flattened);
	}
}
