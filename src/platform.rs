use core::{fmt, str::FromStr};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	Windows,
	Linux,
	MacOs,
	Ios,
	FreeBsd,
	Android,
	Wasm,
}

impl Platform {
	pub const ALL: [Platform; 7] = [
		Platform::Windows,
		Platform::Linux,
		Platform::MacOs,
		Platform::Ios,
		Platform::FreeBsd,
		Platform::Android,
		Platform::Wasm,
	];

	/// The name build scripts compare against, e.g. `"win32"` or `"macos"`.
	pub fn system_name(&self) -> &'static str {
		match self {
			Platform::Windows => "win32",
			Platform::Linux => "linux",
			Platform::MacOs => "macos",
			Platform::Ios => "ios",
			Platform::FreeBsd => "freebsd",
			Platform::Android => "android",
			Platform::Wasm => "wasm",
		}
	}

	pub fn host() -> Result<Platform, ConfigError> {
		if cfg!(target_os = "windows") {
			Ok(Platform::Windows)
		} else if cfg!(target_os = "linux") {
			Ok(Platform::Linux)
		} else if cfg!(target_os = "macos") {
			Ok(Platform::MacOs)
		} else if cfg!(target_os = "ios") {
			Ok(Platform::Ios)
		} else if cfg!(target_os = "freebsd") {
			Ok(Platform::FreeBsd)
		} else if cfg!(target_os = "android") {
			Ok(Platform::Android)
		} else if cfg!(target_family = "wasm") {
			Ok(Platform::Wasm)
		} else {
			Err(ConfigError::UnknownPlatform(std::env::consts::OS.to_owned()))
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.system_name())
	}
}

impl FromStr for Platform {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"win32" | "windows" => Ok(Platform::Windows),
			"linux" => Ok(Platform::Linux),
			"macos" | "osx" => Ok(Platform::MacOs),
			"ios" => Ok(Platform::Ios),
			"freebsd" => Ok(Platform::FreeBsd),
			"android" => Ok(Platform::Android),
			"wasm" => Ok(Platform::Wasm),
			_ => Err(ConfigError::UnknownPlatform(s.to_owned())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererType {
	#[default]
	Gpu,
	Cpu,
}

impl fmt::Display for RendererType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RendererType::Gpu => f.write_str("GPU"),
			RendererType::Cpu => f.write_str("CPU"),
		}
	}
}

impl FromStr for RendererType {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"gpu" => Ok(RendererType::Gpu),
			"cpu" => Ok(RendererType::Cpu),
			_ => Err(ConfigError::UnknownRenderer(s.to_owned())),
		}
	}
}

/// File dialog implementation used on Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogBackend {
	#[default]
	Gtk,
	Zenity,
}

impl fmt::Display for DialogBackend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DialogBackend::Gtk => f.write_str("gtk"),
			DialogBackend::Zenity => f.write_str("zenity"),
		}
	}
}

impl FromStr for DialogBackend {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"gtk" => Ok(DialogBackend::Gtk),
			"zenity" => Ok(DialogBackend::Zenity),
			_ => Err(ConfigError::UnknownDialog(s.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_platform_aliases() {
		assert_eq!("win32".parse::<Platform>(), Ok(Platform::Windows));
		assert_eq!("Windows".parse::<Platform>(), Ok(Platform::Windows));
		assert_eq!("osx".parse::<Platform>(), Ok(Platform::MacOs));
		assert_eq!("FreeBSD".parse::<Platform>(), Ok(Platform::FreeBsd));
	}

	#[test]
	fn system_names_parse_back() {
		for platform in Platform::ALL {
			assert_eq!(platform.system_name().parse::<Platform>(), Ok(platform));
		}
	}

	#[test]
	fn unknown_platform_is_rejected() {
		assert_eq!("beos".parse::<Platform>(), Err(ConfigError::UnknownPlatform("beos".to_owned())));
		assert_eq!("unknown".parse::<Platform>(), Err(ConfigError::UnknownPlatform("unknown".to_owned())));
	}

	#[test]
	fn renderer_and_dialog() {
		assert_eq!("GPU".parse::<RendererType>(), Ok(RendererType::Gpu));
		assert_eq!("cpu".parse::<RendererType>(), Ok(RendererType::Cpu));
		assert!("vulkan".parse::<RendererType>().is_err());
		assert_eq!("zenity".parse::<DialogBackend>(), Ok(DialogBackend::Zenity));
		assert_eq!("qt".parse::<DialogBackend>(), Err(ConfigError::UnknownDialog("qt".to_owned())));
		assert_eq!(RendererType::Cpu.to_string(), "CPU");
	}
}
