use thiserror::Error;

use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("Unknown platform \"{0}\"")]
	UnknownPlatform(String),
	#[error("Unknown renderer type \"{0}\" (expected \"gpu\" or \"cpu\")")]
	UnknownRenderer(String),
	#[error("Unknown file dialog backend \"{0}\" (expected \"gtk\" or \"zenity\")")]
	UnknownDialog(String),
	#[error("Platform \"{0}\" has no native file dialog backend")]
	UnsupportedPlatform(Platform),
}
