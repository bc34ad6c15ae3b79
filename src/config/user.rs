//! User configuration loading for vfsync.
//!
//! User config location: $XDG_CONFIG_HOME/vfsync/vfsync.toml
//! Fallback: the platform config directory, e.g. ~/.config/vfsync/vfsync.toml

use super::VfsSettings;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "vfsync";
const CONFIG_FILE: &str = "vfsync.toml";

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type UserConfigResult<T> = Result<T, UserConfigError>;

/// Returns the path to the user configuration file.
///
/// `$XDG_CONFIG_HOME` wins when set; otherwise the platform config directory
/// is used. Returns None if neither can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the user configuration file.
///
/// A missing file is `Ok(None)`.
pub fn load_user_config() -> UserConfigResult<Option<VfsSettings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path).map_err(|source| UserConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let settings = toml::from_str(&contents)
        .map_err(|source| UserConfigError::Parse { path, source })?;
    Ok(Some(settings))
}
