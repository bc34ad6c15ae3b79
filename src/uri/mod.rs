//! Document identifiers and their canonical forms.
//!
//! Raw [`Uri`] values are what editors send; [`NormalizedUri`] is the key
//! the store compares. File URIs are converted to and from local paths for
//! an explicit [`TargetOs`] so that both platform behaviours can be
//! exercised from a single process.

mod escape;
mod normalize;
mod parse;
mod path;

pub use normalize::{denormalize, normalize};
pub use path::{FILE_SCHEME, file_path_to_uri, uri_to_file_path};
pub(crate) use path::file_name;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier in the protocol's native URI form, e.g. `file:///src/Main.hs`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Uri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Uri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Escape-normalized form of a [`Uri`].
///
/// Two URIs that differ only in percent-encoding (or, for file URIs, in how
/// the path was spelled) map to the same value. Only [`normalize`] builds one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedUri(String);

impl NormalizedUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operating system whose path conventions drive URI ⇄ path conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Windows,
    Unix,
}

impl TargetOs {
    /// The platform this binary was compiled for.
    pub const fn host() -> Self {
        if cfg!(windows) {
            TargetOs::Windows
        } else {
            TargetOs::Unix
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, TargetOs::Windows)
    }
}
