use crate::document::VfsOptions;
use crate::uri::TargetOs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which platform's path rules apply to file URIs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsSetting {
    /// Whatever platform vfsync was built for
    #[default]
    Host,
    Windows,
    Unix,
}

impl OsSetting {
    pub fn resolve(self) -> TargetOs {
        match self {
            OsSetting::Host => TargetOs::host(),
            OsSetting::Windows => TargetOs::Windows,
            OsSetting::Unix => TargetOs::Unix,
        }
    }
}

/// One layer of configuration as read from TOML or JSON.
///
/// Every field is optional so layers can be merged; see
/// [`crate::config::merge_settings`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VfsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_os: Option<OsSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalidate_snapshot_on_change: Option<bool>,
}

impl VfsSettings {
    /// Built-in values, the lowest configuration layer.
    pub fn defaults() -> Self {
        Self {
            target_os: Some(OsSetting::Host),
            snapshot_dir: None,
            invalidate_snapshot_on_change: Some(true),
        }
    }
}

impl From<VfsSettings> for VfsOptions {
    fn from(settings: VfsSettings) -> Self {
        let target_os = settings.target_os.unwrap_or_default().resolve();
        let mut options = VfsOptions::new(target_os);
        options.snapshot_dir = settings.snapshot_dir;
        if let Some(invalidate) = settings.invalidate_snapshot_on_change {
            options.invalidate_snapshot_on_change = invalidate;
        }
        options
    }
}
