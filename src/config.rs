//! Settings for the virtual file system and how they are layered.

pub mod load;
pub mod settings;
pub mod user;

pub use load::{
    SettingsEvent, SettingsEventKind, SettingsLoadOutcome, SettingsSource, load_settings,
};
pub use settings::{OsSetting, VfsSettings};
pub use user::{UserConfigError, UserConfigResult, load_user_config, user_config_path};

/// Merge every layer in order; later layers win field by field.
pub fn merge_all(configs: &[Option<VfsSettings>]) -> Option<VfsSettings> {
    configs.iter().cloned().reduce(merge_settings).flatten()
}

/// Merge two VfsSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<VfsSettings>,
    primary: Option<VfsSettings>,
) -> Option<VfsSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(VfsSettings {
            target_os: primary.target_os.or(fallback.target_os),
            snapshot_dir: primary.snapshot_dir.or(fallback.snapshot_dir),
            invalidate_snapshot_on_change: primary
                .invalidate_snapshot_on_change
                .or(fallback.invalidate_snapshot_on_change),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn primary_fields_override_fallback() {
        let fallback = VfsSettings {
            target_os: Some(OsSetting::Unix),
            snapshot_dir: Some(PathBuf::from("/tmp/a")),
            invalidate_snapshot_on_change: Some(true),
        };
        let primary = VfsSettings {
            target_os: Some(OsSetting::Windows),
            snapshot_dir: None,
            invalidate_snapshot_on_change: Some(false),
        };

        let merged = merge_settings(Some(fallback), Some(primary)).unwrap();
        assert_eq!(merged.target_os, Some(OsSetting::Windows));
        assert_eq!(merged.snapshot_dir, Some(PathBuf::from("/tmp/a")));
        assert_eq!(merged.invalidate_snapshot_on_change, Some(false));
    }

    #[test]
    fn merge_all_skips_missing_layers() {
        let project = VfsSettings {
            snapshot_dir: Some(PathBuf::from("/project/snapshots")),
            ..Default::default()
        };
        let merged = merge_all(&[Some(VfsSettings::default()), None, Some(project), None]).unwrap();
        assert_eq!(merged.snapshot_dir, Some(PathBuf::from("/project/snapshots")));
        assert_eq!(merged.target_os, Some(OsSetting::Host));
    }

    #[test]
    fn merge_all_of_nothing_is_none() {
        assert_eq!(merge_all(&[None, None]), None);
    }
}
