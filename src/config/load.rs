use super::{VfsSettings, load_user_config, merge_all};
use serde_json::Value;
use std::fs;
use std::path::Path;

const PROJECT_CONFIG: &str = "vfsync.toml";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsEventKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub kind: SettingsEventKind,
    pub message: String,
}

impl SettingsEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Warning,
            message: message.into(),
        }
    }

    /// Forward the event to the `log` facade.
    pub fn log(&self) {
        match self.kind {
            SettingsEventKind::Info => log::info!(target: "vfsync::config", "{}", self.message),
            SettingsEventKind::Warning => {
                log::warn!(target: "vfsync::config", "{}", self.message)
            }
        }
    }
}

/// Where the highest-precedence layer came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSource {
    CommandLine,
    ConfigFile,
}

impl SettingsSource {
    fn description(self) -> &'static str {
        match self {
            SettingsSource::CommandLine => "command-line settings",
            SettingsSource::ConfigFile => "config file",
        }
    }
}

#[derive(Debug)]
pub struct SettingsLoadOutcome {
    pub settings: VfsSettings,
    pub events: Vec<SettingsEvent>,
}

/// Resolve settings from every layer.
///
/// defaults < user config < `root_path/vfsync.toml` < override. A layer
/// that fails to load is skipped and reported as a warning event.
pub fn load_settings(
    root_path: Option<&Path>,
    override_settings: Option<(SettingsSource, Value)>,
) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    let defaults = Some(VfsSettings::defaults());
    let user_config = load_user_config_with_events(&mut events);
    let project_settings = load_project_settings(root_path, &mut events);
    let override_settings = override_settings
        .and_then(|(source, value)| parse_override_settings(source, value, &mut events));

    let settings = merge_all(&[defaults, user_config, project_settings, override_settings])
        .unwrap_or_else(VfsSettings::defaults);

    SettingsLoadOutcome { settings, events }
}

fn load_user_config_with_events(events: &mut Vec<SettingsEvent>) -> Option<VfsSettings> {
    match load_user_config() {
        Ok(Some(settings)) => {
            events.push(SettingsEvent::info("Loaded user config"));
            Some(settings)
        }
        Ok(None) => None,
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to load user config: {}",
                err
            )));
            None
        }
    }
}

fn load_project_settings(
    root_path: Option<&Path>,
    events: &mut Vec<SettingsEvent>,
) -> Option<VfsSettings> {
    let config_path = root_path?.join(PROJECT_CONFIG);
    if !config_path.exists() {
        return None;
    }

    events.push(SettingsEvent::info(format!(
        "Found config file: {}",
        config_path.display()
    )));

    match fs::read_to_string(&config_path) {
        Ok(contents) => match toml::from_str::<VfsSettings>(&contents) {
            Ok(settings) => {
                events.push(SettingsEvent::info("Successfully loaded vfsync.toml"));
                Some(settings)
            }
            Err(err) => {
                events.push(SettingsEvent::warning(format!(
                    "Failed to parse vfsync.toml: {}",
                    err
                )));
                None
            }
        },
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to read vfsync.toml: {}",
                err
            )));
            None
        }
    }
}

fn parse_override_settings(
    source: SettingsSource,
    value: Value,
    events: &mut Vec<SettingsEvent>,
) -> Option<VfsSettings> {
    match serde_json::from_value::<VfsSettings>(value) {
        Ok(settings) => {
            events.push(SettingsEvent::info(format!(
                "Parsed {} as VfsSettings",
                source.description()
            )));
            Some(settings)
        }
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to parse {}: {}",
                source.description(),
                err
            )));
            None
        }
    }
}
