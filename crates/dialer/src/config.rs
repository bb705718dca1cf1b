use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// What the call button does with the dialed number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CallMode {
    /// Run `call.command`, falling back to the `tel:` handler.
    #[default]
    #[strum(serialize = "command", serialize = "cmd")]
    Command,
    /// Hand a `tel:` URI to the desktop.
    #[strum(serialize = "open", serialize = "uri", serialize = "tel")]
    Open,
    /// Write the number to stdout.
    #[strum(serialize = "print", serialize = "stdout")]
    Print,
}

/// Shell command line with a `{number}` placeholder.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct CallTemplate(String);

rotary::impl_string_newtype!(CallTemplate);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DialConfig {
    pub outer_padding: f64,
    pub inner_padding: f64,
    pub max_rotation_step: f64,
    pub text_size: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            outer_padding: 20.0,
            inner_padding: 15.0,
            max_rotation_step: rotary::gesture::MAX_ROTATION_STEP,
            text_size: 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub dial_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CallConfig {
    pub mode: CallMode,
    pub command: Option<CallTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub beep: bool,
    pub hints: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            beep: true,
            hints: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dial: DialConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub call: CallConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "rrpictures", "rotary-dialer")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("DIALER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(|p| p.to_path_buf()) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if is_relevant(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

fn is_relevant(event: &notify::Event, config_path: &std::path::Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_call_mode_deserialization() {
        let cases = vec![
            ("\"command\"", CallMode::Command),
            ("\"Command\"", CallMode::Command),
            ("\"CMD\"", CallMode::Command),
            ("\"open\"", CallMode::Open),
            ("\"tel\"", CallMode::Open),
            ("\"Print\"", CallMode::Print),
            ("\"stdout\"", CallMode::Print),
        ];

        for (json, expected) in cases {
            let deserialized: CallMode = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<CallMode>("\"fax\"").is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "dial": { "outer_padding": 30.0 },
            "call": { "mode": "open" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.dial.outer_padding, 30.0);
        assert_eq!(config.dial.inner_padding, 15.0);
        assert_eq!(config.dial.max_rotation_step, 100.0);
        assert_eq!(config.call.mode, CallMode::Open);
        assert_eq!(config.call.command, None);
        assert!(config.feedback.beep);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(config.dial, DialConfig::default());
        assert_eq!(config.call.mode, CallMode::Command);
        assert!(config.theme.dial_color.is_some());
    }

    #[test]
    fn test_relevant_events() {
        let path = PathBuf::from("/tmp/rotary-dialer/config.toml");
        let modify = notify::Event::new(EventKind::Modify(notify::event::ModifyKind::Any))
            .add_path(path.clone());
        let other = notify::Event::new(EventKind::Create(notify::event::CreateKind::File))
            .add_path(PathBuf::from("/tmp/rotary-dialer/other.toml"));
        let access = notify::Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(path.clone());

        assert!(is_relevant(&modify, &path));
        assert!(!is_relevant(&other, &path));
        assert!(!is_relevant(&access, &path));
    }
}
