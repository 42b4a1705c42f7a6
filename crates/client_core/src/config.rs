use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::error::SubmitError;

pub const DEFAULT_CONFIG_FILE: &str = "planner.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointSettings {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5001,
            path: "/generate-plan-with-new-results".into(),
        }
    }
}

impl EndpointSettings {
    pub fn url(&self) -> Result<Url, SubmitError> {
        let path = self.path.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let raw = format!("http://{}:{}{path}", self.host.trim(), self.port);
        Url::parse(&raw)
            .map_err(|err| SubmitError::Transport(format!("invalid endpoint '{raw}': {err}")))
    }
}

/// Defaults, then `planner.toml` in the working directory, then environment.
pub fn load_settings() -> EndpointSettings {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    config_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> EndpointSettings {
    let mut settings = EndpointSettings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file_overrides(&mut settings, &file_cfg),
            Err(err) => warn!(
                path = %config_path.display(),
                error = %err,
                "ignoring unreadable planner config"
            ),
        }
    }

    for key in ["PLANNER_HOST", "APP__PLANNER_HOST"] {
        if let Some(v) = env(key) {
            settings.host = v;
        }
    }

    for key in ["PLANNER_PORT", "APP__PLANNER_PORT"] {
        if let Some(v) = env(key) {
            match v.trim().parse::<u16>() {
                Ok(port) => settings.port = port,
                Err(_) => warn!(key, value = %v, "ignoring invalid planner port"),
            }
        }
    }

    for key in ["PLANNER_PATH", "APP__PLANNER_PATH"] {
        if let Some(v) = env(key) {
            settings.path = v;
        }
    }

    settings
}

fn apply_file_overrides(settings: &mut EndpointSettings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("host").and_then(toml::Value::as_str) {
        settings.host = v.to_string();
    }
    match file_cfg.get("port") {
        Some(toml::Value::Integer(port)) => match u16::try_from(*port) {
            Ok(port) => settings.port = port,
            Err(_) => warn!(port, "ignoring out-of-range planner port"),
        },
        Some(toml::Value::String(port)) => {
            if let Ok(port) = port.trim().parse::<u16>() {
                settings.port = port;
            }
        }
        _ => {}
    }
    if let Some(v) = file_cfg.get("path").and_then(toml::Value::as_str) {
        settings.path = v.to_string();
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
