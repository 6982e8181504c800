use std::{fs, path::Path, path::PathBuf, time::Duration};

use shared::domain::DisplayMode;
use toml::{Table, Value};
use view_core::save::DEFAULT_SAVE_DELAY;

pub const CONFIG_FILE: &str = "webpart.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub properties_path: PathBuf,
    pub save_delay_ms: u64,
    pub display_mode: DisplayMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from("webpart.json"),
            save_delay_ms: DEFAULT_SAVE_DELAY.as_millis() as u64,
            display_mode: DisplayMode::Read,
        }
    }
}

impl Settings {
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the flat config file, then `APP__*` environment
/// variables. Values may be written as strings or as bare TOML scalars;
/// unparseable ones are ignored.
pub fn load_settings_from(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        match raw.parse::<Table>() {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("properties_path").and_then(scalar) {
                    settings.properties_path = PathBuf::from(v);
                }
                if let Some(parsed) = file_cfg
                    .get("save_delay_ms")
                    .and_then(scalar)
                    .and_then(|v| v.parse::<u64>().ok())
                {
                    settings.save_delay_ms = parsed;
                }
                if let Some(mode) = file_cfg
                    .get("display_mode")
                    .and_then(scalar)
                    .and_then(|v| parse_display_mode(&v))
                {
                    settings.display_mode = mode;
                }
            }
            Err(err) => {
                tracing::warn!(path = %config_path.display(), error = %err, "ignoring malformed config file");
            }
        }
    }

    if let Some(v) = env("APP__PROPERTIES_PATH") {
        settings.properties_path = PathBuf::from(v);
    }
    if let Some(v) = env("APP__SAVE_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.save_delay_ms = parsed;
        }
    }
    if let Some(mode) = env("APP__DISPLAY_MODE").and_then(|v| parse_display_mode(&v)) {
        settings.display_mode = mode;
    }

    settings
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(v) => Some(v.clone()),
        Value::Integer(v) => Some(v.to_string()),
        _ => None,
    }
}

pub fn parse_display_mode(raw: &str) -> Option<DisplayMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "read" | "1" => Some(DisplayMode::Read),
        "edit" | "2" => Some(DisplayMode::Edit),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
