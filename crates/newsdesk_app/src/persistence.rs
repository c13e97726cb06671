//! Settings persistence at the controller boundary: the current category and
//! style survive restarts as a small RON file in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use feed_logging::{feed_info, feed_warn};
use newsdesk_core::{Category, Settings, Style};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = ".newsdesk_settings.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    category: String,
    style: String,
}

pub fn settings_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(SETTINGS_FILENAME)
}

/// Loads saved selections, falling back to defaults. Unknown names in the
/// file are silently replaced by the default, matching the selection rule.
pub fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            feed_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    let persisted: PersistedSettings = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            feed_warn!("Failed to parse settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    let settings = Settings {
        category: Category::from_name(&persisted.category).unwrap_or_default(),
        style: Style::from_name(&persisted.style).unwrap_or_default(),
    };
    feed_info!("Loaded settings from {:?}", path);
    settings
}

pub fn save_settings(path: &Path, settings: Settings) {
    let persisted = PersistedSettings {
        category: settings.category.as_str().to_string(),
        style: settings.style.as_str().to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            feed_warn!("Failed to serialize settings: {}", err);
            return;
        }
    };

    if let Err(err) = fs::write(path, content) {
        feed_warn!("Failed to write settings to {:?}: {}", path, err);
    }
}
