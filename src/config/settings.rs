// src/config/settings.rs
//
// GUI settings persisted between runs as TOML: last input + options.

use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::AppOptions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_input: String,
    pub options: AppOptions,
}

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

/// Missing or unreadable file → defaults.
pub fn load(path: &Path) -> Settings {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Settings: none at {} ({})", path.display(), e);
            return Settings::default();
        }
    };
    match toml::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            loge!("Settings: ignoring corrupt {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = toml::to_string(settings).map_err(io::Error::other)?;
    fs::write(path, text)
}
