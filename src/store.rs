use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

/// File-backed settings store holding the last logged-in user identifier.
///
/// The path is injected rather than read ambiently, so tests can point the
/// store at a temp directory. This caches a display name for the settings
/// surface; it is not an authentication mechanism.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$CONFIG_DIR/originai/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("originai")
            .join("settings.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored user identifier, or `None` when nobody has logged in or
    /// the file is missing or unreadable.
    pub fn username(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<Settings>(&raw).ok()?.username
    }

    /// Display name for the settings surface: `"Guest"` when no login is
    /// cached.
    pub fn username_or_guest(&self) -> String {
        self.username().unwrap_or_else(|| "Guest".to_string())
    }

    pub fn set_username(&self, username: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = Settings {
            username: Some(username.to_string()),
        };
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
