use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current on-disk encoding version. Bump when a field changes meaning.
pub const SETTINGS_VERSION: u32 = 1;

/// File name of the auto-loaded record, next to the executable.
pub const DEFAULT_FILE_NAME: &str = "ToDoTickerData.json";

/// Error kinds surfaced by the settings store.
///
/// The UI reduces these to a one-line status message; callers that care can
/// match on the kind (a missing default file is normal at first start).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported settings version {0}")]
    UnsupportedVersion(u32),
    #[error(transparent)]
    Io(std::io::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }
}

/// Everything the user can configure, plus the to-do entries themselves.
/// The unit of persistence; exactly one live instance per editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSettings {
    pub version: u32,
    pub timer_interval_ms: u32,
    pub left_margin: i32,
    pub right_margin: i32,
    pub bottom_margin: i32,
    /// Font descriptor, round-tripped through the `FontSpec` string codec.
    pub text_font: String,
    pub separator: String,
    pub always_on_top: bool,
    pub full_width: bool,
    /// RGBA, unmultiplied.
    pub foreground: [u8; 4],
    pub background: [u8; 4],
    pub list_items: Vec<String>,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            timer_interval_ms: 10,
            left_margin: 50,
            right_margin: 50,
            bottom_margin: 0,
            text_font: crate::config::font::FontSpec::default().to_string(),
            separator: "  |  ".to_string(),
            always_on_top: false,
            full_width: false,
            foreground: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
            list_items: Vec::new(),
        }
    }
}

impl TickerSettings {
    /// Default record path, next to the executable.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."))
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_FILE_NAME)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let settings: TickerSettings = serde_json::from_str(&content)?;
        if settings.version > SETTINGS_VERSION {
            return Err(StoreError::UnsupportedVersion(settings.version));
        }
        tracing::info!(
            "Loaded settings ({} list items) from {:?}",
            settings.list_items.len(),
            path
        );
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(
            "Saved settings ({} list items) to {:?}",
            self.list_items.len(),
            path
        );
        Ok(())
    }

    /// Remove the record at `path`. A file that is already gone is fine.
    pub fn delete(path: &Path) -> Result<(), StoreError> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::info!("Deleted settings file {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = TickerSettings::default();
        assert_eq!(s.version, SETTINGS_VERSION);
        assert_eq!(s.timer_interval_ms, 10);
        assert_eq!(s.left_margin, 50);
        assert_eq!(s.right_margin, 50);
        assert_eq!(s.bottom_margin, 0);
        assert_eq!(s.separator, "  |  ");
        assert!(s.list_items.is_empty());
    }

    #[test]
    fn test_json_round_trip_preserves_duplicates() {
        let mut s = TickerSettings::default();
        s.list_items = vec![
            "Buy milk".to_string(),
            "Buy milk".to_string(),
            "Call Alice".to_string(),
        ];
        s.foreground = [10, 20, 30, 255];
        s.always_on_top = true;

        let json = serde_json::to_string(&s).unwrap();
        let back: TickerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_future_version_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.json");
        let mut s = TickerSettings::default();
        s.version = SETTINGS_VERSION + 1;
        std::fs::write(&path, serde_json::to_string(&s).unwrap()).unwrap();

        match TickerSettings::load(&path) {
            Err(StoreError::UnsupportedVersion(v)) => assert_eq!(v, SETTINGS_VERSION + 1),
            Err(other) => panic!("expected UnsupportedVersion, got {other:?}"),
            Ok(_) => panic!("expected UnsupportedVersion, got Ok"),
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match TickerSettings::load(&dir.path().join("nope.json")) {
            Err(StoreError::NotFound) => {}
            Err(other) => panic!("expected NotFound, got {other:?}"),
            Ok(_) => panic!("expected NotFound, got Ok"),
        }
    }
}
