// SPDX-License-Identifier: MPL-2.0

use crate::config::{
    APP_ID, CURSOR_OFFSET_X, CURSOR_OFFSET_Y, HOVER_TIMEOUT_MS, INFO_TIMEOUT_MS, LEGACY_ORIGIN,
    PDGA_ORIGIN,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Debounce intervals for the hover controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub show_delay: Duration,
    pub hide_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(HOVER_TIMEOUT_MS),
            hide_delay: Duration::from_millis(INFO_TIMEOUT_MS),
        }
    }
}

/// Distance between the cursor and the popup's anchor corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for CursorOffset {
    fn default() -> Self {
        Self {
            x: CURSOR_OFFSET_X,
            y: CURSOR_OFFSET_Y,
        }
    }
}

/// Persistent profiler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerSettings {
    /// Canonical origin profile references are resolved against
    pub origin: String,
    /// Prefix stripped from references before resolving
    pub legacy_origin: String,
    pub show_delay_ms: u64,
    pub hide_delay_ms: u64,
    pub cursor_offset_x: f64,
    pub cursor_offset_y: f64,
    /// None leaves the HTTP client's own behavior in place
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProfilerSettings {
    fn default() -> Self {
        Self {
            origin: PDGA_ORIGIN.to_string(),
            legacy_origin: LEGACY_ORIGIN.to_string(),
            show_delay_ms: HOVER_TIMEOUT_MS,
            hide_delay_ms: INFO_TIMEOUT_MS,
            cursor_offset_x: CURSOR_OFFSET_X,
            cursor_offset_y: CURSOR_OFFSET_Y,
            request_timeout_secs: None,
        }
    }
}

impl ProfilerSettings {
    /// Get the settings file path (~/.config/io.github.sethcottle.PdgaProfiler/settings.json)
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push(APP_ID);
            p.push("settings.json");
            p
        })
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring malformed settings: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing {
            show_delay: Duration::from_millis(self.show_delay_ms),
            hide_delay: Duration::from_millis(self.hide_delay_ms),
        }
    }

    pub fn cursor_offset(&self) -> CursorOffset {
        CursorOffset {
            x: self.cursor_offset_x,
            y: self.cursor_offset_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pdga-profiler-{}-{name}", std::process::id()));
        path.push("settings.json");
        path
    }

    #[test]
    fn test_defaults_match_constants() {
        let settings = ProfilerSettings::default();
        assert_eq!(settings.origin, "https://www.pdga.com");
        assert_eq!(settings.timing(), Timing::default());
        assert_eq!(settings.timing().show_delay, Duration::from_millis(250));
        assert_eq!(settings.timing().hide_delay, Duration::from_millis(800));
        assert_eq!(settings.cursor_offset(), CursorOffset::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("missing");
        assert_eq!(ProfilerSettings::load_from(&path), ProfilerSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let path = scratch_path("roundtrip");
        let settings = ProfilerSettings {
            show_delay_ms: 100,
            request_timeout_secs: Some(5),
            ..ProfilerSettings::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = ProfilerSettings::load_from(&path);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.timing().show_delay, Duration::from_millis(100));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = scratch_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "hide_delay_ms": 1200 }"#).unwrap();

        let loaded = ProfilerSettings::load_from(&path);
        assert_eq!(loaded.hide_delay_ms, 1200);
        assert_eq!(loaded.show_delay_ms, HOVER_TIMEOUT_MS);
        assert_eq!(loaded.origin, PDGA_ORIGIN);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(ProfilerSettings::load_from(&path), ProfilerSettings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
