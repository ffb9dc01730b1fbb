// Copyright 2025-present DevLearning Hub
// SPDX-License-Identifier: Apache-2.0

//! Persisted user preferences: color theme and interface language.
//!
//! Preferences live in one small JSON file under the platform config
//! directory. Loading and saving are explicit boundary calls made by the
//! application shell; nothing in the core reads or writes them behind the
//! caller's back. A missing file means defaults, a corrupt file is an error
//! the shell decides how to surface.
//!
//! Environment variables `SYLLABUS_THEME` and `SYLLABUS_LANG` override the
//! file for one run without touching it. Unrecognized values are ignored
//! rather than fatal; an override is a hint, not a command.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// Explicit theme override env var ("dark" or "light").
pub const THEME_ENV: &str = "SYLLABUS_THEME";
/// Language override env var ("en", "es", "de").
pub const LANG_ENV: &str = "SYLLABUS_LANG";

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

/// Error for an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError(pub String);

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}' (expected dark or light)", self.0)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "d" => Ok(Theme::Dark),
            "light" | "l" => Ok(Theme::Light),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// User preferences, as stored on disk.
///
/// `theme: None` means "no preference recorded": the terminal front end
/// falls back to environment detection in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub lang: Lang,
}

impl Settings {
    /// The settings file location under the platform config directory.
    ///
    /// `None` when the platform has no config directory at all, in which
    /// case preferences simply do not persist.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("syllabus").join("settings.json"))
    }

    /// Load settings from `path`. A missing file yields defaults; anything
    /// else that goes wrong is an error.
    pub fn load(path: &Path) -> io::Result<Settings> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }

    /// Apply `SYLLABUS_THEME` and `SYLLABUS_LANG` from the environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(THEME_ENV).ok().as_deref(),
            std::env::var(LANG_ENV).ok().as_deref(),
        );
    }

    fn apply_overrides(&mut self, theme: Option<&str>, lang: Option<&str>) {
        if let Some(value) = theme {
            if let Ok(theme) = value.parse() {
                self.theme = Some(theme);
            }
        }
        if let Some(value) = lang {
            if let Ok(lang) = value.parse() {
                self.lang = lang;
            }
        }
    }
}
