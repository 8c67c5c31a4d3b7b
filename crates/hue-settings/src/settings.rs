//! The settings file — `window.KEY = value;` assignments in a JS file.
//!
//! Only single-line assignments to `window.*` are visible here. Everything
//! else in the file is opaque text that is preserved on save.
//!
//! When a key is assigned more than once, reads return the last assignment
//! (the value the page ends up with) and writes rewrite every assignment.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use hue_palette::PaletteConfig;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub const HUE_OFFSET: &str = "GLOBAL_HUE_OFFSET";
pub const HUE_DEFAULT: &str = "GLOBAL_HUE_DEFAULT";
pub const BRIGHTNESS: &str = "GLOBAL_BRIGHTNESS";
pub const COLOR_SATURATION: &str = "GLOBAL_COLOR_SATURATION";
pub const COLOR_BRIGHTNESS: &str = "GLOBAL_COLOR_BRIGHTNESS";

/// File name looked up inside a settings directory.
pub const SETTINGS_FILE_NAME: &str = "settings.js";

/// `window.NAME = value;` on one line. Group 1 is the name, group 2 the
/// value text without surrounding blanks.
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.([A-Za-z_][A-Za-z0-9_]*)[ \t]*=[ \t]*([^;\n]*?)[ \t]*;")
        .expect("assignment pattern is valid")
});

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write settings file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot locate the executable directory")]
    ExeDir(#[source] io::Error),
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The text of a settings file plus typed access to its assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    text: String,
}

impl Settings {
    /// Wrap settings text.
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] if the file can't be read.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "settings loaded");
        Ok(Self { text })
    }

    /// Write the (possibly edited) text back.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Write`] if the file can't be written.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, &self.text).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Raw value text of the last assignment to `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        ASSIGNMENT
            .captures_iter(&self.text)
            .filter(|c| &c[1] == key)
            .last()
            .and_then(|c| c.get(2))
            .map(|m| m.as_str())
    }

    /// `key` as a number (integer or decimal).
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.raw(key)?.parse().ok()
    }

    /// `key` as an integer. Decimal values don't qualify.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.raw(key)?.parse().ok()
    }

    /// `key` as a boolean literal.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.raw(key)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// All keys assigned a boolean literal.
    #[must_use]
    pub fn toggles(&self) -> BTreeMap<String, bool> {
        ASSIGNMENT
            .captures_iter(&self.text)
            .filter_map(|c| {
                let value = match &c[2] {
                    "true" => true,
                    "false" => false,
                    _ => return None,
                };
                Some((c[1].to_owned(), value))
            })
            .collect()
    }

    /// Build the palette configuration described by this file.
    ///
    /// Missing or unreadable keys fall back to [`PaletteConfig::default`].
    #[must_use]
    pub fn to_config(&self) -> PaletteConfig {
        let defaults = PaletteConfig::default();
        PaletteConfig {
            hue_offset: self.number(HUE_OFFSET).unwrap_or(defaults.hue_offset),
            hue_default: self.number(HUE_DEFAULT).unwrap_or(defaults.hue_default),
            saturation: self.number(COLOR_SATURATION).unwrap_or(defaults.saturation),
            shade: self.number(COLOR_BRIGHTNESS).unwrap_or(defaults.shade),
            brightness: self.number(BRIGHTNESS).unwrap_or(defaults.brightness),
            toggles: self.toggles(),
        }
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Rewrite every existing assignment to `key`. Returns `false` (and
    /// changes nothing) if the key is not assigned.
    pub fn replace_number(&mut self, key: &str, value: f64) -> bool {
        let ranges = self.value_ranges(key);
        if ranges.is_empty() {
            return false;
        }
        let formatted = format_number(value);
        for range in ranges.into_iter().rev() {
            self.text.replace_range(range, &formatted);
        }
        true
    }

    /// Rewrite `key` in place, or append `window.KEY = value;` on a new line.
    pub fn set_number(&mut self, key: &str, value: f64) {
        if self.replace_number(key, value) {
            return;
        }
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text
            .push_str(&format!("window.{key} = {};\n", format_number(value)));
    }

    fn value_ranges(&self, key: &str) -> Vec<Range<usize>> {
        ASSIGNMENT
            .captures_iter(&self.text)
            .filter(|c| &c[1] == key)
            .filter_map(|c| c.get(2).map(|m| m.range()))
            .collect()
    }
}

/// Shortest decimal rendering: `190`, `1.25`.
fn format_number(value: f64) -> String {
    format!("{value}")
}

// ---------------------------------------------------------------------------
// Path resolution
// ---------------------------------------------------------------------------

/// Locate the settings file.
///
/// - an explicit file path is used as-is
/// - an explicit directory gets `settings.js` appended
/// - no argument means `Settings/settings.js` next to the running executable
///
/// # Errors
///
/// Returns [`SettingsError::ExeDir`] if no path was given and the
/// executable's location can't be determined.
pub fn resolve_settings_path(arg: Option<&Path>) -> Result<PathBuf, SettingsError> {
    match arg {
        Some(path) if path.is_dir() => Ok(path.join(SETTINGS_FILE_NAME)),
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let exe = env::current_exe().map_err(SettingsError::ExeDir)?;
            let dir = exe.parent().unwrap_or_else(|| Path::new("."));
            Ok(dir.join("Settings").join(SETTINGS_FILE_NAME))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
