//! Overlay audit — which overlay pages load the settings file and which
//! controller keys each one actually references.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Keys the controller and hue tools can change.
pub const CONTROLLED_KEYS: &[&str] = &[
    "GLOBAL_HUE_OFFSET",
    "GLOBAL_BRIGHTNESS",
    "GLOBAL_COLOR_BRIGHTNESS",
    "STAR_HUE_OFFSET",
    "STAR_COLOR_BRIGHTNESS",
    "STAR_SECONDARY_HUE_OFFSET",
    "STAR_SECONDARY_COLOR_BRIGHTNESS",
    "STAR_SECONDARY_OFFSET_DEG",
    "GLOSSY_INTENSITY",
    "DAILY_KICKS_GOAL",
    "SUB_GOAL_CONFIG",
    "GLOW_KICK_DOCK",
    "GLOW_SUB_DOCK",
    "GLOW_KICK_RECT",
    "GLOW_SUB_RECT",
    "SHOW_BORDER_KICK_DOCK",
    "SHOW_BORDER_SUB_DOCK",
    "SHOW_BORDER_KICK_RECT",
];

/// Whole identifiers, so `GLOW_KICK_DOCK` doesn't match `GLOW_KICK_DOCK_2`.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("no overlay files found in {}", .0.display())]
    NoOverlays(PathBuf),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Per-overlay result
// ---------------------------------------------------------------------------

/// Audit result for one overlay page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayAudit {
    /// File name of the page.
    pub name: String,
    /// Whether the page includes `Settings/settings.js`.
    pub uses_settings: bool,
    /// Controlled keys the page references, in [`CONTROLLED_KEYS`] order.
    pub keys: Vec<&'static str>,
}

impl OverlayAudit {
    /// Audit the text of one page.
    #[must_use]
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let words: HashSet<&str> = WORD.find_iter(text).map(|m| m.as_str()).collect();
        let keys = CONTROLLED_KEYS
            .iter()
            .copied()
            .filter(|key| words.contains(key))
            .collect();
        Self {
            name: name.into(),
            // A relative `../Settings/settings.js` contains this too.
            uses_settings: text.contains("Settings/settings.js"),
            keys,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Audit results for a directory of overlay pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub overlays: Vec<OverlayAudit>,
}

impl AuditReport {
    /// How many overlays reference each controlled key.
    #[must_use]
    pub fn coverage(&self) -> Vec<(&'static str, usize)> {
        CONTROLLED_KEYS
            .iter()
            .map(|key| {
                let count = self.overlays.iter().filter(|o| o.keys.contains(key)).count();
                (*key, count)
            })
            .collect()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Overlay Settings Audit ===")?;
        for overlay in &self.overlays {
            writeln!(f, "{}", overlay.name)?;
            writeln!(
                f,
                "  loads settings.js: {}",
                if overlay.uses_settings { "YES" } else { "NO" }
            )?;
            writeln!(f, "  controlled keys referenced: {}", overlay.keys.len())?;
            if overlay.keys.is_empty() {
                writeln!(f, "  keys: (none)")?;
            } else {
                writeln!(f, "  keys: {}", overlay.keys.join(", "))?;
            }
            writeln!(f)?;
        }

        writeln!(
            f,
            "=== Controller Key Coverage (count of overlays referencing key) ==="
        )?;
        for (key, count) in self.coverage() {
            writeln!(f, "{key}: {count}")?;
        }
        Ok(())
    }
}

/// Audit every `*.html` file in `dir`, in file-name order.
///
/// Unreadable bytes are replaced rather than rejected, so one badly encoded
/// page doesn't stop the audit.
///
/// # Errors
///
/// Returns [`AuditError::NoOverlays`] when the directory is missing or has
/// no `.html` files, and [`AuditError::Io`] when a listed file can't be read.
pub fn audit_overlays(dir: &Path) -> Result<AuditReport, AuditError> {
    let mut pages: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "html"))
            .collect(),
        Err(_) => Vec::new(),
    };
    if pages.is_empty() {
        return Err(AuditError::NoOverlays(dir.to_path_buf()));
    }
    pages.sort();

    let overlays = pages
        .iter()
        .map(|path| {
            let bytes = fs::read(path).map_err(|source| AuditError::Io {
                path: path.clone(),
                source,
            })?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(OverlayAudit::from_text(name, &String::from_utf8_lossy(&bytes)))
        })
        .collect::<Result<Vec<_>, AuditError>>()?;

    debug!(dir = %dir.display(), overlays = overlays.len(), "overlay audit complete");
    Ok(AuditReport { overlays })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
