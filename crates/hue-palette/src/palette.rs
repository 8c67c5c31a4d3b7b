//! Derived palette generation — the bridge from base colors to theme colors.
//!
//! Applies the config's [`Adjustment`](hue_color::Adjustment) to every entry
//! of [`BASE_PALETTE`] and keeps the results under the same names, in the
//! same order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::base::{BASE_PALETTE, global_name};
use crate::config::PaletteConfig;

// ---------------------------------------------------------------------------
// DerivedPalette
// ---------------------------------------------------------------------------

/// The base palette after theming.
///
/// A pure function of [`BASE_PALETTE`] and a [`PaletteConfig`]: deriving
/// twice from the same config gives identical palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPalette {
    entries: Vec<(&'static str, String)>,
}

impl DerivedPalette {
    /// Derive the palette for `config`.
    #[must_use]
    pub fn derive(config: &PaletteConfig) -> Self {
        let adjustment = config.adjustment();
        let entries: Vec<_> = BASE_PALETTE
            .iter()
            .map(|base| (base.name, adjustment.apply(base.value).into_owned()))
            .collect();

        debug!(
            hue = config.hue_offset,
            saturation = config.saturation,
            shade = config.shade,
            colors = entries.len(),
            "palette derived"
        );

        Self { entries }
    }

    /// Derived color for a semantic name (`"neon-glow"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Derived color for a published global name (`"COLOR_NEON_GLOW"`).
    #[must_use]
    pub fn global(&self, global: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| global_name(n) == global)
            .map(|(_, v)| v.as_str())
    }

    /// `(semantic name, color)` pairs in base-table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// `(global name, color)` pairs in base-table order.
    pub fn globals(&self) -> impl Iterator<Item = (String, &str)> {
        self.entries.iter().map(|(n, v)| (global_name(n), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a map of global name to color, in base-table order.
impl Serialize for DerivedPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.globals() {
            map.serialize_entry(&name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
