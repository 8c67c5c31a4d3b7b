//! Theme configuration — the values the palette is derived from.

use std::collections::BTreeMap;

use hue_color::Adjustment;
use serde::{Deserialize, Serialize};

/// An immutable snapshot of the theming configuration.
///
/// Built by whoever owns the settings (see the `hue-settings` crate) and
/// handed to the [`Publisher`](crate::Publisher) on every publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Hue rotation applied to every base color, in degrees.
    pub hue_offset: f64,

    /// Baseline hue that reset actions return to. Not used by the transform.
    pub hue_default: f64,

    /// Multiplier on HSL saturation (nominal 0.0–2.0).
    pub saturation: f64,

    /// Multiplier on HSL lightness (nominal 0.2–2.0).
    pub shade: f64,

    /// Value of the `filter: brightness()` rule (nominal 0.0–2.0).
    pub brightness: f64,

    /// Feature switches for unrelated overlay features. Carried through
    /// verbatim for the page; theming never reads them.
    pub toggles: BTreeMap<String, bool>,
}

impl PaletteConfig {
    /// Config with the given hue offset and everything else at its default.
    #[must_use]
    pub fn with_hue(hue_offset: f64) -> Self {
        Self {
            hue_offset,
            ..Self::default()
        }
    }

    /// The per-color adjustment this config describes.
    #[must_use]
    pub const fn adjustment(&self) -> Adjustment {
        Adjustment::hue(self.hue_offset)
            .with_saturation(self.saturation)
            .with_lightness(self.shade)
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            hue_offset: 0.0,
            hue_default: 0.0,
            saturation: 1.0,
            shade: 1.0,
            brightness: 1.0,
            toggles: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
