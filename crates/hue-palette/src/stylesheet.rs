//! Stylesheet generation — CSS custom properties plus a brightness filter.
//!
//! The page's stylesheets reference theme colors through `var(--…)`, so
//! only a fixed subset of the derived palette is exported as custom
//! properties. Global brightness is a single `filter` rule over the named
//! overlay regions.

use std::fmt::{self, Write as _};

use crate::palette::DerivedPalette;

/// Stable identifier of the injected style element.
///
/// Publishing always writes under this id, which is what makes repeated
/// publishes replace rather than accumulate.
pub const STYLE_ID: &str = "hue-theme-style";

/// Custom property → semantic palette name.
pub const CUSTOM_PROPERTIES: &[(&str, &str)] = &[
    ("--neon-color", "neon"),
    ("--neon-glow", "neon-glow"),
    ("--neon-soft", "neon-soft"),
    ("--neon-accent", "neon-accent"),
    ("--gradient-start", "gradient-start"),
    ("--gradient-end", "gradient-end"),
    ("--label-color", "label"),
    ("--label-glow", "label-glow"),
    ("--border-accent", "border-accent"),
    ("--accent-line", "accent-line"),
];

/// Overlay regions the brightness filter applies to.
pub const BRIGHTNESS_SELECTORS: &[&str] = &[
    ".overlay-container",
    ".progress-container",
    ".goal-bar",
    ".wave-container",
    ".fabric-layer",
];

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// A generated theme stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// `(custom property, color)` declarations, in [`CUSTOM_PROPERTIES`] order.
    pub properties: Vec<(&'static str, String)>,
    /// Argument of `filter: brightness()`.
    pub brightness: f64,
}

impl Stylesheet {
    /// Build the stylesheet for a derived palette.
    #[must_use]
    pub fn from_palette(palette: &DerivedPalette, brightness: f64) -> Self {
        let properties = CUSTOM_PROPERTIES
            .iter()
            .filter_map(|(prop, name)| palette.get(name).map(|v| (*prop, v.to_owned())))
            .collect();
        Self {
            properties,
            brightness,
        }
    }

    /// Value declared for a custom property, if any.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| *p == name)
            .map(|(_, v)| v.as_str())
    }

    /// Render as CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (prop, value) in &self.properties {
            let _ = writeln!(css, "  {prop}: {value};");
        }
        css.push_str("}\n\n");
        css.push_str(&BRIGHTNESS_SELECTORS.join(", "));
        let _ = write!(css, " {{\n  filter: brightness({});\n}}\n", self.brightness);
        css
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
