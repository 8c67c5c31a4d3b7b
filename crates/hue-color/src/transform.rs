// SPDX-License-Identifier: MIT
//
// Hue rotation on color strings.
//
// The transform takes a color string and an adjustment and returns a color
// string. Inputs that are already correct (zero rotation) or that can't be
// read come back as the very same borrowed `&str`; everything else is
// re-rendered as `rgba(R, G, B, A)`.

use std::borrow::Cow;

use tracing::trace;

use crate::color::Color;
use crate::parse::{Parsed, classify};

// ─── Adjustment ──────────────────────────────────────────────────────────────

/// A hue rotation plus optional saturation and lightness multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Degrees to rotate. Any value is accepted; the result wraps into
    /// `[0, 360)`.
    pub hue: f64,

    /// Multiplier on HSL saturation. The product is capped at 1.0.
    pub saturation: f64,

    /// Multiplier on HSL lightness. The product is capped at 1.0.
    pub lightness: f64,
}

impl Adjustment {
    /// Rotate hue only.
    #[must_use]
    pub const fn hue(degrees: f64) -> Self {
        Self {
            hue: degrees,
            saturation: 1.0,
            lightness: 1.0,
        }
    }

    #[must_use]
    pub const fn with_saturation(self, saturation: f64) -> Self {
        Self { saturation, ..self }
    }

    #[must_use]
    pub const fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }

    /// Whether [`apply`](Self::apply) returns its input untouched.
    ///
    /// A zero (or NaN) rotation short-circuits the whole transform, even
    /// when the saturation or lightness factors are not 1.0. Overlays rely
    /// on "offset 0" meaning "the original artwork colors, verbatim".
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.hue == 0.0 || self.hue.is_nan()
    }

    /// Transform a color string.
    ///
    /// Returns the input unchanged when the adjustment is an identity or the
    /// string is not a supported color; otherwise the adjusted color in
    /// `rgba()` notation.
    #[must_use]
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.is_identity() {
            return Cow::Borrowed(input);
        }

        match classify(input) {
            Parsed::Recognized(color) => {
                let out = color.adjust(self);
                trace!(input, output = %out, hue = self.hue, "color adjusted");
                Cow::Owned(out.to_string())
            }
            Parsed::Unrecognized(original) => Cow::Borrowed(original),
        }
    }
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::hue(0.0)
    }
}

impl Color {
    /// Apply an adjustment to an already-parsed color.
    ///
    /// Unlike [`Adjustment::apply`] there is no zero-rotation shortcut: the
    /// color always goes through HSL, so the saturation and lightness
    /// factors take effect even at 0°. Alpha is preserved.
    #[must_use]
    pub fn adjust(self, adjustment: &Adjustment) -> Self {
        self.to_hsl()
            .rotate(adjustment.hue)
            .scale(adjustment.saturation, adjustment.lightness)
            .to_color(self.alpha)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Rotate the hue of `input` by `hue` degrees and scale its saturation and
/// lightness.
///
/// See [`Adjustment::apply`] for the pass-through rules.
///
/// # Examples
///
/// ```
/// use hue_color::transform;
///
/// assert_eq!(transform("#0aff0a", 190.0, 1.0, 1.0), "rgba(255, 10, 214, 1)");
/// assert_eq!(transform("#0aff0a", 0.0, 2.0, 0.5), "#0aff0a");
/// assert_eq!(transform("teal", 90.0, 1.0, 1.0), "teal");
/// ```
#[must_use]
pub fn transform(input: &str, hue: f64, saturation: f64, lightness: f64) -> Cow<'_, str> {
    Adjustment::hue(hue)
        .with_saturation(saturation)
        .with_lightness(lightness)
        .apply(input)
}

/// Rotate the hue of `input` by `hue` degrees, keeping saturation and
/// lightness.
#[must_use]
pub fn adjust_hue(input: &str, hue: f64) -> Cow<'_, str> {
    Adjustment::hue(hue).apply(input)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channels(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    fn assert_close(actual: Color, expected: Color) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
        assert_eq!(actual.alpha, expected.alpha);
    }

    // ── Identity ─────────────────────────────────────────────────────────

    #[test]
    fn zero_rotation_is_identity() {
        for input in ["#0aff0a", "rgba(10,255,10,0.4)", "not a color", "", "#12"] {
            let out = adjust_hue(input, 0.0);
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(out, input);
        }
    }

    #[test]
    fn zero_rotation_ignores_factors() {
        assert_eq!(transform("#0aff0a", 0.0, 2.0, 0.5), "#0aff0a");
    }

    #[test]
    fn nan_rotation_is_identity() {
        assert_eq!(adjust_hue("#0aff0a", f64::NAN), "#0aff0a");
    }

    // ── Known values ─────────────────────────────────────────────────────

    #[test]
    fn neon_green_to_magenta() {
        let out = adjust_hue("#0aff0a", 190.0);
        assert_eq!(out, "rgba(255, 10, 214, 1)");
        let hsl = channels(&out).to_hsl();
        assert!((hsl.h - 310.0).abs() < 1.0, "hue was {}", hsl.h);
    }

    #[test]
    fn full_turn_keeps_channels() {
        assert_eq!(
            adjust_hue("rgba(10,255,10,0.4)", 360.0),
            "rgba(10, 255, 10, 0.4)"
        );
    }

    #[test]
    fn negative_rotation_matches_positive_equivalent() {
        assert_eq!(adjust_hue("#0aff0a", -170.0), adjust_hue("#0aff0a", 190.0));
    }

    #[test]
    fn red_to_green_and_blue() {
        assert_eq!(adjust_hue("#f00", 120.0), "rgba(0, 255, 0, 1)");
        assert_eq!(adjust_hue("#f00", -120.0), "rgba(0, 0, 255, 1)");
    }

    #[test]
    fn base_palette_entry() {
        assert_eq!(
            adjust_hue("rgba(0, 177, 137, 0.95)", 190.0),
            "rgba(177, 0, 10, 0.95)"
        );
    }

    #[test]
    fn gray_stays_gray() {
        assert_eq!(adjust_hue("rgb(128,128,128)", 90.0), "rgba(128, 128, 128, 1)");
        assert_eq!(adjust_hue("#ffffff", 45.0), "rgba(255, 255, 255, 1)");
    }

    // ── Saturation / lightness ───────────────────────────────────────────

    #[test]
    fn lightness_factor_darkens() {
        assert_eq!(transform("#0aff0a", 190.0, 1.0, 0.5), "rgba(133, 0, 110, 1)");
    }

    #[test]
    fn saturation_factor_doubles_and_caps() {
        // s = 0.3125 → 0.625
        let c = channels("rgb(200,150,150)").adjust(&Adjustment::hue(10.0).with_saturation(2.0));
        assert!((c.to_hsl().s - 0.625).abs() < 0.01, "s was {}", c.to_hsl().s);
        assert_eq!(c, Color::rgb(225, 142, 125));

        let c = channels("rgb(200,150,150)").adjust(&Adjustment::hue(10.0).with_saturation(50.0));
        assert!(c.to_hsl().s <= 1.0);
    }

    #[test]
    fn zero_saturation_factor_grays_out() {
        assert_eq!(transform("#0aff0a", 190.0, 0.0, 1.0), "rgba(133, 133, 133, 1)");
    }

    #[test]
    fn adjust_applies_factors_at_zero_rotation() {
        let c = Color::rgb(10, 255, 10).adjust(&Adjustment::hue(0.0).with_lightness(0.5));
        assert!(c.g < 255);
    }

    // ── Laws ─────────────────────────────────────────────────────────────

    #[test]
    fn rotation_round_trips_within_rounding() {
        let inputs = [
            "#0aff0a",
            "#f80",
            "#123456",
            "rgba(5, 60, 50, 0.95)",
            "rgb(17, 153, 142)",
            "rgba(83, 252, 24, 0.95)",
        ];
        for input in inputs {
            let original = channels(input);
            for d in [1.0, 45.0, 90.0, 190.0, 270.0, 359.0] {
                let there = adjust_hue(input, d);
                let back = adjust_hue(&there, (-d).rem_euclid(360.0));
                assert_close(channels(&back), original);
            }
        }
    }

    #[test]
    fn alpha_never_changes() {
        for (input, alpha) in [("rgba(1,2,3,0.25)", 0.25), ("#abc", 1.0), ("rgb(9,8,7)", 1.0)] {
            for adj in [
                Adjustment::hue(77.0),
                Adjustment::hue(200.0).with_saturation(1.7).with_lightness(0.3),
            ] {
                assert_eq!(channels(&adj.apply(input)).alpha, alpha);
            }
        }
    }

    #[test]
    fn deterministic() {
        let a = transform("rgba(30, 170, 80, 0.95)", 123.4, 1.3, 0.8);
        let b = transform("rgba(30, 170, 80, 0.95)", 123.4, 1.3, 0.8);
        assert_eq!(a, b);
    }

    // ── Fail-open ────────────────────────────────────────────────────────

    #[test]
    fn unknown_format_passes_through() {
        let out = adjust_hue("hsl(120, 100%, 50%)", 90.0);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "hsl(120, 100%, 50%)");
    }

    #[test]
    fn too_few_components_passes_through() {
        assert_eq!(adjust_hue("rgb(10, 20)", 90.0), "rgb(10, 20)");
        assert_eq!(adjust_hue("rgba()", 90.0), "rgba()");
    }

    #[test]
    fn bad_hex_passes_through() {
        assert_eq!(adjust_hue("#12345", 90.0), "#12345");
    }
}
