// SPDX-License-Identifier: MIT
//
// Color values and the RGB ↔ HSL round trip.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) follow the
// usual notation of the HSL conversion formulas. Renaming them would make
// the code harder to compare against the published algorithm.
#![allow(clippy::many_single_char_names)]
//
// The overlay stylesheets speak sRGB with an alpha channel. Hue rotation
// happens in HSL (the cylindrical form of sRGB), so a color makes a full
// trip here on every transform:
//
//   8-bit sRGB → normalized [0,1] → HSL → rotate/scale → normalized → 8-bit
//
// Alpha never enters the math. It is carried through untouched.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color with a floating-point alpha.
///
/// This is the canonical representation every accepted input notation is
/// parsed into. Channels are integers in `0..=255`; alpha is in `[0, 1]`
/// and defaults to `1.0` when the input does not specify one.
///
/// # Examples
///
/// ```
/// use hue_color::Color;
///
/// let neon = Color::parse("#0aff0a").unwrap();
/// assert_eq!(neon, Color::rgb(10, 255, 10));
///
/// let glow: Color = "rgba(10, 255, 10, 0.4)".parse().unwrap();
/// assert_eq!(glow.to_string(), "rgba(10, 255, 10, 0.4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Opacity: 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a color from 8-bit channels and an alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Whether all three channels are equal (no hue, no saturation).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    // ─── HSL ─────────────────────────────────────────────────────────────

    /// Convert to HSL using the max/min channel algorithm.
    ///
    /// Lightness is the midpoint of the largest and smallest channel. When
    /// they are equal the color is achromatic and both hue and saturation
    /// are zero. Otherwise hue is measured in six sectors of 60°, one pair
    /// per dominant channel. Ties between dominant channels resolve in
    /// red, green, blue order.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        #[allow(clippy::float_cmp)]
        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        #[allow(clippy::float_cmp)]
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: sector * 60.0,
            s,
            l,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

/// Renders as the CSS functional notation `rgba(R, G, B, A)`.
///
/// Alpha uses the shortest decimal form that round-trips, so `1.0` prints
/// as `1` and `0.95` as `0.95`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// Hue is in degrees, nominally `[0, 360)`. Saturation and lightness are
/// fractions, nominally `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Rotate hue by `degrees`, wrapping into `[0, 360)`.
    ///
    /// Any finite input angle is accepted, including negative values and
    /// multiples of a full turn.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Multiply saturation and lightness, capping each at 1.0.
    ///
    /// There is no lower clamp: factors are expected to be non-negative.
    #[must_use]
    pub fn scale(self, saturation: f64, lightness: f64) -> Self {
        Self {
            s: (self.s * saturation).min(1.0),
            l: (self.l * lightness).min(1.0),
            ..self
        }
    }

    /// Convert back to an 8-bit color, attaching `alpha` unchanged.
    #[must_use]
    pub fn to_color(self, alpha: f64) -> Color {
        #[allow(clippy::float_cmp)]
        if self.s == 0.0 {
            let v = to_u8(self.l);
            return Color::rgba(v, v, v, alpha);
        }

        let Self { h, s, l } = self;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let t = h / 360.0;

        Color::rgba(
            to_u8(hue_to_rgb(p, q, t + 1.0 / 3.0)),
            to_u8(hue_to_rgb(p, q, t)),
            to_u8(hue_to_rgb(p, q, t - 1.0 / 3.0)),
            alpha,
        )
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let mut h = h % 360.0;
    while h < 0.0 {
        h += 360.0;
    }
    h
}

/// One channel of the piecewise HSL → RGB helper.
///
/// `t` is the hue as a fraction of a turn, offset by ±1/3 for red and blue.
/// Unfused multiply then add, rounding the same way the page's script does.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
