// SPDX-License-Identifier: MIT
//
// Color string parsing.
//
// Two notations are accepted and nothing else:
//
//   #rgb / #rrggbb                     → hex, alpha 1
//   rgb(r, g, b) / rgba(r, g, b, a)    → functional, integers or decimals
//
// The functional form is read leniently: every numeric run in the string is
// collected in order, the first three become R, G, B and a fourth (if any)
// becomes alpha. Whitespace and separators between them don't matter.
//
// Parsing comes in two flavors. `Color::parse` is strict and reports why a
// string was rejected. `classify` is the fail-open front door used by the
// transform: anything it can't read is handed back untouched as
// `Parsed::Unrecognized`, so a bad entry in a stylesheet degrades to "not
// recolored" instead of breaking the page.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::color::Color;

/// Numeric runs inside a functional color: `10`, `0.4`, `.5`.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d*\.?\d+").expect("numeric component pattern is valid")
});

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,

    /// Neither `#` nor `rgb` prefix.
    #[error("unsupported color format: {0:?}")]
    UnknownFormat(String),

    /// `#` prefix, but not 3 or 6 hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// `rgb` prefix, but fewer than three numeric components.
    #[error("functional color needs at least 3 components, found {found}")]
    MissingComponents { found: usize },
}

impl ParseError {
    /// Whether the input looked like a supported notation but its body was
    /// unusable.
    ///
    /// These are the cases worth surfacing to whoever wrote the palette.
    /// `Empty` and `UnknownFormat` are plain pass-through material.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidHex(_) | Self::MissingComponents { .. })
    }
}

// ─── Parsed ──────────────────────────────────────────────────────────────────

/// Result of the fail-open parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<'a> {
    /// A supported notation, decoded.
    Recognized(Color),

    /// Anything else, returned exactly as given.
    Unrecognized(&'a str),
}

impl Parsed<'_> {
    /// The decoded color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Recognized(c) => Some(*c),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Parse `input`, passing it through unchanged if it can't be read.
///
/// Strings with a recognized prefix but a broken body (`#12345`,
/// `rgb(10, 20)`) are also passed through, with a warning logged so the
/// bad entry can be found.
#[must_use]
pub fn classify(input: &str) -> Parsed<'_> {
    match Color::parse(input) {
        Ok(color) => Parsed::Recognized(color),
        Err(err) => {
            if err.is_malformed() {
                warn!(input, %err, "malformed color left unchanged");
            }
            Parsed::Unrecognized(input)
        }
    }
}

// ─── Strict parse ────────────────────────────────────────────────────────────

impl Color {
    /// Parse a hex or functional color string.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing why the string was rejected.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseError::InvalidHex(s.to_owned()));
        }

        if s.starts_with("rgb") {
            return parse_functional(s);
        }

        Err(ParseError::UnknownFormat(s.to_owned()))
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_functional(s: &str) -> Result<Color, ParseError> {
    let parts: Vec<f64> = NUMBER
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    let [r, g, b, rest @ ..] = parts.as_slice() else {
        return Err(ParseError::MissingComponents { found: parts.len() });
    };

    let alpha = rest.first().copied().unwrap_or(1.0);
    Ok(Color::rgba(channel(*r), channel(*g), channel(*b), alpha))
}

/// Round a functional channel to the nearest integer in `0..=255`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse the digits after `#`.
fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB — each digit doubled
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
