// SPDX-License-Identifier: MIT
//
// hue-color — Color transform for overlay-hue.
//
// Parses the two color notations the overlay stylesheets use (hex and
// functional rgb/rgba), rotates hue in HSL space while keeping saturation,
// lightness and alpha, and renders the result back as an `rgba()` string.
//
// Everything here is pure. The same input string and adjustment always
// produce the same output string, which is what lets the palette layer
// recompute the whole theme on every refresh without caching.

pub mod color;
pub mod parse;
pub mod transform;

pub use color::{Color, Hsl};
pub use parse::{ParseError, Parsed, classify};
pub use transform::{Adjustment, adjust_hue, transform};
