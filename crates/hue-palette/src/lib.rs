//! # hue-palette — Overlay palette publisher
//!
//! Recolors the fixed overlay palette from one set of configuration values
//! and publishes the result for the page to consume.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig (hue offset, saturation, shade, brightness)
//!     │
//!     ▼
//! base.rs:       constant table of named base colors
//!     │
//!     ▼
//! palette.rs:    DerivedPalette — hue-color transform applied per entry
//!     │
//!     ▼
//! stylesheet.rs: CSS custom properties + brightness filter rule
//!     │
//!     ▼
//! sink.rs:       StyleSink — upsert the stylesheet under a stable id
//!     │
//!     ▼
//! publisher.rs:  Publisher — owns config, derived state and the sink
//! ```
//!
//! Every publish recomputes everything from the base table. Nothing is
//! patched incrementally, so repeating a publish with the same config is a
//! no-op and publishing a new config fully replaces the old one.

pub mod base;
pub mod config;
pub mod palette;
pub mod publisher;
pub mod sink;
pub mod stylesheet;

pub use base::{BASE_PALETTE, BaseColor};
pub use config::PaletteConfig;
pub use palette::DerivedPalette;
pub use publisher::{PublishError, Publisher};
pub use sink::{CssFileSink, StyleRegistry, StyleSink};
pub use stylesheet::{STYLE_ID, Stylesheet};
