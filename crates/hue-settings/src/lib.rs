//! # hue-settings — the settings file and the tools that edit it
//!
//! Overlay pages load a JavaScript settings file that assigns the theme
//! configuration as globals:
//!
//! ```text
//! window.GLOBAL_HUE_OFFSET = 190;
//! window.GLOBAL_BRIGHTNESS = 1.1;
//! window.ENABLE_BULLETS_SQUARE = true;
//! ```
//!
//! This crate reads and rewrites those assignments in place, leaving the
//! rest of the file (comments, helper functions, base color declarations)
//! byte-for-byte intact.
//!
//! - [`settings`]: load/save, typed reads, in-place writes, `PaletteConfig`
//! - [`action`]: the `reset` / `+N` / `-N` / `N` hue stepping action
//! - [`controller`]: slider state for hue, brightness, saturation and shade
//! - [`audit`]: which overlay pages load the settings and which keys they use

pub mod action;
pub mod audit;
pub mod controller;
pub mod settings;

pub use action::{ActionError, HueAction};
pub use audit::{AuditError, AuditReport, audit_overlays};
pub use controller::ControllerState;
pub use settings::{Settings, SettingsError, resolve_settings_path};
