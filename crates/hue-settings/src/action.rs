//! Hue stepping action — one-argument edits of the global hue offset.
//!
//! Meant to be bound to hotkeys or stream-deck buttons:
//!
//! | Argument | Effect                                  |
//! |----------|-----------------------------------------|
//! | `reset`  | offset = `GLOBAL_HUE_DEFAULT` (or 0)    |
//! | `+N`     | offset += N                             |
//! | `-N`     | offset -= N                             |
//! | `N`      | offset = N                              |
//!
//! The result is always normalized into `0..360`.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::settings::{HUE_DEFAULT, HUE_OFFSET, Settings};

/// A parsed hue action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueAction {
    /// Return to the configured default hue.
    Reset,
    /// Rotate forward by the given degrees.
    Add(i64),
    /// Rotate backward by the given degrees.
    Subtract(i64),
    /// Set an absolute hue.
    Set(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hue action {0:?}: expected `reset`, `+N`, `-N` or `N`")]
pub struct ActionError(pub String);

impl FromStr for HueAction {
    type Err = ActionError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let arg = arg.trim();
        let number = |s: &str| s.trim().parse::<i64>().map_err(|_| ActionError(arg.to_owned()));

        if arg.eq_ignore_ascii_case("reset") {
            return Ok(Self::Reset);
        }
        if let Some(amount) = arg.strip_prefix('+') {
            return number(amount).map(Self::Add);
        }
        if let Some(amount) = arg.strip_prefix('-') {
            return number(amount).map(Self::Subtract);
        }
        number(arg).map(Self::Set)
    }
}

impl HueAction {
    /// New offset given the current offset and the configured default.
    #[must_use]
    pub const fn apply(self, current: i64, default: i64) -> i64 {
        let raw = match self {
            Self::Reset => default,
            Self::Add(n) => current.saturating_add(n),
            Self::Subtract(n) => current.saturating_sub(n),
            Self::Set(n) => n,
        };
        raw.rem_euclid(360)
    }

    /// Apply to a settings file's `GLOBAL_HUE_OFFSET`.
    ///
    /// Returns the new offset, or `None` if the file has no integer offset
    /// assignment to edit (the file is then left untouched). A missing
    /// default counts as 0.
    pub fn run(self, settings: &mut Settings) -> Option<i64> {
        let Some(current) = settings.integer(HUE_OFFSET) else {
            warn!("no integer {HUE_OFFSET} assignment, hue action skipped");
            return None;
        };
        let default = settings.integer(HUE_DEFAULT).unwrap_or(0);
        let next = self.apply(current, default);

        #[allow(clippy::cast_precision_loss)]
        settings.replace_number(HUE_OFFSET, next as f64);
        debug!(action = ?self, current, next, "hue action applied");
        Some(next)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
