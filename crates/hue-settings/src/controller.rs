//! Controller state — the values behind the color controller's sliders.
//!
//! The controller edits four values and writes them back to the settings
//! file. Moving the hue slider also moves the reset baseline, so `reset`
//! returns to the last hue chosen in the controller.

use tracing::debug;

use crate::settings::{
    BRIGHTNESS, COLOR_BRIGHTNESS, COLOR_SATURATION, HUE_DEFAULT, HUE_OFFSET, Settings,
};

/// Slider range for global brightness and color shade.
pub const LEVEL_RANGE: (f64, f64) = (0.2, 2.0);
/// Slider range for color saturation.
pub const SATURATION_RANGE: (f64, f64) = (0.0, 2.0);
/// Largest hue the slider can select.
pub const MAX_HUE: u16 = 360;

/// Current controller values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerState {
    hue: u16,
    brightness: f64,
    saturation: f64,
    shade: f64,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            hue: 0,
            brightness: 1.0,
            saturation: 1.0,
            shade: 1.0,
        }
    }
}

impl ControllerState {
    /// Read the current values from a settings file.
    ///
    /// Missing or out-of-range values fall back to the defaults (hue 0,
    /// levels 1.0); readable values are snapped onto the slider ranges.
    #[must_use]
    pub fn load(settings: &Settings) -> Self {
        let mut state = Self::default();
        if let Some(hue) = settings
            .integer(HUE_OFFSET)
            .and_then(|h| u16::try_from(h).ok())
        {
            state.set_hue(hue);
        }
        if let Some(v) = settings.number(BRIGHTNESS) {
            state.set_brightness(v);
        }
        if let Some(v) = settings.number(COLOR_SATURATION) {
            state.set_saturation(v);
        }
        if let Some(v) = settings.number(COLOR_BRIGHTNESS) {
            state.set_shade(v);
        }
        state
    }

    /// Write the values back.
    ///
    /// Hue updates both the offset and the default, but only where those
    /// keys are already assigned. The level keys are appended if missing.
    pub fn write(&self, settings: &mut Settings) {
        let hue = f64::from(self.hue);
        settings.replace_number(HUE_OFFSET, hue);
        settings.replace_number(HUE_DEFAULT, hue);
        settings.set_number(BRIGHTNESS, self.brightness);
        settings.set_number(COLOR_SATURATION, self.saturation);
        settings.set_number(COLOR_BRIGHTNESS, self.shade);
        debug!(state = ?self, "controller state written");
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    #[must_use]
    pub const fn brightness(&self) -> f64 {
        self.brightness
    }

    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub const fn shade(&self) -> f64 {
        self.shade
    }

    // ── Setters (snap to slider) ──────────────────────────────────────────

    pub fn set_hue(&mut self, hue: u16) {
        self.hue = hue.min(MAX_HUE);
    }

    pub fn set_brightness(&mut self, value: f64) {
        self.brightness = snap(value, LEVEL_RANGE);
    }

    pub fn set_saturation(&mut self, value: f64) {
        self.saturation = snap(value, SATURATION_RANGE);
    }

    pub fn set_shade(&mut self, value: f64) {
        self.shade = snap(value, LEVEL_RANGE);
    }
}

/// Clamp into `range` and round to two decimals.
fn snap(value: f64, (lo, hi): (f64, f64)) -> f64 {
    let value = if value.is_nan() { 1.0 } else { value };
    (value.clamp(lo, hi) * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_defaults_when_missing() {
        let state = ControllerState::load(&Settings::parse(""));
        assert_eq!(state, ControllerState::default());
    }

    #[test]
    fn load_reads_values() {
        let s = Settings::parse(
            "window.GLOBAL_HUE_OFFSET = 190;\n\
             window.GLOBAL_BRIGHTNESS = 1.25;\n\
             window.GLOBAL_COLOR_SATURATION = 0.5;\n\
             window.GLOBAL_COLOR_BRIGHTNESS = 0.8;\n",
        );
        let state = ControllerState::load(&s);
        assert_eq!(state.hue(), 190);
        assert_eq!(state.brightness(), 1.25);
        assert_eq!(state.saturation(), 0.5);
        assert_eq!(state.shade(), 0.8);
    }

    #[test]
    fn load_ignores_negative_hue() {
        let state = ControllerState::load(&Settings::parse("window.GLOBAL_HUE_OFFSET = -5;"));
        assert_eq!(state.hue(), 0);
    }

    #[test]
    fn setters_snap() {
        let mut state = ControllerState::default();
        state.set_hue(500);
        state.set_brightness(3.0);
        state.set_shade(0.123_456);
        state.set_saturation(-1.0);
        assert_eq!(state.hue(), 360);
        assert_eq!(state.brightness(), 2.0);
        assert_eq!(state.shade(), 0.2);
        assert_eq!(state.saturation(), 0.0);

        state.set_shade(1.006);
        assert_eq!(state.shade(), 1.01);
    }

    #[test]
    fn write_moves_default_with_hue() {
        let mut s = Settings::parse(
            "window.GLOBAL_HUE_OFFSET = 190;\nwindow.GLOBAL_HUE_DEFAULT = 190;\n",
        );
        let mut state = ControllerState::load(&s);
        state.set_hue(45);
        state.set_brightness(1.5);
        state.write(&mut s);

        assert_eq!(s.integer(HUE_OFFSET), Some(45));
        assert_eq!(s.integer(HUE_DEFAULT), Some(45));
        assert_eq!(s.number(BRIGHTNESS), Some(1.5));
        assert_eq!(s.number(COLOR_SATURATION), Some(1.0));
        assert_eq!(s.number(COLOR_BRIGHTNESS), Some(1.0));
    }

    #[test]
    fn write_does_not_invent_hue_keys() {
        let mut s = Settings::parse("");
        ControllerState::default().write(&mut s);
        assert_eq!(s.integer(HUE_OFFSET), None);
        assert_eq!(s.number(BRIGHTNESS), Some(1.0));
    }

    #[test]
    fn write_is_idempotent() {
        let mut s = Settings::parse("window.GLOBAL_HUE_OFFSET = 10;\n");
        let state = ControllerState::load(&s);
        state.write(&mut s);
        let once = s.clone();
        state.write(&mut s);
        assert_eq!(s, once);
    }
}
