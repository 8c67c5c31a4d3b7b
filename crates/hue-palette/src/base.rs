//! The base palette — the artwork's original colors.
//!
//! Every overlay graphic is drawn in these greens. Theming never edits this
//! table; it derives a new palette from it (see [`crate::palette`]).

/// One named entry of the base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColor {
    /// Semantic name, kebab-case (`"neon-glow"`).
    pub name: &'static str,
    /// Color string in hex or functional notation.
    pub value: &'static str,
}

impl BaseColor {
    const fn new(name: &'static str, value: &'static str) -> Self {
        Self { name, value }
    }

    /// Name under which the derived color is published to the page:
    /// `COLOR_` followed by the upper-snake-case semantic name.
    ///
    /// ```
    /// use hue_palette::base::base_color;
    ///
    /// assert_eq!(base_color("neon-glow").unwrap().global_name(), "COLOR_NEON_GLOW");
    /// ```
    #[must_use]
    pub fn global_name(&self) -> String {
        global_name(self.name)
    }
}

/// All base colors, in publication order.
pub const BASE_PALETTE: &[BaseColor] = &[
    // ── Gradient ──────────────────────────────────────────────
    BaseColor::new("gradient-start", "rgba(0, 177, 137, 0.95)"),
    BaseColor::new("gradient-end", "rgba(83, 252, 24, 0.95)"),
    // ── Neon ──────────────────────────────────────────────────
    BaseColor::new("neon", "#0aff0a"),
    BaseColor::new("neon-glow", "rgba(10, 255, 10, 0.4)"),
    BaseColor::new("neon-soft", "rgba(10, 255, 10, 0.1)"),
    BaseColor::new("neon-accent", "rgba(10, 255, 10, 0.3)"),
    // ── Progress fill ─────────────────────────────────────────
    BaseColor::new("fill-start", "rgba(5, 60, 50, 0.95)"),
    BaseColor::new("fill-mid", "rgba(10, 100, 80, 0.95)"),
    BaseColor::new("fill-mid2", "rgba(30, 170, 80, 0.95)"),
    BaseColor::new("fill-end", "rgba(50, 220, 100, 0.95)"),
    BaseColor::new("fill-goal-start", "rgba(17, 153, 142, 0.9)"),
    BaseColor::new("fill-goal-end", "rgba(56, 239, 125, 0.9)"),
    BaseColor::new("fill-glow", "rgba(56, 239, 125, 0.4)"),
    // ── Fabric ────────────────────────────────────────────────
    BaseColor::new("fabric-dark", "rgba(5, 140, 45, 0.98)"),
    BaseColor::new("fabric-mid", "rgba(15, 200, 70, 0.95)"),
    BaseColor::new("fabric-bright", "rgba(30, 230, 90, 0.92)"),
    BaseColor::new("fabric-mid2", "rgba(20, 200, 65, 0.95)"),
    BaseColor::new("fabric-deep", "rgba(10, 170, 55, 0.98)"),
    // ── Waves ─────────────────────────────────────────────────
    BaseColor::new("wave-1", "rgb(17, 153, 142)"),
    BaseColor::new("wave-2", "rgb(37, 196, 134)"),
    BaseColor::new("wave-3", "rgb(56, 239, 125)"),
    // ── Labels & borders ──────────────────────────────────────
    BaseColor::new("label", "rgba(10, 255, 10, 0.7)"),
    BaseColor::new("label-glow", "rgba(10, 255, 10, 0.3)"),
    BaseColor::new("border-accent", "rgba(10, 255, 10, 0.6)"),
    BaseColor::new("accent-line", "rgba(10, 255, 10, 0.3)"),
];

/// Look up a base color by semantic name.
///
/// Returns `None` if the name is not in the table.
#[must_use]
pub fn base_color(name: &str) -> Option<&'static BaseColor> {
    BASE_PALETTE.iter().find(|c| c.name == name)
}

/// Convert a semantic name to its published global name.
pub(crate) fn global_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 6);
    out.push_str("COLOR_");
    out.extend(
        name.chars()
            .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() }),
    );
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hue_color::Color;
    use std::collections::HashSet;

    #[test]
    fn all_entries_parse() {
        for c in BASE_PALETTE {
            assert!(Color::parse(c.value).is_ok(), "'{}' does not parse: {}", c.name, c.value);
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = BASE_PALETTE.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), BASE_PALETTE.len());
    }

    #[test]
    fn lookup() {
        assert_eq!(base_color("neon").map(|c| c.value), Some("#0aff0a"));
        assert!(base_color("nonexistent").is_none());
    }

    #[test]
    fn global_names() {
        assert_eq!(global_name("neon"), "COLOR_NEON");
        assert_eq!(global_name("fill-goal-start"), "COLOR_FILL_GOAL_START");
        assert_eq!(global_name("wave-1"), "COLOR_WAVE_1");
    }
}
