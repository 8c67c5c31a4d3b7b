// SPDX-License-Identifier: MIT
//
// Command-line arguments for overlay-hue.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hue_settings::HueAction;

#[derive(Debug, Parser)]
#[command(name = "overlay-hue", version)]
/// Recolor the overlay palette and publish it as a stylesheet.
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rotate the hue of a single color and print the result.
    Transform {
        /// Color in `#rgb`, `#rrggbb`, `rgb(…)` or `rgba(…)` notation.
        color: String,
        /// Degrees to rotate. Negative values rotate backwards.
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
        #[arg(long, default_value_t = 1.0)]
        /// Multiplier on HSL saturation.
        saturation: f64,
        #[arg(long, default_value_t = 1.0)]
        /// Multiplier on HSL lightness.
        shade: f64,
    },

    /// Derive the palette from the settings file and publish its stylesheet.
    Render(RenderArgs),

    /// Step the global hue offset: `reset`, `+N`, `-N` or `N`.
    Hue {
        #[arg(allow_hyphen_values = true)]
        action: HueAction,
        /// Settings file, or a directory containing `settings.js`.
        path: Option<PathBuf>,
    },

    /// Write controller values to the settings file.
    Set(SetArgs),

    /// Report which overlay pages load the settings and which keys they use.
    Audit {
        #[arg(default_value = "Overlays")]
        /// Directory holding the overlay `.html` pages.
        dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(long)]
    /// Settings file, or a directory containing `settings.js`. Defaults to
    /// `Settings/settings.js` next to the executable.
    pub settings: Option<PathBuf>,

    #[arg(long)]
    /// Write the stylesheet into this directory instead of stdout.
    pub out: Option<PathBuf>,

    #[arg(long)]
    /// Print the published color variables as JSON.
    pub json: bool,

    #[arg(long, value_name = "SECS")]
    /// Reload the settings and republish every SECS seconds.
    pub watch: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long)]
    /// Hue offset in degrees (0–360). Also becomes the reset baseline.
    pub hue: Option<u16>,

    #[arg(long)]
    /// Global brightness filter (0.2–2.0).
    pub brightness: Option<f64>,

    #[arg(long)]
    /// Color saturation multiplier (0.0–2.0).
    pub saturation: Option<f64>,

    #[arg(long)]
    /// Color shade (lightness) multiplier (0.2–2.0).
    pub shade: Option<f64>,

    /// Settings file, or a directory containing `settings.js`.
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn transform_accepts_negative_degrees() {
        let cli = Cli::try_parse_from(["overlay-hue", "transform", "#0aff0a", "-170"]).unwrap();
        match cli.command {
            Command::Transform { color, degrees, .. } => {
                assert_eq!(color, "#0aff0a");
                assert_eq!(degrees, -170.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hue_accepts_decrement() {
        let cli = Cli::try_parse_from(["overlay-hue", "hue", "-15"]).unwrap();
        match cli.command {
            Command::Hue { action, path } => {
                assert_eq!(action, HueAction::Subtract(15));
                assert!(path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hue_rejects_garbage() {
        assert!(Cli::try_parse_from(["overlay-hue", "hue", "blue"]).is_err());
    }

    #[test]
    fn render_flags() {
        let cli = Cli::try_parse_from([
            "overlay-hue",
            "render",
            "--settings",
            "Settings",
            "--json",
            "--watch",
            "5",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.settings, Some(PathBuf::from("Settings")));
        assert!(args.json);
        assert_eq!(args.watch, Some(5));
        assert!(args.out.is_none());
    }
}
