// SPDX-License-Identifier: MIT
//
// overlay-hue — recolors the overlay palette from the shared settings file.
//
//   settings.js → PaletteConfig → DerivedPalette → Stylesheet → StyleSink
//
// `render` publishes once (or on an interval with --watch). `hue` and `set`
// edit the settings file in place; the next render picks up the change.

mod cli;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use hue_color::transform;
use hue_palette::{CssFileSink, PaletteConfig, Publisher, StyleRegistry, StyleSink};
use hue_settings::{ControllerState, HueAction, Settings, audit_overlays, resolve_settings_path};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, RenderArgs, SetArgs};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "overlay_hue=info,hue_palette=info,hue_settings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Transform {
            color,
            degrees,
            saturation,
            shade,
        } => {
            println!("{}", transform(&color, degrees, saturation, shade));
            Ok(())
        }
        Command::Render(args) => render(&args),
        Command::Hue { action, path } => hue(action, path.as_deref()),
        Command::Set(args) => set(&args),
        Command::Audit { dir } => {
            let report = audit_overlays(&dir)?;
            print!("{report}");
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

/// Read the palette config, falling back to defaults if the file is absent.
fn load_config(path: &Path) -> Result<PaletteConfig> {
    if !path.exists() {
        warn!(path = %path.display(), "settings file not found, using defaults");
        return Ok(PaletteConfig::default());
    }
    let settings = Settings::load(path)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    Ok(settings.to_config())
}

fn render(args: &RenderArgs) -> Result<()> {
    let path = resolve_settings_path(args.settings.as_deref())?;
    let config = load_config(&path)?;
    info!(settings = %path.display(), hue = config.hue_offset, "rendering palette");

    match &args.out {
        Some(dir) => serve(Publisher::new(CssFileSink::new(dir), config), &path, args),
        None => serve(Publisher::new(StyleRegistry::new(), config), &path, args),
    }
}

fn serve<S: StyleSink>(mut publisher: Publisher<S>, path: &Path, args: &RenderArgs) -> Result<()> {
    publisher.publish().context("publishing theme")?;
    emit(&publisher, args)?;

    let Some(secs) = args.watch else {
        return Ok(());
    };
    let interval = Duration::from_secs(secs.max(1));
    info!(interval_secs = interval.as_secs(), "watching settings");

    loop {
        thread::sleep(interval);
        if reload(&mut publisher, path) {
            emit(&publisher, args)?;
        }
    }
}

/// One watch tick: reload the settings and publish them if they changed.
///
/// Returns whether a new theme was published. Failures are logged and leave
/// the current theme in place; since the publisher only adopts a config once
/// it is stored, the next tick tries again.
fn reload<S: StyleSink>(publisher: &mut Publisher<S>, path: &Path) -> bool {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "reload failed, keeping current theme");
            return false;
        }
    };
    match publisher.refresh(config) {
        Ok(published) => published.is_some(),
        Err(e) => {
            warn!(error = %e, "republish failed, keeping current theme");
            false
        }
    }
}

/// Print what was just published: JSON globals, or the stylesheet when it
/// isn't going to a file.
fn emit<S: StyleSink>(publisher: &Publisher<S>, args: &RenderArgs) -> Result<()> {
    if args.json {
        if let Some(palette) = publisher.palette() {
            println!("{}", serde_json::to_string_pretty(palette)?);
        }
    } else if args.out.is_none() {
        if let Some(stylesheet) = publisher.stylesheet() {
            print!("{stylesheet}");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// hue / set
// ---------------------------------------------------------------------------

fn hue(action: HueAction, path: Option<&Path>) -> Result<()> {
    let path = resolve_settings_path(path)?;
    if !path.exists() {
        warn!(path = %path.display(), "settings file not found, nothing to change");
        return Ok(());
    }
    let mut settings = Settings::load(&path)?;
    if let Some(offset) = action.run(&mut settings) {
        settings.save(&path)?;
        info!(offset, "hue offset updated");
        println!("{offset}");
    }
    Ok(())
}

fn set(args: &SetArgs) -> Result<()> {
    let path: PathBuf = resolve_settings_path(args.path.as_deref())?;
    let mut settings = Settings::load(&path)
        .with_context(|| format!("loading settings from {}", path.display()))?;

    let mut state = ControllerState::load(&settings);
    if let Some(hue) = args.hue {
        state.set_hue(hue);
    }
    if let Some(v) = args.brightness {
        state.set_brightness(v);
    }
    if let Some(v) = args.saturation {
        state.set_saturation(v);
    }
    if let Some(v) = args.shade {
        state.set_shade(v);
    }

    state.write(&mut settings);
    settings.save(&path)?;
    info!(
        hue = state.hue(),
        brightness = state.brightness(),
        saturation = state.saturation(),
        shade = state.shade(),
        "controller values saved"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    use hue_palette::STYLE_ID;
    use pretty_assertions::assert_eq;

    const SETTINGS: &str = "\
window.GLOBAL_HUE_OFFSET = 190;
window.GLOBAL_HUE_DEFAULT = 100;
window.GLOBAL_BRIGHTNESS = 1.2;
";

    fn render_args(settings: &Path, out: Option<&Path>) -> RenderArgs {
        RenderArgs {
            settings: Some(settings.to_path_buf()),
            out: out.map(Path::to_path_buf),
            json: false,
            watch: None,
        }
    }

    /// Fails every write while `down` is set.
    struct Flaky {
        down: bool,
        styles: StyleRegistry,
    }

    impl StyleSink for Flaky {
        type Error = io::Error;

        fn upsert(&mut self, id: &str, css: &str) -> Result<(), Self::Error> {
            if self.down {
                return Err(io::Error::other("unavailable"));
            }
            self.styles.upsert(id, css).map_err(|never| match never {})
        }
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn missing_settings_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(&tmp.path().join("settings.js")).unwrap();
        assert_eq!(config, PaletteConfig::default());
    }

    #[test]
    fn settings_file_drives_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");
        fs::write(&path, SETTINGS).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.hue_offset, 190.0);
        assert_eq!(config.brightness, 1.2);
    }

    #[test]
    fn render_out_writes_stylesheet_file() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = tmp.path().join("settings.js");
        fs::write(&settings, SETTINGS).unwrap();
        let out = tmp.path().join("styles");

        render(&render_args(&settings, Some(&out))).unwrap();

        let css = fs::read_to_string(out.join(format!("{STYLE_ID}.css"))).unwrap();
        assert!(css.contains("--neon-color: rgba(255, 10, 214, 1);"));
        assert!(css.contains("filter: brightness(1.2);"));
    }

    #[test]
    fn render_without_settings_file_publishes_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("styles");

        render(&render_args(&tmp.path().join("absent.js"), Some(&out))).unwrap();

        let css = fs::read_to_string(out.join(format!("{STYLE_ID}.css"))).unwrap();
        assert!(css.contains("--neon-color: #0aff0a;"));
    }

    // ── watch ─────────────────────────────────────────────────────────────

    #[test]
    fn reload_skips_unchanged_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");
        fs::write(&path, SETTINGS).unwrap();

        let mut publisher = Publisher::new(StyleRegistry::new(), load_config(&path).unwrap());
        publisher.publish().unwrap();
        assert!(!reload(&mut publisher, &path));

        fs::write(&path, SETTINGS.replace("= 190;", "= 90;")).unwrap();
        assert!(reload(&mut publisher, &path));
        assert_eq!(publisher.config().hue_offset, 90.0);
        assert_eq!(publisher.sink().len(), 1);
    }

    #[test]
    fn reload_retries_after_sink_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");
        fs::write(&path, SETTINGS).unwrap();

        let sink = Flaky {
            down: false,
            styles: StyleRegistry::new(),
        };
        let mut publisher = Publisher::new(sink, load_config(&path).unwrap());
        publisher.publish().unwrap();

        fs::write(&path, SETTINGS.replace("= 190;", "= 90;")).unwrap();
        publisher.sink_mut().down = true;
        assert!(!reload(&mut publisher, &path));
        assert_eq!(publisher.config().hue_offset, 190.0);

        publisher.sink_mut().down = false;
        assert!(reload(&mut publisher, &path));
        assert_eq!(publisher.config().hue_offset, 90.0);
        assert_eq!(publisher.color("neon"), Some("rgba(10, 132, 255, 1)"));
    }

    // ── hue / set ─────────────────────────────────────────────────────────

    #[test]
    fn hue_on_missing_file_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");

        hue(HueAction::Add(15), Some(&path)).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn hue_steps_offset_in_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");
        fs::write(&path, SETTINGS).unwrap();

        hue(HueAction::Add(200), Some(&path)).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.integer("GLOBAL_HUE_OFFSET"), Some(30));

        hue(HueAction::Reset, Some(tmp.path())).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.integer("GLOBAL_HUE_OFFSET"), Some(100));
    }

    #[test]
    fn set_writes_controller_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.js");
        fs::write(&path, SETTINGS).unwrap();

        set(&SetArgs {
            hue: Some(45),
            brightness: None,
            saturation: Some(5.0),
            shade: Some(0.5),
            path: Some(path.clone()),
        })
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.integer("GLOBAL_HUE_OFFSET"), Some(45));
        assert_eq!(settings.integer("GLOBAL_HUE_DEFAULT"), Some(45));
        assert_eq!(settings.number("GLOBAL_BRIGHTNESS"), Some(1.2));
        assert_eq!(settings.number("GLOBAL_COLOR_SATURATION"), Some(2.0));
        assert_eq!(settings.number("GLOBAL_COLOR_BRIGHTNESS"), Some(0.5));
    }
}
