//! The publisher — derives, renders and upserts the theme in one pass.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::PaletteConfig;
use crate::palette::DerivedPalette;
use crate::sink::{StyleRegistry, StyleSink};
use crate::stylesheet::{STYLE_ID, Stylesheet};

/// A publish could not store its stylesheet.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to upsert style element '{id}'")]
    Sink {
        id: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// Owns the theming state: the current config, the last derived palette and
/// the sink the stylesheet goes to.
///
/// ```
/// use hue_palette::{PaletteConfig, Publisher, StyleRegistry, STYLE_ID};
///
/// let mut publisher = Publisher::new(StyleRegistry::new(), PaletteConfig::with_hue(190.0));
/// publisher.publish().unwrap();
/// publisher.republish(PaletteConfig::with_hue(90.0)).unwrap();
///
/// assert_eq!(publisher.sink().len(), 1);
/// assert!(publisher.sink().get(STYLE_ID).is_some());
/// ```
#[derive(Debug)]
pub struct Publisher<S = StyleRegistry> {
    sink: S,
    config: PaletteConfig,
    palette: Option<DerivedPalette>,
    stylesheet: Option<Stylesheet>,
}

impl<S: StyleSink> Publisher<S> {
    /// Create a publisher. Nothing is published until [`publish`](Self::publish).
    pub const fn new(sink: S, config: PaletteConfig) -> Self {
        Self {
            sink,
            config,
            palette: None,
            stylesheet: None,
        }
    }

    /// Derive the palette from the current config and upsert its stylesheet.
    ///
    /// Always recomputes from scratch and replaces the previously published
    /// state. If the sink fails, the previously published state is kept.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Sink`] if the stylesheet can't be stored.
    pub fn publish(&mut self) -> Result<&DerivedPalette, PublishError> {
        self.commit(self.config.clone())
    }

    /// Publish `config`, making it the current config once the sink accepts
    /// the stylesheet.
    ///
    /// Calling it any number of times leaves exactly one stylesheet in the
    /// sink, reflecting the last config that was stored successfully. On
    /// failure [`config`](Self::config) still reports the previous one.
    ///
    /// # Errors
    ///
    /// Same as [`publish`](Self::publish).
    pub fn republish(&mut self, config: PaletteConfig) -> Result<&DerivedPalette, PublishError> {
        self.commit(config)
    }

    /// Periodic-refresh entry point: republish only if `config` differs
    /// from what is already published.
    ///
    /// Returns `Ok(None)` when nothing needed publishing.
    ///
    /// # Errors
    ///
    /// Same as [`publish`](Self::publish).
    pub fn refresh(
        &mut self,
        config: PaletteConfig,
    ) -> Result<Option<&DerivedPalette>, PublishError> {
        if self.palette.is_some() && config == self.config {
            debug!("config unchanged, nothing to publish");
            return Ok(None);
        }
        self.commit(config).map(Some)
    }

    fn commit(&mut self, config: PaletteConfig) -> Result<&DerivedPalette, PublishError> {
        let palette = DerivedPalette::derive(&config);
        let stylesheet = Stylesheet::from_palette(&palette, config.brightness);

        self.sink
            .upsert(STYLE_ID, &stylesheet.to_css())
            .map_err(|e| PublishError::Sink {
                id: STYLE_ID,
                source: Box::new(e),
            })?;

        info!(
            hue = config.hue_offset,
            brightness = config.brightness,
            "theme published"
        );

        self.config = config;
        self.stylesheet = Some(stylesheet);
        Ok(self.palette.insert(palette))
    }

    // ── Published state ──────────────────────────────────────────────────

    /// Config of the last successful publish, or the initial config before
    /// one has succeeded.
    pub const fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Palette of the last successful publish.
    pub const fn palette(&self) -> Option<&DerivedPalette> {
        self.palette.as_ref()
    }

    /// Stylesheet of the last successful publish.
    pub const fn stylesheet(&self) -> Option<&Stylesheet> {
        self.stylesheet.as_ref()
    }

    /// Published color for a semantic name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.palette.as_ref()?.get(name)
    }

    /// Published `(global name, color)` pairs. Empty before the first publish.
    pub fn globals(&self) -> impl Iterator<Item = (String, &str)> {
        self.palette.iter().flat_map(DerivedPalette::globals)
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
