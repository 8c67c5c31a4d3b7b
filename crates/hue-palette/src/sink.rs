//! Style sinks — where a published stylesheet ends up.
//!
//! A sink holds style definitions keyed by a stable id. `upsert` replaces
//! whatever is stored under the id, so a sink never holds two definitions
//! for the same id no matter how often the publisher runs.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// Destination for generated style definitions.
pub trait StyleSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store `css` under `id`, replacing any previous content for that id.
    ///
    /// # Errors
    ///
    /// Returns the sink's error type if the definition can't be stored.
    fn upsert(&mut self, id: &str, css: &str) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// StyleRegistry
// ---------------------------------------------------------------------------

/// In-memory style elements, keyed by id — a model of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    elements: BTreeMap<String, String>,
}

impl StyleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the element with `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Number of style elements present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl StyleSink for StyleRegistry {
    type Error = Infallible;

    fn upsert(&mut self, id: &str, css: &str) -> Result<(), Self::Error> {
        self.elements.insert(id.to_owned(), css.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CssFileSink
// ---------------------------------------------------------------------------

/// Writes each definition to `<dir>/<id>.css`.
///
/// The file is written next to its target and renamed into place, so a
/// reader polling the file sees either the old or the new stylesheet and
/// never a partial one.
#[derive(Debug, Clone)]
pub struct CssFileSink {
    dir: PathBuf,
}

impl CssFileSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the definition with `id` is written to.
    #[must_use]
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.css"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StyleSink for CssFileSink {
    type Error = io::Error;

    fn upsert(&mut self, id: &str, css: &str) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path_for(id);
        let staging = self.dir.join(format!(".{id}.css.tmp"));
        if let Err(e) = fs::write(&staging, css).and_then(|()| fs::rename(&staging, &target)) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        info!(path = %target.display(), bytes = css.len(), "stylesheet written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_replaces_by_id() {
        let mut reg = StyleRegistry::new();
        reg.upsert("theme", "a {}").unwrap();
        reg.upsert("theme", "b {}").unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("theme"), Some("b {}"));
    }

    #[test]
    fn registry_keeps_distinct_ids() {
        let mut reg = StyleRegistry::new();
        reg.upsert("one", "x").unwrap();
        reg.upsert("two", "y").unwrap();
        assert_eq!(reg.len(), 2);
        assert!(reg.get("three").is_none());
    }

    #[test]
    fn file_sink_overwrites_single_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = CssFileSink::new(tmp.path().join("styles"));
        sink.upsert("theme", "first").unwrap();
        sink.upsert("theme", "second").unwrap();

        let path = sink.path_for("theme");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        let files: Vec<_> = fs::read_dir(sink.dir()).unwrap().collect();
        assert_eq!(files.len(), 1, "staging file left behind");
    }

    #[test]
    fn file_sink_failed_rename_removes_staging_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = CssFileSink::new(tmp.path());
        // A non-empty directory where the stylesheet should go can't be
        // replaced by a file.
        let target = sink.path_for("theme");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        assert!(sink.upsert("theme", "body {}").is_err());

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("theme.css")]);
    }
}
