//! The table of supported formats.
//!
//! The registry maps command-line identifiers and file extensions to a
//! [`Format`]. It never inspects file contents: a file is decoded as whatever
//! its name says it is.

use std::path::Path;

use resmod_wiienv::{Format, Resource};
use tracing::debug;

use crate::{Error, Result};

/// A registered format and the extensions that select it.
#[derive(Debug, Clone)]
pub struct FormatEntry {
    pub format: Format,
    extensions: Vec<String>,
}

impl FormatEntry {
    fn new(format: Format) -> Self {
        Self {
            format,
            extensions: vec![format.extension().to_string()],
        }
    }

    pub fn id(&self) -> &'static str {
        self.format.id()
    }

    pub fn type_name(&self) -> &'static str {
        self.format.type_name()
    }

    /// Extensions mapped to this format, lowercase, without the dot.
    /// The conventional extension comes first.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// Lookup table from identifiers and extensions to formats.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<FormatEntry>,
}

impl Registry {
    /// Registry holding every built-in format with its conventional extension.
    pub fn builtin() -> Self {
        Self {
            entries: Format::ALL.into_iter().map(FormatEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[FormatEntry] {
        &self.entries
    }

    /// Find a format by identifier (`fog`, `light`, `lightmap`).
    pub fn by_id(&self, id: &str) -> Result<Format> {
        self.entries
            .iter()
            .find(|e| e.id().eq_ignore_ascii_case(id))
            .map(|e| e.format)
            .ok_or_else(|| Error::UnknownFormat(id.to_string()))
    }

    /// Find a format by file extension, with or without the leading dot.
    pub fn by_extension(&self, extension: &str) -> Result<Format> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.entries
            .iter()
            .find(|e| e.extensions.iter().any(|x| *x == extension))
            .map(|e| e.format)
            .ok_or(Error::UnknownFormat(extension))
    }

    /// Find a format from a file path's extension.
    pub fn by_path(&self, path: impl AsRef<Path>) -> Result<Format> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?;
        self.by_extension(extension)
    }

    /// Map an extra extension to an already registered format.
    pub fn register_extension(&mut self, id: &str, extension: &str) -> Result<()> {
        let format = self.by_id(id)?;
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();

        for entry in &mut self.entries {
            entry.extensions.retain(|x| *x != extension);
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.format == format) {
            debug!(format = %format, extension = %extension, "registered extension");
            entry.extensions.push(extension);
        }
        Ok(())
    }

    /// Decode a file, picking the format from its extension.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Resource> {
        let path = path.as_ref();
        let format = self.by_path(path)?;
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), format = %format, bytes = data.len(), "loading resource");
        Ok(format.load(&data)?)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
