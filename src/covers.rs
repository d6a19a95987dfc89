//! Cover image resolution.
//!
//! Covers live in their own directory and are paired to documents by
//! basename. An exact match over a fixed extension set is tried first, in
//! preference order; a case-insensitive prefix match is the fallback for
//! covers whose names carry extra suffixes (scan resolution, edition tags)
//! or differ in casing from the document.

use std::fs;
use std::io;
use std::path::Path;

/// Cover extensions tried for an exact basename match, in preference order.
pub const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// A cover directory listing, queried by document basename.
#[derive(Debug, Default)]
pub struct CoverSet {
    files: Vec<String>,
}

impl CoverSet {
    /// Wrap a listing of cover filenames.
    ///
    /// The listing is sorted so the prefix fallback picks the same cover on
    /// every platform.
    pub fn new(mut files: Vec<String>) -> Self {
        files.sort();
        Self { files }
    }

    /// Read a cover directory into a set.
    ///
    /// A missing directory yields an empty set — every document then
    /// records a null cover.
    pub fn from_dir(dir: &Path) -> io::Result<Self> {
        if !dir.is_dir() {
            return Ok(Self::default());
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(Self::new(files))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find the cover filename for a document basename.
    ///
    /// Tries `<basename>.<ext>` for each extension in [`COVER_EXTENSIONS`],
    /// then falls back to the first cover whose lowercased name starts with
    /// the lowercased basename.
    pub fn find(&self, basename: &str) -> Option<&str> {
        for ext in COVER_EXTENSIONS {
            let candidate = format!("{basename}.{ext}");
            if let Some(found) = self.files.iter().find(|f| **f == candidate) {
                return Some(found.as_str());
            }
        }
        let lower = basename.to_lowercase();
        self.files
            .iter()
            .find(|f| f.to_lowercase().starts_with(&lower))
            .map(String::as_str)
    }
}
