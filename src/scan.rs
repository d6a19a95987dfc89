//! Directory scanning and manifest generation.
//!
//! The single stage of the shelfgen pipeline: reads the ebook and cover
//! directory listings, pairs covers to documents by basename, and produces
//! the [`Manifest`] that `gen` serializes to `books.json`.
//!
//! ## Directory Structure
//!
//! ```text
//! library/                         # Library root (--root)
//! ├── config.toml                  # Repository + library settings (optional)
//! ├── Ebook Booklet/               # Documents — one record per .pdf
//! │   ├── Community_Policing_Handbook.pdf
//! │   └── Ethics_Primer.pdf
//! ├── Cover Booklet/               # Covers — paired by basename
//! │   ├── Community_Policing_Handbook.jpg
//! │   └── Ethics_Primer.png
//! └── books.json                   # Generated manifest (overwritten)
//! ```
//!
//! ## Rules
//!
//! - A missing ebook directory is fatal; a missing cover directory just
//!   yields null covers.
//! - Only `.pdf` files (extension match is case-insensitive) become
//!   records; everything else in the ebook directory is ignored.
//! - The listing is sorted before ids are assigned, so record order and
//!   ids are stable across runs and machines.

use crate::config::ShelfConfig;
use crate::covers::CoverSet;
use crate::{naming, urls};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ebook directory not found: {0}")]
    MissingEbookDir(PathBuf),
}

/// Manifest output from the scan.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub books: Vec<Book>,
}

impl Manifest {
    /// Serialize to the on-disk form: a pretty-printed bare JSON array.
    ///
    /// The site front end fetches an array, not a wrapper object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.books)
    }

    /// Number of records without a matched cover.
    pub fn missing_covers(&self) -> usize {
        self.books.iter().filter(|b| b.cover.is_none()).count()
    }
}

/// One catalog entry, serialized verbatim into `books.json`.
///
/// Field order here is the field order in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Sequential 1-based identifier, assigned in record order.
    pub id: String,
    /// Display title derived from the filename.
    pub title: String,
    /// Fixed author label from config.
    pub author: String,
    /// Raw content URL of the document.
    pub pdf: String,
    /// Raw content URL of the matched cover; `null` when unmatched.
    pub cover: Option<String>,
    /// Original document filename.
    pub filename: String,
}

const DOCUMENT_EXTENSION: &str = "pdf";

/// Scan the library root into a manifest.
pub fn scan(root: &Path, config: &ShelfConfig) -> Result<Manifest, ScanError> {
    let ebook_dir = root.join(&config.library.ebook_dir);
    if !ebook_dir.is_dir() {
        return Err(ScanError::MissingEbookDir(ebook_dir));
    }

    let documents = collect_documents(&ebook_dir)?;
    let covers = CoverSet::from_dir(&root.join(&config.library.cover_dir))?;

    let books = documents
        .iter()
        .enumerate()
        .map(|(idx, filename)| build_book(idx, filename, &covers, config))
        .collect();

    Ok(Manifest { books })
}

/// List document filenames in the ebook directory, sorted.
///
/// `fs::read_dir` order is platform-dependent; sorting keeps ids and
/// manifest order stable.
fn collect_documents(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut documents: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| is_document(name))
        .collect();

    documents.sort();
    Ok(documents)
}

fn is_document(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}

fn build_book(idx: usize, filename: &str, covers: &CoverSet, config: &ShelfConfig) -> Book {
    let pdf = urls::raw_url(
        &config.repository,
        &format!("{}/{}", config.library.ebook_dir, filename),
    );

    let cover = covers.find(naming::basename(filename)).map(|cover_file| {
        urls::raw_url(
            &config.repository,
            &format!("{}/{}", config.library.cover_dir, cover_file),
        )
    });

    Book {
        id: (idx + 1).to_string(),
        title: naming::display_title(filename),
        author: config.library.author.clone(),
        pdf,
        cover,
        filename: filename.to_string(),
    }
}
