//! Shared test utilities for the shelfgen test suite.
//!
//! Builders create an isolated library under a temp directory; lookup
//! helpers panic with the available names on a miss so a failing test says
//! what the manifest actually contained.

use std::fs;
use tempfile::TempDir;

use crate::config::ShelfConfig;
use crate::scan::{Book, Manifest};

/// Stock config: default directory names, repository, and author label.
pub fn test_config() -> ShelfConfig {
    ShelfConfig::default()
}

/// Create a library root with the given ebook and cover filenames.
///
/// Files get placeholder content — the scanner reads directory listings,
/// never file bodies. Passing an empty cover slice leaves the cover
/// directory uncreated, which is the "missing cover directory" case.
pub fn setup_library(ebooks: &[&str], covers: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();

    let ebook_dir = tmp.path().join("Ebook Booklet");
    fs::create_dir_all(&ebook_dir).unwrap();
    for name in ebooks {
        fs::write(ebook_dir.join(name), b"%PDF-1.4 placeholder").unwrap();
    }

    if !covers.is_empty() {
        let cover_dir = tmp.path().join("Cover Booklet");
        fs::create_dir_all(&cover_dir).unwrap();
        for name in covers {
            fs::write(cover_dir.join(name), b"placeholder").unwrap();
        }
    }

    tmp
}

/// Find a book by title. Panics if not found.
pub fn find_book<'a>(manifest: &'a Manifest, title: &str) -> &'a Book {
    manifest
        .books
        .iter()
        .find(|b| b.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = manifest.books.iter().map(|b| b.title.as_str()).collect();
            panic!("book '{title}' not found. Available: {titles:?}")
        })
}

/// All book titles in manifest order.
pub fn book_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.books.iter().map(|b| b.title.as_str()).collect()
}
