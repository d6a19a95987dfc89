//! Filename parsing for the library's document naming convention.
//!
//! Document filenames carry their display title directly, with underscores
//! standing in for spaces (`Community_Policing_Handbook.pdf` → "Community
//! Policing Handbook"). This module is the single place that turns a
//! filename into its basename and display title; both the scanner and the
//! cover matcher go through it.

use std::path::Path;

/// Filename without its final extension.
///
/// - `"handbook.pdf"` → `"handbook"`
/// - `"ethics.v2.pdf"` → `"ethics.v2"`
/// - `"README"` → `"README"`
pub fn basename(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}

/// Display title derived from a document filename.
///
/// Strips the extension, converts underscores to spaces, collapses runs of
/// whitespace, and trims:
/// - `"Community_Policing_Handbook.pdf"` → `"Community Policing Handbook"`
/// - `"Ethics__Primer.pdf"` → `"Ethics Primer"`
/// - `"_Padded_Name_.pdf"` → `"Padded Name"`
pub fn display_title(filename: &str) -> String {
    basename(filename)
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
