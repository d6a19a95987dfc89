//! # Shelfgen
//!
//! Manifest generator for static ebook library sites. Your filesystem is
//! the data source: a directory of PDF documents and a directory of cover
//! images become a `books.json` manifest of catalog records with publicly
//! addressable raw.githubusercontent.com URLs, which the library's static
//! front end fetches at page load.
//!
//! # Pipeline
//!
//! One stage, one pass:
//!
//! ```text
//! gen   Ebook Booklet/ + Cover Booklet/  →  books.json
//! ```
//!
//! The scanner lists both directories, pairs covers to documents by
//! basename, derives titles from filenames, and builds the raw URLs. The
//! manifest is rebuilt from scratch and overwritten on every run — there is
//! no incremental state to get stale.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists both directories and produces the manifest |
//! | [`covers`] | Cover pairing: exact basename match, then case-insensitive prefix fallback |
//! | [`naming`] | Filename → basename and display title |
//! | [`urls`] | Percent-encoded raw.githubusercontent.com URL construction |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — catalog report and summaries |
//!
//! # Design Decisions
//!
//! ## Bare-Array Manifest
//!
//! `books.json` is a JSON array, not an object wrapping one. The front end
//! fetches and iterates it directly, and keeping the on-disk shape identical
//! to the fetched shape means there is nothing to unwrap or version.
//!
//! ## Sorted Listing Order
//!
//! `fs::read_dir` returns entries in platform-dependent order. The scanner
//! sorts the listing before assigning ids, so the same library produces the
//! same manifest on every machine — a rerun only changes the file when the
//! library actually changed.
//!
//! ## Covers Are Optional, Documents Are Not
//!
//! A library without covers is still a library: a missing cover directory
//! (or an unmatched document) yields an explicit `null` cover, and the front
//! end renders a placeholder. A missing ebook directory means the tool is
//! pointed at the wrong place, and that is a hard error.

pub mod config;
pub mod covers;
pub mod naming;
pub mod output;
pub mod scan;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
