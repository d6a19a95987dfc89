//! CLI output formatting.
//!
//! Information-first: each book leads with its positional index and title;
//! pairing details are indented context lines. Format functions are pure
//! (no I/O) and return lines for testability; `print_*` wrappers write to
//! stdout.
//!
//! ```text
//! Books
//! 001 Community Policing Handbook
//!     Source: Ebook Booklet/Community_Policing_Handbook.pdf
//!     Cover: Community_Policing_Handbook.jpg
//! 002 Ethics Primer
//!     Source: Ebook Booklet/Ethics_Primer.pdf
//!     Cover: (none)
//!
//! 2 books, 1 without cover
//! ```

use crate::config::ShelfConfig;
use crate::scan::{Book, Manifest};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable name of a book's matched cover file.
///
/// The manifest stores the percent-encoded URL; the report shows the
/// decoded filename.
fn cover_name(book: &Book) -> Option<String> {
    let url = book.cover.as_deref()?;
    let tail = url.rsplit('/').next().unwrap_or(url);
    Some(
        urlencoding::decode(tail)
            .map(|name| name.into_owned())
            .unwrap_or_else(|_| tail.to_string()),
    )
}

/// Format the catalog report for a scanned manifest.
pub fn format_catalog(manifest: &Manifest, config: &ShelfConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Books".to_string());

    for (i, book) in manifest.books.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), book.title));
        lines.push(format!(
            "    Source: {}/{}",
            config.library.ebook_dir, book.filename
        ));
        match cover_name(book) {
            Some(name) => lines.push(format!("    Cover: {name}")),
            None => lines.push("    Cover: (none)".to_string()),
        }
    }

    lines.push(String::new());
    lines.push(summary_line(manifest));
    lines
}

fn summary_line(manifest: &Manifest) -> String {
    let total = manifest.books.len();
    let missing = manifest.missing_covers();
    if missing == 0 {
        format!("{total} books, all covers matched")
    } else {
        format!("{total} books, {missing} without cover")
    }
}

/// Print the catalog report to stdout.
pub fn print_catalog(manifest: &Manifest, config: &ShelfConfig) {
    for line in format_catalog(manifest, config) {
        println!("{}", line);
    }
}

/// Completion line for the `gen` command naming the written manifest.
pub fn format_gen_summary(manifest: &Manifest, output_path: &Path) -> String {
    format!(
        "Generated {} with {} entries",
        output_path.display(),
        manifest.books.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Book;

    fn book(title: &str, filename: &str, cover: Option<&str>) -> Book {
        Book {
            id: "1".to_string(),
            title: title.to_string(),
            author: "CSP Team".to_string(),
            pdf: format!("https://example.invalid/{filename}"),
            cover: cover.map(|c| format!("https://example.invalid/Cover%20Booklet/{c}")),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn catalog_lists_books_with_context_lines() {
        let manifest = Manifest {
            books: vec![
                book("Handbook", "Handbook.pdf", Some("Handbook.jpg")),
                book("Primer", "Primer.pdf", None),
            ],
        };
        let lines = format_catalog(&manifest, &ShelfConfig::default());

        assert_eq!(lines[0], "Books");
        assert_eq!(lines[1], "001 Handbook");
        assert_eq!(lines[2], "    Source: Ebook Booklet/Handbook.pdf");
        assert_eq!(lines[3], "    Cover: Handbook.jpg");
        assert_eq!(lines[4], "002 Primer");
        assert_eq!(lines[6], "    Cover: (none)");
    }

    #[test]
    fn cover_name_is_decoded_for_display() {
        let manifest = Manifest {
            books: vec![book("A", "A.pdf", Some("My%20Cover.jpg"))],
        };
        let lines = format_catalog(&manifest, &ShelfConfig::default());
        assert_eq!(lines[3], "    Cover: My Cover.jpg");
    }

    #[test]
    fn summary_counts_missing_covers() {
        let manifest = Manifest {
            books: vec![
                book("A", "A.pdf", Some("A.jpg")),
                book("B", "B.pdf", None),
            ],
        };
        let lines = format_catalog(&manifest, &ShelfConfig::default());
        assert_eq!(lines.last().unwrap(), "2 books, 1 without cover");
    }

    #[test]
    fn summary_when_all_covers_matched() {
        let manifest = Manifest {
            books: vec![book("A", "A.pdf", Some("A.jpg"))],
        };
        let lines = format_catalog(&manifest, &ShelfConfig::default());
        assert_eq!(lines.last().unwrap(), "1 books, all covers matched");
    }

    #[test]
    fn gen_summary_names_output_and_count() {
        let manifest = Manifest {
            books: vec![book("A", "A.pdf", None)],
        };
        let line = format_gen_summary(&manifest, Path::new("books.json"));
        assert_eq!(line, "Generated books.json with 1 entries");
    }
}
