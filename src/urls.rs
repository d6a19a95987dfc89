//! Raw content URL construction.
//!
//! GitHub serves repository files at
//! `https://raw.githubusercontent.com/<owner>/<repo>/<branch>/<path>`.
//! Path segments are percent-encoded individually so the `/` separators
//! survive; spaces in the library's directory names become `%20`.

use crate::config::RepositoryConfig;

/// Percent-encode a repository-relative path, segment by segment.
///
/// - `"Ebook Booklet/My Report.pdf"` → `"Ebook%20Booklet/My%20Report.pdf"`
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the raw content URL for a repository-relative file path.
pub fn raw_url(repository: &RepositoryConfig, path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        repository.owner,
        repository.repo,
        repository.branch,
        encode_path(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> RepositoryConfig {
        RepositoryConfig {
            owner: "policingcs-ethos".to_string(),
            repo: "Buku-Polisi".to_string(),
            branch: "main".to_string(),
        }
    }

    #[test]
    fn spaces_become_percent_twenty() {
        assert_eq!(
            encode_path("Ebook Booklet/My Report.pdf"),
            "Ebook%20Booklet/My%20Report.pdf"
        );
    }

    #[test]
    fn separators_survive_encoding() {
        assert_eq!(encode_path("a/b/c.pdf"), "a/b/c.pdf");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(encode_path("Q&A #1.pdf"), "Q%26A%20%231.pdf");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(encode_path("covers/handbook.jpg"), "covers/handbook.jpg");
    }

    #[test]
    fn raw_url_shape() {
        let url = raw_url(&repository(), "Ebook Booklet/Ethics_Primer.pdf");
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/policingcs-ethos/Buku-Polisi/main/Ebook%20Booklet/Ethics_Primer.pdf"
        );
    }

    #[test]
    fn raw_url_uses_configured_branch() {
        let mut repository = repository();
        repository.branch = "release".to_string();
        let url = raw_url(&repository, "a.pdf");
        assert!(url.contains("/Buku-Polisi/release/a.pdf"));
    }
}
