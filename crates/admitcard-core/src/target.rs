//! Download target derivation

use serde::Serialize;

/// Directory under the static root holding the admit cards
pub const FILES_DIR: &str = "files";

/// Where a candidate's admit card lives and what to save it as.
///
/// Derived from the registration number on every submission, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadTarget {
    filename: String,
    url: String,
}

impl DownloadTarget {
    /// `filename = <registration>.pdf`, `url = <root>/files/<filename>`.
    ///
    /// The registration number is taken as-is: no trimming, no charset
    /// checks, no percent-encoding.
    pub fn new(static_file_root: &str, registration_number: &str) -> Self {
        let filename = format!("{}.pdf", registration_number);
        let url = format!("{}/{}/{}", static_file_root, FILES_DIR, filename);
        Self { filename, url }
    }

    /// Suggested save-name for the download
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// URL probed and then downloaded
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_root_gives_root_relative_path() {
        let target = DownloadTarget::new("", "UP12345");
        assert_eq!(target.filename(), "UP12345.pdf");
        assert_eq!(target.url(), "/files/UP12345.pdf");
    }

    #[test]
    fn test_absolute_root() {
        let target = DownloadTarget::new("https://cdn.example.org/admit", "UP99999");
        assert_eq!(target.url(), "https://cdn.example.org/admit/files/UP99999.pdf");
    }

    #[test]
    fn test_root_is_not_normalized() {
        let target = DownloadTarget::new("/portal/", "A1");
        assert_eq!(target.url(), "/portal//files/A1.pdf");
    }

    #[test]
    fn test_registration_number_not_trimmed() {
        let target = DownloadTarget::new("", " UP1 ");
        assert_eq!(target.filename(), " UP1 .pdf");
    }
}
