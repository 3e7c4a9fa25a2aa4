//! Portal configuration
//!
//! Everything the form needs that is fixed per deployment: where the
//! admit card PDFs are hosted, the static image paths, the help desk
//! contact details and the reference year for the year dropdown.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::target::DownloadTarget;

/// Environment variable read at build time for the default file root
pub const STATIC_ROOT_ENV: &str = "ADMITCARD_STATIC_ROOT";

/// Deployment configuration for the admit card portal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Base URL under which `/files/<registration>.pdf` is hosted.
    /// Concatenated verbatim, so an empty root gives root-relative paths.
    pub static_file_root: String,
    /// Logo image URL
    pub logo_src: String,
    /// Banner image URL
    pub banner_src: String,
    /// Most recent year offered in the date of birth dropdown
    pub reference_year: u32,
    /// Number of years offered, counting down from `reference_year`.
    /// Capped at [`crate::options::MAX_YEAR_COUNT`] when rendered.
    pub year_count: u32,
    pub help_desk: HelpDesk,
}

/// Contact details shown in the help desk panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpDesk {
    pub email: String,
    pub phone: String,
    pub office_hours: String,
}

impl Default for HelpDesk {
    fn default() -> Self {
        Self {
            email: "support@uppb.in".to_string(),
            phone: "1800-123-4567".to_string(),
            office_hours: "9 AM - 5 PM".to_string(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            static_file_root: String::new(),
            logo_src: "/images/logo.png".to_string(),
            banner_src: "/images/banner-1.jpg".to_string(),
            reference_year: 2023,
            year_count: 100,
            help_desk: HelpDesk::default(),
        }
    }
}

impl PortalConfig {
    /// Defaults with `static_file_root` taken from `ADMITCARD_STATIC_ROOT`
    /// as it was when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self {
            static_file_root: option_env!("ADMITCARD_STATIC_ROOT")
                .unwrap_or_default()
                .to_string(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builder-style override for the file root
    pub fn with_static_file_root(mut self, root: impl Into<String>) -> Self {
        self.static_file_root = root.into();
        self
    }

    /// The download target for a registration number under this root
    pub fn download_target(&self, registration_number: &str) -> DownloadTarget {
        DownloadTarget::new(&self.static_file_root, registration_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.static_file_root, "");
        assert_eq!(config.reference_year, 2023);
        assert_eq!(config.year_count, 100);
        assert_eq!(config.help_desk.email, "support@uppb.in");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PortalConfig::from_json(r#"{"static_file_root":"https://cdn.example"}"#)
            .unwrap();
        assert_eq!(config.static_file_root, "https://cdn.example");
        assert_eq!(config.reference_year, 2023);
        assert_eq!(config.help_desk, HelpDesk::default());
    }

    #[test]
    fn test_nested_help_desk_override() {
        let config = PortalConfig::from_json(r#"{"help_desk":{"phone":"100"}}"#).unwrap();
        assert_eq!(config.help_desk.phone, "100");
        assert_eq!(config.help_desk.email, "support@uppb.in");
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = PortalConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid portal configuration"));
    }

    #[test]
    fn test_json_roundtrip_preserves_root() {
        let config = PortalConfig::default().with_static_file_root("/portal");
        let parsed = PortalConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_download_target_uses_root() {
        let config = PortalConfig::default().with_static_file_root("/portal");
        assert_eq!(
            config.download_target("UP12345").url(),
            "/portal/files/UP12345.pdf"
        );
    }
}
