//! Extension manifest parsing.
//!
//! Only the fields the packaging pipeline consumes are modeled; the rest
//! of `manifest.json` passes through untouched inside the archive.

use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// The subset of `manifest.json` the packer reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Extension version, copied into the update descriptor and the
    /// optional `joinVersion` file-name suffix.
    pub version: String,
    /// Update-check URL. Its final path segment names the descriptor
    /// file; its directory portion is the default download-location
    /// prefix. When absent, no descriptor is produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_url: Option<String>,
    /// Extension name (informational only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Manifest {
    /// Parse a `manifest.json` document.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Config`] if the bytes are not valid JSON or
    /// the `version` field is missing.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| PackError::Config(format!("invalid manifest.json: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_manifest() {
        let manifest = Manifest::parse(br#"{"version":"1.0"}"#).unwrap();
        assert_eq!(manifest.version, "1.0");
        assert!(manifest.update_url.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let manifest = Manifest::parse(
            br#"{"manifest_version":2,"name":"demo","version":"2.0.0",
                 "update_url":"https://example.com/update/upd.xml",
                 "permissions":["tabs"]}"#,
        )
        .unwrap();
        assert_eq!(manifest.version, "2.0.0");
        assert_eq!(
            manifest.update_url.as_deref(),
            Some("https://example.com/update/upd.xml")
        );
        assert_eq!(manifest.name.as_deref(), Some("demo"));
    }

    #[test]
    fn missing_version_is_a_config_error() {
        let err = Manifest::parse(br#"{"name":"demo"}"#).unwrap_err();
        assert!(matches!(err, PackError::Config(_)));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = Manifest::parse(b"not json").unwrap_err();
        assert!(matches!(err, PackError::Config(_)));
    }
}
