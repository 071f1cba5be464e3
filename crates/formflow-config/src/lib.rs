//! Resource directory configuration
//!
//! A resource directory bundles everything one stack needs:
//!
//! - `config.json`: region and credentials (camelCase keys)
//! - `template.json`: the template body, forwarded opaquely to the
//!   provisioning service and never parsed here

pub mod error;

pub use error::*;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const TEMPLATE_FILE: &str = "template.json";

/// AWS settings read from `config.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsSettings {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// A directory holding the configuration for one stack.
#[derive(Debug, Clone)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> Result<AwsSettings> {
        let path = self.root.join(CONFIG_FILE);
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Invalid { path, source })
    }

    /// The raw template body. Read as text and left uninspected.
    pub fn template_body(&self) -> Result<String> {
        let path = self.root.join(TEMPLATE_FILE);
        std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dir_with(config: Option<&str>, template: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(config) = config {
            fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
        }
        if let Some(template) = template {
            fs::write(dir.path().join(TEMPLATE_FILE), template).unwrap();
        }
        dir
    }

    #[test]
    fn settings_parse_camel_case_keys() {
        let dir = dir_with(
            Some(
                r#"{"region":"eu-west-1","accessKeyId":"AKIAEXAMPLE","secretAccessKey":"secret"}"#,
            ),
            None,
        );

        let settings = ResourceDir::new(dir.path()).settings().unwrap();
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.access_key_id, "AKIAEXAMPLE");
        assert_eq!(settings.secret_access_key, "secret");
    }

    #[test]
    fn missing_config_names_the_path() {
        let dir = dir_with(None, None);

        let err = ResourceDir::new(dir.path()).settings().unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn malformed_config_is_an_invalid_error() {
        let dir = dir_with(Some(r#"{"region":"eu-west-1""#), None);

        let err = ResourceDir::new(dir.path()).settings().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn template_body_is_returned_verbatim() {
        let body = r#"{"Resources":{"Bucket":{"Type":"AWS::S3::Bucket"}}}"#;
        let dir = dir_with(None, Some(body));

        let read = ResourceDir::new(dir.path()).template_body().unwrap();
        assert_eq!(read, body);
    }
}
