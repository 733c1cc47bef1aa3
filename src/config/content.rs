//! Content source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::CONTENT_PATH;

/// Where the content document comes from.
///
/// When `base_url` is set the document is fetched from
/// `{base_url}/assets/content.json`; otherwise it is read from `path`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,

    pub base_url: Option<String>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.base_url {
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                Err(ValidationError::InvalidContentUrl)
            }
            Some(_) => Ok(()),
            None if self.path.as_os_str().is_empty() => {
                Err(ValidationError::MissingRequired("content.path"))
            }
            None => Ok(()),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.base_url.is_some()
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            base_url: None,
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(CONTENT_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_file() {
        let config = ContentConfig::default();
        assert_eq!(config.path, PathBuf::from("assets/content.json"));
        assert!(!config.is_remote());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_requires_http_scheme() {
        let config = ContentConfig {
            base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidContentUrl));

        let config = ContentConfig {
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_without_url_is_rejected() {
        let config = ContentConfig {
            path: PathBuf::new(),
            base_url: None,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("content.path"))
        );
    }
}
