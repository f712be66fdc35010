//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path of the books listing on the BookTrack API
pub const BOOKS_PATH: &str = "/api/books";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Books API configuration
    pub api: ApiConfig,
    /// Main window configuration
    pub window: WindowConfig,
}

/// Books API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the BookTrack API
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the books listing
    pub fn books_url(&self) -> Result<String> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::Invalid {
                message: "api.base_url is empty".to_string(),
            });
        }
        Ok(format!("{base}{BOOKS_PATH}"))
    }
}

/// Main window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in logical pixels
    pub width: f32,
    /// Initial height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_books_url() {
        let api = ApiConfig::default();
        assert_eq!(
            api.books_url().expect("valid url"),
            "http://127.0.0.1:8000/api/books"
        );
    }

    #[test]
    fn test_books_url_slashes() {
        let api = ApiConfig {
            base_url: "https://books.example.com/".to_string(),
        };
        assert_eq!(
            api.books_url().expect("valid url"),
            "https://books.example.com/api/books"
        );
    }

    #[test]
    fn test_empty_base_url_is_invalid() {
        let api = ApiConfig {
            base_url: "  ".to_string(),
        };
        assert!(matches!(api.books_url(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:9000"
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_books_path_is_not_configurable() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:9000"
            books_path = "/v2/everything"
            "#,
        )
        .expect("unknown keys are ignored");
        assert_eq!(
            config.api.books_url().expect("valid url"),
            "http://10.0.0.5:9000/api/books"
        );
    }
}
