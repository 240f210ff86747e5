// Configuration for the platform API client

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";
const API_URL_ENV: &str = "ASESOR_API_URL";

/// Client configuration. The base URL is normalized so endpoint paths can be
/// appended directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = match base_url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => base_url,
        };
        Self { base_url }
    }

    /// Read the base URL from `ASESOR_API_URL`, falling back to the local
    /// development server.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Self::new(base_url).base_url;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3001/api/v1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/v1/");
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_with_base_url() {
        let config = ApiConfig::default().with_base_url("https://staging.example.com/");
        assert_eq!(config.base_url(), "https://staging.example.com");
    }
}
