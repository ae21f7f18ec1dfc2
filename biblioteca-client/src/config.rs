//! Client configuration

use std::time::Duration;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "BIBLIOTECA_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without a trailing slash
    pub api_base_url: String,

    /// How long a toast stays visible
    pub toast_duration: Duration,

    /// Client-side request timeout; `None` leaves it to the transport
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_duration: Duration::from_secs(3),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `BIBLIOTECA_API_URL` when set
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_api_base_url(url),
            _ => Self::default(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.toast_duration, Duration::from_secs(3));
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = ClientConfig::default().with_api_base_url(" http://example.com/api/ ");
        assert_eq!(config.api_base_url, "http://example.com/api");
    }
}
