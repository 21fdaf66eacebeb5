use std::time::Duration;

use jiff::{SignedDuration, SpanRelativeTo};

use crate::error::ServiceError;

pub const API_URL_ENV_VAR: &str = "GREENROUTE_API_URL";
pub const API_TIMEOUT_ENV_VAR: &str = "GREENROUTE_API_TIMEOUT";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const OPTIMIZE_PATH: &str = "/optimize";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `GREENROUTE_API_URL` and `GREENROUTE_API_TIMEOUT`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ServiceError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
            config.base_url = url;
        }

        if let Ok(timeout) = std::env::var(API_TIMEOUT_ENV_VAR) {
            config.timeout = parse_timeout(&timeout)?;
        }

        Ok(config)
    }

    pub fn optimize_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), OPTIMIZE_PATH)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Accepts "30s", "PT1M", "1m 30s" or a number of seconds.
pub fn parse_timeout(input: &str) -> Result<Duration, ServiceError> {
    let duration = input
        .parse::<SignedDuration>()
        .ok()
        .or_else(|| {
            input
                .parse::<jiff::Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
                .ok()
        })
        .or_else(|| input.parse::<i64>().ok().map(SignedDuration::from_secs));

    match duration {
        Some(duration) if duration.is_positive() => Duration::try_from(duration)
            .map_err(|e| ServiceError::Config(format!("invalid timeout {input:?}: {e}"))),
        _ => Err(ServiceError::Config(format!("invalid timeout {input:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_url() {
        assert_eq!(
            ServiceConfig::default().optimize_url(),
            "http://localhost:8000/optimize"
        );
        assert_eq!(
            ServiceConfig::new("https://routes.example.com/api/").optimize_url(),
            "https://routes.example.com/api/optimize"
        );
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout("PT1M").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_timeout("5").unwrap(), Duration::from_secs(5));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-5").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
