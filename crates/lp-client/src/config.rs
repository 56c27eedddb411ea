//! Which solve service to talk to.

use crate::error::ConfigError;
use reqwest::Url;

pub const DEV_ENDPOINT: &str = "http://localhost:5000/";
pub const PROD_ENDPOINT: &str = "https://peaceful-zion-91234.herokuapp.com/";

/// Environment variable that overrides the built-in endpoint.
pub const ENDPOINT_ENV: &str = "LP_SOLVE_API";

#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    endpoint: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::built_in()
    }
}

impl SolverConfig {
    /// Endpoint selected at build time by the `production` feature.
    pub fn built_in() -> Self {
        let endpoint = if cfg!(feature = "production") {
            PROD_ENDPOINT
        } else {
            DEV_ENDPOINT
        };
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    /// Explicit endpoint; must be an absolute http(s) URL.
    pub fn with_endpoint(url: &str) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidEndpoint {
            url: url.to_string(),
            message,
        };
        let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
        }
        Ok(Self {
            endpoint: parsed.to_string(),
        })
    }

    /// `override_url` if given and non-blank, else the built-in endpoint.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, ConfigError> {
        match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::with_endpoint(url),
            _ => Ok(Self::built_in()),
        }
    }

    /// Built-in endpoint, overridden by `LP_SOLVE_API` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::resolve(std::env::var(ENDPOINT_ENV).ok().as_deref())?;
        tracing::info!(endpoint = %config.endpoint, "solve endpoint");
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dev_endpoint() {
        if !cfg!(feature = "production") {
            assert_eq!(SolverConfig::default().endpoint(), DEV_ENDPOINT);
        }
    }

    #[test]
    fn blank_override_falls_back() {
        assert_eq!(
            SolverConfig::resolve(Some("  ")).unwrap(),
            SolverConfig::built_in()
        );
        assert_eq!(SolverConfig::resolve(None).unwrap(), SolverConfig::built_in());
    }

    #[test]
    fn override_is_validated() {
        let config = SolverConfig::resolve(Some("http://127.0.0.1:8080")).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/");
        assert!(SolverConfig::with_endpoint("not a url").is_err());
        assert!(SolverConfig::with_endpoint("ftp://example.com/").is_err());
    }
}
