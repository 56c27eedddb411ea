//! HTTP transport for solve requests.

use crate::config::SolverConfig;
use crate::error::{ConfigError, SolveError, SolveResult};
use crate::protocol::{SolveRequest, SolveResponse, parse_response};

/// Something that can answer a solve request.
///
/// Implementations block until an outcome is known; callers run them off
/// the UI thread.
pub trait Solver: Send + Sync {
    fn solve(&self, request: &SolveRequest) -> SolveResult<SolveResponse>;
}

/// Solver backed by the remote service.
///
/// Each call is a single POST with no retry. Timeouts are reqwest's
/// defaults.
#[derive(Clone)]
pub struct HttpSolver {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSolver {
    pub fn new(config: &SolverConfig) -> Result<Self, ConfigError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ConfigError::ClientBuild {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Solver for HttpSolver {
    fn solve(&self, request: &SolveRequest) -> SolveResult<SolveResponse> {
        tracing::info!(endpoint = %self.endpoint, bytes = request.content.len(), "solve request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                tracing::warn!(error = %e, "solve transport failure");
                SolveError::Connection {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| SolveError::Protocol {
            message: format!("failed to read response body: {e}"),
        })?;
        tracing::debug!(%status, bytes = body.len(), "solve response");

        match parse_response(&body) {
            Err(SolveError::Protocol { message }) if !status.is_success() => {
                Err(SolveError::Protocol {
                    message: format!("HTTP {status}: {message}"),
                })
            }
            outcome => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_configured_endpoint() {
        let config = SolverConfig::with_endpoint("http://127.0.0.1:5000").unwrap();
        let built: Result<HttpSolver, ConfigError> = HttpSolver::new(&config);
        assert_eq!(built.unwrap().endpoint(), "http://127.0.0.1:5000/");
    }

    #[test]
    fn client_build_failure_is_not_a_connection_error() {
        let err = ConfigError::ClientBuild {
            message: "no TLS backend".into(),
        };
        let text = err.to_string();
        assert!(text.starts_with("Failed to build HTTP client"), "{text}");
        assert!(!text.contains("Unable to connect"));
    }
}
