use thiserror::Error;

pub type SolveResult<T> = Result<T, SolveError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// No response came back from the service.
    #[error("Unable to connect to the server: {message}")]
    Connection { message: String },

    /// The service answered, but not with the expected payload.
    #[error("Unexpected response from the server: {message}")]
    Protocol { message: String },

    /// The service answered with an error reported by the solver.
    #[error("Solver error: {message}")]
    Rejected { message: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid solve endpoint {url:?}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// The local HTTP client could not be set up (TLS backend, proxy
    /// settings).
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}
