//! lp-client: the remote solve service.
//!
//! One POST per run, no retries. Outcomes are classified into a success
//! carrying the solution text, a transport failure, a solver-reported
//! rejection, or a malformed payload.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;

pub use client::{HttpSolver, Solver};
pub use config::{DEV_ENDPOINT, ENDPOINT_ENV, PROD_ENDPOINT, SolverConfig};
pub use error::{ConfigError, SolveError, SolveResult};
pub use protocol::{SolveRequest, SolveResponse, parse_response};
