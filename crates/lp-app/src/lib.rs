//! Shared application layer for lp-online.
//!
//! Both the desktop shell and the CLI drive the same [`SessionState`]:
//! they turn user actions into [`Event`]s and carry out the [`Effect`]s the
//! session hands back (network solves, file saves).

pub mod error;
pub mod files;
pub mod session;

pub use error::{AppError, AppResult};
pub use files::{
    REPORT_EXPORT, SOURCE_EXPORT, decode_source, load_matrix_spec, read_source_file,
    save_matrix_spec, write_export,
};
pub use session::{Effect, Event, RequestId, SessionState};

// Re-export the component crates so shells depend on one thing.
pub use lp_client;
pub use lp_core;
pub use lp_matrix;
