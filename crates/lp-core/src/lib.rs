//! lp-core: view state for the lp-online front end.
//!
//! Contains:
//! - view (the tab identities shown in the shared display area)
//! - buffer (per-view text slots plus the downloadable report)
//! - controller (current view, shared text area, visibility rules)
//! - log (append-only user-visible event log)

pub mod buffer;
pub mod controller;
pub mod log;
pub mod view;

pub use buffer::BufferStore;
pub use controller::{Surface, TextArea, ViewController};
pub use log::{EventLog, LogEntry};
pub use view::View;
