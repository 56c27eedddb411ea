//! lp-matrix: tabular LP input.
//!
//! The builder owns editable cell text and keeps every row as wide as the
//! variable count. `serialize` turns the cells into a [`MatrixSpec`], and
//! [`to_source_text`] renders a spec in the solver's LP grammar.

pub mod builder;
pub mod error;
pub mod render;
pub mod spec;

pub use builder::{
    DEFAULT_CONSTRAINTS, DEFAULT_VARIABLES, MAX_CONSTRAINTS, MAX_VARIABLES, MatrixBuilder, RowInput,
};
pub use error::{Cell, MatrixError, MatrixResult};
pub use render::to_source_text;
pub use spec::{ConstraintRow, Goal, MatrixSpec, Relation, is_identifier};
