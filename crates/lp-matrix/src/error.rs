use thiserror::Error;

pub type MatrixResult<T> = Result<T, MatrixError>;

/// Location of a cell in the matrix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    VariableName { column: usize },
    Objective { column: usize },
    TargetValue,
    Coefficient { row: usize, column: usize },
    Rhs { row: usize },
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::VariableName { column } => write!(f, "variable name {}", column + 1),
            Cell::Objective { column } => write!(f, "objective coefficient {}", column + 1),
            Cell::TargetValue => f.write_str("target value"),
            Cell::Coefficient { row, column } => {
                write!(f, "constraint {}, coefficient {}", row + 1, column + 1)
            }
            Cell::Rhs { row } => write!(f, "constraint {}, right-hand side", row + 1),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Invalid {what} count: {value}")]
    InvalidCountValue { what: &'static str, value: i64 },

    #[error("Malformed matrix cell at {cell}: {value:?} is not a number")]
    MalformedMatrixCell { cell: Cell, value: String },

    #[error("Invalid variable name at {cell}: {name:?}")]
    InvalidVariableName { cell: Cell, name: String },

    #[error("Target value goal requires a target value")]
    MissingTargetValue,

    #[error("Ragged matrix: {what} has {len} entries, expected {expected}")]
    Ragged {
        what: String,
        len: usize,
        expected: usize,
    },
}
