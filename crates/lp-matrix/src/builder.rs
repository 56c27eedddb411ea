//! Editable matrix table.
//!
//! Cells hold raw text exactly as typed. Structural changes (variable or
//! constraint count) add or drop cells at the end so that the table never
//! has ragged rows; callers only get slice access to cells and cannot
//! change a row's width.

use crate::error::{Cell, MatrixError, MatrixResult};
use crate::spec::{ConstraintRow, Goal, MatrixSpec, Relation, is_identifier};

pub const DEFAULT_VARIABLES: usize = 1;
pub const DEFAULT_CONSTRAINTS: usize = 2;

/// Largest accepted variable count.
pub const MAX_VARIABLES: usize = 64;
/// Largest accepted constraint count.
pub const MAX_CONSTRAINTS: usize = 256;

/// One constraint row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RowInput {
    cells: Vec<String>,
    relation: Relation,
    rhs: String,
}

impl RowInput {
    fn empty(width: usize) -> Self {
        Self {
            cells: vec![String::new(); width],
            relation: Relation::default(),
            rhs: String::new(),
        }
    }

    fn resized(mut self, width: usize) -> Self {
        self.cells.resize(width, String::new());
        self
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [String] {
        &mut self.cells
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn relation_mut(&mut self) -> &mut Relation {
        &mut self.relation
    }

    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    pub fn rhs_mut(&mut self) -> &mut String {
        &mut self.rhs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBuilder {
    variable_count: usize,
    constraint_count: usize,
    variable_names: Vec<String>,
    objective: Vec<String>,
    goal: Goal,
    target_value: String,
    rows: Vec<RowInput>,
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLES, DEFAULT_CONSTRAINTS)
    }
}

impl MatrixBuilder {
    /// Empty table. `variables` is clamped to at least one.
    pub fn new(variables: usize, constraints: usize) -> Self {
        let variables = variables.max(1);
        Self {
            variable_count: variables,
            constraint_count: constraints,
            variable_names: vec![String::new(); variables],
            objective: vec![String::new(); variables],
            goal: Goal::default(),
            target_value: String::new(),
            rows: (0..constraints).map(|_| RowInput::empty(variables)).collect(),
        }
    }

    /// Fill a table from a validated spec.
    pub fn from_spec(spec: &MatrixSpec) -> MatrixResult<Self> {
        spec.validate()?;
        let builder = Self {
            variable_count: spec.variable_count(),
            constraint_count: spec.constraint_count(),
            variable_names: spec.variable_names.clone(),
            objective: spec.objective_coefficients.iter().map(f64::to_string).collect(),
            goal: spec.objective_goal,
            target_value: spec.target_value.map(|v| v.to_string()).unwrap_or_default(),
            rows: spec
                .constraints
                .iter()
                .map(|row| RowInput {
                    cells: row.coefficients.iter().map(f64::to_string).collect(),
                    relation: row.relation,
                    rhs: row.rhs.to_string(),
                })
                .collect(),
        };
        builder.debug_check();
        Ok(builder)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn constraint_count(&self) -> usize {
        self.constraint_count
    }

    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    pub fn variable_names_mut(&mut self) -> &mut [String] {
        &mut self.variable_names
    }

    pub fn objective(&self) -> &[String] {
        &self.objective
    }

    pub fn objective_mut(&mut self) -> &mut [String] {
        &mut self.objective
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn goal_mut(&mut self) -> &mut Goal {
        &mut self.goal
    }

    pub fn target_value_mut(&mut self) -> &mut String {
        &mut self.target_value
    }

    pub fn rows(&self) -> &[RowInput] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [RowInput] {
        &mut self.rows
    }

    /// Grow or shrink the constraint rows to `count`.
    ///
    /// New rows are appended empty; surplus rows are dropped from the end,
    /// most recent first. Counts outside `0..=MAX_CONSTRAINTS` are rejected
    /// without touching the table. Returns the new count.
    pub fn set_constraint_count(&mut self, count: i64) -> MatrixResult<usize> {
        let count = match usize::try_from(count) {
            Ok(count) if count <= MAX_CONSTRAINTS => count,
            _ => {
                return Err(MatrixError::InvalidCountValue {
                    what: "constraint",
                    value: count,
                });
            }
        };

        let previous = self.constraint_count;
        if count > previous {
            let width = self.variable_count;
            self.rows
                .extend((previous..count).map(|_| RowInput::empty(width)));
        } else {
            self.rows.truncate(count);
        }
        self.constraint_count = count;

        tracing::debug!(previous, count, "constraint count changed");
        self.debug_check();
        Ok(count)
    }

    /// Resize every row, the name row, and the objective row to `count`
    /// cells, appending empty cells or trimming from the end. Counts outside
    /// `1..=MAX_VARIABLES` are rejected.
    pub fn set_variable_count(&mut self, count: i64) -> MatrixResult<usize> {
        let count = match usize::try_from(count) {
            Ok(count) if (1..=MAX_VARIABLES).contains(&count) => count,
            _ => {
                return Err(MatrixError::InvalidCountValue {
                    what: "variable",
                    value: count,
                });
            }
        };

        let previous = self.variable_count;
        self.variable_names.resize(count, String::new());
        self.objective.resize(count, String::new());
        self.rows = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| row.resized(count))
            .collect();
        self.variable_count = count;

        tracing::debug!(previous, count, "variable count changed");
        self.debug_check();
        Ok(count)
    }

    /// True when row count and every row width match the bookkeeping.
    pub fn is_consistent(&self) -> bool {
        self.rows.len() == self.constraint_count
            && self.variable_names.len() == self.variable_count
            && self.objective.len() == self.variable_count
            && self
                .rows
                .iter()
                .all(|row| row.cells.len() == self.variable_count)
    }

    fn debug_check(&self) {
        debug_assert!(self.is_consistent(), "matrix table is ragged: {self:?}");
    }

    /// Read every cell into a spec.
    ///
    /// Empty numeric cells count as zero and empty names default to
    /// `x1..xn`.
    pub fn serialize(&self) -> MatrixResult<MatrixSpec> {
        let variable_names = self
            .variable_names
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let name = name.trim();
                if name.is_empty() {
                    Ok(format!("x{}", column + 1))
                } else if is_identifier(name) {
                    Ok(name.to_string())
                } else {
                    Err(MatrixError::InvalidVariableName {
                        cell: Cell::VariableName { column },
                        name: name.to_string(),
                    })
                }
            })
            .collect::<MatrixResult<Vec<_>>>()?;

        let objective_coefficients = self
            .objective
            .iter()
            .enumerate()
            .map(|(column, raw)| parse_cell(raw, Cell::Objective { column }))
            .collect::<MatrixResult<Vec<_>>>()?;

        let target_value = match self.goal {
            Goal::TargetValue => Some(parse_cell(&self.target_value, Cell::TargetValue)?),
            Goal::Maximize | Goal::Minimize => None,
        };

        let mut constraints = Vec::with_capacity(self.rows.len());
        for (row, input) in self.rows.iter().enumerate() {
            let coefficients = input
                .cells
                .iter()
                .enumerate()
                .map(|(column, raw)| parse_cell(raw, Cell::Coefficient { row, column }))
                .collect::<MatrixResult<Vec<_>>>()?;
            constraints.push(ConstraintRow {
                coefficients,
                relation: input.relation,
                rhs: parse_cell(&input.rhs, Cell::Rhs { row })?,
            });
        }

        Ok(MatrixSpec {
            variable_names,
            objective_coefficients,
            objective_goal: self.goal,
            target_value,
            constraints,
        })
    }
}

fn parse_cell(raw: &str, cell: Cell) -> MatrixResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MatrixError::MalformedMatrixCell {
            cell,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let m = MatrixBuilder::default();
        assert_eq!(m.variable_count(), 1);
        assert_eq!(m.constraint_count(), 2);
        assert_eq!(m.rows().len(), 2);
        assert!(m.is_consistent());
    }

    #[test]
    fn grow_constraints() {
        let mut m = MatrixBuilder::default();
        assert_eq!(m.set_constraint_count(5), Ok(5));
        assert_eq!(m.rows().len(), 5);
        assert!(m.rows().iter().all(|r| r.cells().len() == 1));
    }

    #[test]
    fn shrink_removes_newest_rows_first() {
        let mut m = MatrixBuilder::default();
        m.set_constraint_count(3).unwrap();
        *m.rows_mut()[0].rhs_mut() = "first".into();
        *m.rows_mut()[2].rhs_mut() = "third".into();
        m.set_constraint_count(1).unwrap();
        assert_eq!(m.rows().len(), 1);
        assert_eq!(m.rows()[0].rhs(), "first");
    }

    #[test]
    fn negative_count_is_rejected() {
        let mut m = MatrixBuilder::default();
        let before = m.clone();
        assert!(matches!(
            m.set_constraint_count(-1),
            Err(MatrixError::InvalidCountValue { value: -1, .. })
        ));
        assert!(m.set_variable_count(0).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn oversized_count_is_rejected() {
        let mut m = MatrixBuilder::default();
        let before = m.clone();
        assert!(matches!(
            m.set_constraint_count(i64::MAX),
            Err(MatrixError::InvalidCountValue { what: "constraint", .. })
        ));
        assert!(matches!(
            m.set_variable_count(i64::MAX),
            Err(MatrixError::InvalidCountValue { what: "variable", .. })
        ));
        assert!(m.set_constraint_count(MAX_CONSTRAINTS as i64 + 1).is_err());
        assert!(m.set_variable_count(MAX_VARIABLES as i64 + 1).is_err());
        assert_eq!(m, before);

        assert_eq!(m.set_constraint_count(MAX_CONSTRAINTS as i64), Ok(MAX_CONSTRAINTS));
        assert_eq!(m.set_variable_count(MAX_VARIABLES as i64), Ok(MAX_VARIABLES));
        assert!(m.is_consistent());
    }

    #[test]
    fn variable_resize_keeps_existing_cells() {
        let mut m = MatrixBuilder::default();
        m.rows_mut()[0].cells_mut()[0] = "7".into();
        m.set_variable_count(3).unwrap();
        assert_eq!(m.rows()[0].cells(), &["7", "", ""]);
        assert_eq!(m.objective().len(), 3);
        m.set_variable_count(1).unwrap();
        assert_eq!(m.rows()[0].cells(), &["7"]);
        assert!(m.is_consistent());
    }

    #[test]
    fn serialize_reads_cells() {
        let mut m = MatrixBuilder::new(2, 1);
        m.variable_names_mut()[0] = "x".into();
        m.objective_mut().clone_from_slice(&["2".to_string(), "3".to_string()]);
        m.rows_mut()[0].cells_mut()[0] = "1".into();
        *m.rows_mut()[0].relation_mut() = Relation::Ge;
        *m.rows_mut()[0].rhs_mut() = " 4 ".into();

        let spec = m.serialize().unwrap();
        assert_eq!(spec.variable_names, vec!["x", "x2"]);
        assert_eq!(spec.objective_coefficients, vec![2.0, 3.0]);
        assert_eq!(spec.constraints[0].coefficients, vec![1.0, 0.0]);
        assert_eq!(spec.constraints[0].relation, Relation::Ge);
        assert_eq!(spec.constraints[0].rhs, 4.0);
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn serialize_reports_malformed_cell() {
        let mut m = MatrixBuilder::new(2, 2);
        m.rows_mut()[1].cells_mut()[1] = "abc".into();
        assert_eq!(
            m.serialize(),
            Err(MatrixError::MalformedMatrixCell {
                cell: Cell::Coefficient { row: 1, column: 1 },
                value: "abc".into(),
            })
        );
    }

    #[test]
    fn serialize_rejects_bad_name() {
        let mut m = MatrixBuilder::default();
        m.variable_names_mut()[0] = "2x".into();
        assert!(matches!(
            m.serialize(),
            Err(MatrixError::InvalidVariableName { .. })
        ));
    }

    #[test]
    fn from_spec_restores_table() {
        let mut m = MatrixBuilder::new(2, 1);
        m.objective_mut()[1] = "1.5".into();
        *m.rows_mut()[0].rhs_mut() = "9".into();
        let spec = m.serialize().unwrap();
        let loaded = MatrixBuilder::from_spec(&spec).unwrap();
        assert_eq!(loaded.serialize().unwrap(), spec);
    }
}
