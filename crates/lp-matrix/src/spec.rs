//! Structured LP problem as entered through the matrix table.

use crate::builder::{MAX_CONSTRAINTS, MAX_VARIABLES};
use crate::error::{Cell, MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};

/// Constraint relation. `<` and `>` are accepted by the solver and read as
/// their non-strict forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Relation {
    #[default]
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
}

impl Relation {
    /// Selector order of the table's relation drop-down.
    pub const ALL: [Relation; 5] = [
        Relation::Le,
        Relation::Ge,
        Relation::Eq,
        Relation::Gt,
        Relation::Lt,
    ];

    /// Symbol shown in the table.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Le => "≤",
            Relation::Ge => "≥",
            Relation::Eq => "=",
            Relation::Lt => "<",
            Relation::Gt => ">",
        }
    }

    /// Operator in the LP grammar.
    pub fn operator(self) -> &'static str {
        match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
            Relation::Lt => "<",
            Relation::Gt => ">",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    Maximize,
    Minimize,
    TargetValue,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maximize, Goal::Minimize, Goal::TargetValue];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Maximize => "Maximize",
            Goal::Minimize => "Minimize",
            Goal::TargetValue => "Target value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRow {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub relation: Relation,
    pub rhs: f64,
}

/// Snapshot of the matrix table.
///
/// Every row carries exactly one coefficient per variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSpec {
    pub variable_names: Vec<String>,
    pub objective_coefficients: Vec<f64>,
    #[serde(default)]
    pub objective_goal: Goal,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub constraints: Vec<ConstraintRow>,
}

impl MatrixSpec {
    pub fn variable_count(&self) -> usize {
        self.variable_names.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Check shape, names, and the goal's target value.
    ///
    /// Specs built by [`crate::MatrixBuilder::serialize`] always pass; specs
    /// read from files may not.
    pub fn validate(&self) -> MatrixResult<()> {
        let expected = self.variable_count();
        if expected == 0 || expected > MAX_VARIABLES {
            return Err(MatrixError::InvalidCountValue {
                what: "variable",
                value: expected as i64,
            });
        }
        if self.constraint_count() > MAX_CONSTRAINTS {
            return Err(MatrixError::InvalidCountValue {
                what: "constraint",
                value: self.constraint_count() as i64,
            });
        }

        if self.objective_coefficients.len() != expected {
            return Err(MatrixError::Ragged {
                what: "objective".to_string(),
                len: self.objective_coefficients.len(),
                expected,
            });
        }

        for (row, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != expected {
                return Err(MatrixError::Ragged {
                    what: format!("constraint {}", row + 1),
                    len: constraint.coefficients.len(),
                    expected,
                });
            }
        }

        for (column, name) in self.variable_names.iter().enumerate() {
            if !is_identifier(name) {
                return Err(MatrixError::InvalidVariableName {
                    cell: Cell::VariableName { column },
                    name: name.clone(),
                });
            }
        }

        if self.objective_goal == Goal::TargetValue && self.target_value.is_none() {
            return Err(MatrixError::MissingTargetValue);
        }

        Ok(())
    }
}

/// True if `name` is usable as a variable in the LP grammar.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || "_[]{}.&#$%~'@^".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> MatrixSpec {
        MatrixSpec {
            variable_names: vec!["x".into(), "y".into()],
            objective_coefficients: vec![2.0, 3.0],
            objective_goal: Goal::Maximize,
            target_value: None,
            constraints: vec![
                ConstraintRow {
                    coefficients: vec![1.0, 0.0],
                    relation: Relation::Le,
                    rhs: 4.0,
                },
                ConstraintRow {
                    coefficients: vec![0.0, 1.0],
                    relation: Relation::Le,
                    rhs: 5.0,
                },
            ],
        }
    }

    #[test]
    fn valid_spec_passes() {
        assert_eq!(two_by_two().validate(), Ok(()));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let mut spec = two_by_two();
        spec.constraints[1].coefficients.pop();
        assert!(matches!(
            spec.validate(),
            Err(MatrixError::Ragged { len: 1, expected: 2, .. })
        ));
    }

    #[test]
    fn oversized_spec_is_rejected() {
        let mut spec = two_by_two();
        let row = spec.constraints[0].clone();
        spec.constraints = vec![row; MAX_CONSTRAINTS + 1];
        assert!(matches!(
            spec.validate(),
            Err(MatrixError::InvalidCountValue { what: "constraint", .. })
        ));
    }

    #[test]
    fn target_goal_needs_value() {
        let mut spec = two_by_two();
        spec.objective_goal = Goal::TargetValue;
        assert_eq!(spec.validate(), Err(MatrixError::MissingTargetValue));
        spec.target_value = Some(10.0);
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("x1"));
        assert!(is_identifier("_tmp"));
        assert!(is_identifier("flow[3]"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier(""));
    }
}
