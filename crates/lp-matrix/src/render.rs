//! Rendering a [`MatrixSpec`] in the solver's LP grammar.

use crate::spec::{Goal, MatrixSpec};
use std::fmt::Write;

/// Render `spec` as LP source text.
///
/// ```text
/// /* Objective function */
/// max: 2 x + 3 y;
///
/// /* Constraints */
/// c1: x <= 4;
/// c2: y <= 5;
/// ```
///
/// A target-value goal has no objective to optimize: it renders an empty
/// `min: ;` and pins the objective expression with a `target` row.
pub fn to_source_text(spec: &MatrixSpec) -> String {
    let names = &spec.variable_names;
    let objective = expression(&spec.objective_coefficients, names);

    let mut out = String::from("/* Objective function */\n");
    let mut rows = Vec::new();
    match spec.objective_goal {
        Goal::Maximize => {
            let _ = writeln!(out, "max: {objective};");
        }
        Goal::Minimize => {
            let _ = writeln!(out, "min: {objective};");
        }
        Goal::TargetValue => {
            out.push_str("min: ;\n");
            let target = spec.target_value.unwrap_or_default();
            rows.push(format!(
                "target: {} = {};",
                or_zero(objective, names),
                number(target)
            ));
        }
    }

    for (i, row) in spec.constraints.iter().enumerate() {
        let lhs = or_zero(expression(&row.coefficients, names), names);
        rows.push(format!(
            "c{}: {} {} {};",
            i + 1,
            lhs,
            row.relation.operator(),
            number(row.rhs)
        ));
    }

    if !rows.is_empty() {
        out.push_str("\n/* Constraints */\n");
        for row in rows {
            out.push_str(&row);
            out.push('\n');
        }
    }
    out
}

fn expression(coefficients: &[f64], names: &[String]) -> String {
    let mut out = String::new();
    for (&c, name) in coefficients.iter().zip(names) {
        if c == 0.0 {
            continue;
        }
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0.0 { " - " } else { " + " });
        }
        let magnitude = c.abs();
        if magnitude != 1.0 {
            let _ = write!(out, "{} ", number(magnitude));
        }
        out.push_str(name);
    }
    out
}

/// An all-zero row still needs a term on the left-hand side.
fn or_zero(expr: String, names: &[String]) -> String {
    if !expr.is_empty() {
        return expr;
    }
    match names.first() {
        Some(name) => format!("0 {name}"),
        None => "0".to_string(),
    }
}

fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ConstraintRow, Relation};

    fn spec(goal: Goal) -> MatrixSpec {
        MatrixSpec {
            variable_names: vec!["x".into(), "y".into()],
            objective_coefficients: vec![2.0, 3.0],
            objective_goal: goal,
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
    fn renders_maximize() {
        assert_eq!(
            to_source_text(&spec(Goal::Maximize)),
            "/* Objective function */\nmax: 2 x + 3 y;\n\n/* Constraints */\nc1: x <= 4;\nc2: y <= 5;\n"
        );
    }

    #[test]
    fn renders_signs_and_fractions() {
        let mut s = spec(Goal::Minimize);
        s.objective_coefficients = vec![-1.0, -2.5];
        s.constraints = vec![ConstraintRow {
            coefficients: vec![-3.0, 1.0],
            relation: Relation::Ge,
            rhs: -0.0,
        }];
        assert_eq!(
            to_source_text(&s),
            "/* Objective function */\nmin: -x - 2.5 y;\n\n/* Constraints */\nc1: -3 x + y >= 0;\n"
        );
    }

    #[test]
    fn renders_target_value_row() {
        let mut s = spec(Goal::TargetValue);
        s.target_value = Some(10.0);
        s.constraints.clear();
        assert_eq!(
            to_source_text(&s),
            "/* Objective function */\nmin: ;\n\n/* Constraints */\ntarget: 2 x + 3 y = 10;\n"
        );
    }

    #[test]
    fn zero_row_keeps_a_term() {
        let mut s = spec(Goal::Maximize);
        s.objective_coefficients = vec![0.0, 0.0];
        s.constraints[0].coefficients = vec![0.0, 0.0];
        s.constraints.truncate(1);
        assert_eq!(
            to_source_text(&s),
            "/* Objective function */\nmax: ;\n\n/* Constraints */\nc1: 0 x <= 4;\n"
        );
    }
}
