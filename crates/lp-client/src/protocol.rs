//! Wire format of the solve service.
//!
//! Request: `{"content": "<LP source>"}`.
//! Success: `{"result": {"solution": "<text>", "report": {...}}}` where the
//! optional `report` maps lp_solve section titles to their text.
//! Solver failure: `{"error": "...", "lp_solve_error": "..."}`.

use crate::error::{SolveError, SolveResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report section holding the constraint activity table.
pub const CONSTRAINTS_SECTION: &str = "Actual values of the constraints";

/// Report sections that make up the sensitivity view, in display order.
pub const SENSITIVITY_SECTIONS: [&str; 2] = ["Dual value", "Objective function limits"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub content: String,
}

impl SolveRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolveResponse {
    pub solution: String,
    pub report: BTreeMap<String, String>,
}

impl SolveResponse {
    pub fn section(&self, title: &str) -> Option<&str> {
        self.report.get(title).map(String::as_str)
    }

    pub fn constraints_text(&self) -> Option<&str> {
        self.section(CONSTRAINTS_SECTION)
    }

    /// Sensitivity sections present in the report, blank-line separated.
    pub fn sensitivity_text(&self) -> Option<String> {
        let parts: Vec<&str> = SENSITIVITY_SECTIONS
            .iter()
            .filter_map(|title| self.section(title))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("\n\n"))
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<ResultBody>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    lp_solve_error: Option<String>,
}

#[derive(Deserialize)]
struct ResultBody {
    #[serde(default)]
    solution: Option<String>,
    #[serde(default)]
    report: Option<serde_json::Value>,
}

/// Classify a response body.
///
/// A solution wins over any error fields. Without one, a non-empty solver
/// error is a rejection and anything else is a protocol error.
pub fn parse_response(body: &str) -> SolveResult<SolveResponse> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| SolveError::Protocol {
        message: format!("invalid JSON: {e}"),
    })?;

    if let Some(ResultBody {
        solution: Some(solution),
        report,
    }) = envelope.result
    {
        return Ok(SolveResponse {
            solution,
            report: report.map(string_sections).unwrap_or_default(),
        });
    }

    let solver_error = [envelope.lp_solve_error, envelope.error]
        .into_iter()
        .flatten()
        .find(|message| !message.trim().is_empty());
    if let Some(message) = solver_error {
        return Err(SolveError::Rejected { message });
    }

    Err(SolveError::Protocol {
        message: "missing result.solution".to_string(),
    })
}

fn string_sections(value: serde_json::Value) -> BTreeMap<String, String> {
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .filter_map(|(title, text)| match text {
                serde_json::Value::String(text) => Some((title, text)),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}
