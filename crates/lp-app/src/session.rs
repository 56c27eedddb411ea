//! Session state and the event reducer.
//!
//! All front-end state lives in one [`SessionState`]. Shells feed it
//! [`Event`]s and carry out the returned [`Effect`]s; the session itself
//! never touches the network or the file system.
//!
//! Runs are not deduplicated. Each `RunRequested` yields its own `Solve`
//! effect, and completions are applied in arrival order, so when two runs
//! overlap the later response owns the Objective slot.

use crate::files::{REPORT_EXPORT, SOURCE_EXPORT, decode_source};
use lp_client::{SolveError, SolveRequest, SolveResponse, SolveResult};
use lp_core::{BufferStore, EventLog, View, ViewController};
use lp_matrix::{MatrixBuilder, MatrixSpec, to_source_text};
use uuid::Uuid;

/// Identity of one run request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    TabSelected(View),
    TextEdited(String),
    ConstraintCountChanged(i64),
    VariableCountChanged(i64),
    MatrixParseRequested,
    MatrixReset,
    MatrixFileLoaded {
        name: String,
        result: Result<MatrixSpec, String>,
    },
    RunRequested,
    RunFinished {
        request: RequestId,
        outcome: SolveResult<SolveResponse>,
    },
    RunCancelled(RequestId),
    SourceFileLoaded {
        name: String,
        result: Result<Vec<u8>, String>,
    },
    SourceSaveRequested,
    ReportSaveRequested,
    ExportFinished {
        name: String,
        result: Result<(), String>,
    },
}

/// Work the shell must carry out on the session's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// POST `body` to the solve service, then report back with
    /// [`Event::RunFinished`] carrying the same `request`.
    Solve {
        request: RequestId,
        body: SolveRequest,
    },
    /// Hand `contents` to the user as a file named `name`, then report
    /// back with [`Event::ExportFinished`].
    SaveFile {
        name: &'static str,
        contents: String,
    },
}

#[derive(Debug, Clone)]
pub struct SessionState {
    controller: ViewController,
    buffers: BufferStore,
    matrix: MatrixBuilder,
    log: EventLog,
    pending: Vec<RequestId>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new("")
    }
}

impl SessionState {
    /// Fresh session on the Source view, seeded with `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let buffers = BufferStore::with_source(source);
        Self {
            controller: ViewController::new(&buffers),
            buffers,
            matrix: MatrixBuilder::default(),
            log: EventLog::default(),
            pending: Vec::new(),
        }
    }

    pub fn current_view(&self) -> View {
        self.controller.current()
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn buffers(&self) -> &BufferStore {
        &self.buffers
    }

    pub fn matrix(&self) -> &MatrixBuilder {
        &self.matrix
    }

    /// Cell-level access for the matrix table. Structural changes go
    /// through the count events.
    pub fn matrix_mut(&mut self) -> &mut MatrixBuilder {
        &mut self.matrix
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Runs issued and not yet finished or cancelled, oldest first.
    pub fn pending_runs(&self) -> &[RequestId] {
        &self.pending
    }

    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::TabSelected(view) => {
                self.controller.select(view, &mut self.buffers);
            }
            Event::TextEdited(text) => {
                if !self.controller.edit_text(text) {
                    tracing::debug!(view = %self.current_view(), "edit ignored");
                }
            }
            Event::ConstraintCountChanged(count) => {
                if let Err(e) = self.matrix.set_constraint_count(count) {
                    tracing::debug!(error = %e, "constraint count ignored");
                }
            }
            Event::VariableCountChanged(count) => {
                if let Err(e) = self.matrix.set_variable_count(count) {
                    tracing::debug!(error = %e, "variable count ignored");
                }
            }
            Event::MatrixParseRequested => self.parse_matrix(),
            Event::MatrixReset => {
                self.matrix.reset();
                self.log.push("Matrix reset.");
            }
            Event::MatrixFileLoaded { name, result } => self.load_matrix(&name, result),
            Event::RunRequested => return self.request_run(),
            Event::RunFinished { request, outcome } => self.finish_run(request, outcome),
            Event::RunCancelled(request) => {
                if self.take_pending(request) {
                    self.log.push(format!("Run {request} cancelled."));
                }
            }
            Event::SourceFileLoaded { name, result } => self.load_source(&name, result),
            Event::SourceSaveRequested => {
                if self.current_view() == View::Source {
                    self.controller.store_current(&mut self.buffers);
                }
                return vec![Effect::SaveFile {
                    name: SOURCE_EXPORT,
                    contents: self.buffers.load(View::Source).to_string(),
                }];
            }
            Event::ReportSaveRequested => {
                return vec![Effect::SaveFile {
                    name: REPORT_EXPORT,
                    contents: self.buffers.report().to_string(),
                }];
            }
            Event::ExportFinished { name, result } => match result {
                Ok(()) => self.log.push(format!("{name} Downloaded...")),
                Err(message) => self.log.push(format!("Failed to save {name}: {message}")),
            },
        }
        Vec::new()
    }

    fn parse_matrix(&mut self) {
        match self.matrix.serialize() {
            Ok(spec) => {
                let text = to_source_text(&spec);
                self.buffers.store(View::Matrix, text.clone());
                self.buffers.store(View::Source, text);
                if self.current_view() == View::Source {
                    self.controller.refresh(&self.buffers);
                }
                self.log.push("Matrix parsed into source text space.");
            }
            Err(e) => self.log.push(e.to_string()),
        }
    }

    fn load_matrix(&mut self, name: &str, result: Result<MatrixSpec, String>) {
        let loaded = result
            .and_then(|spec| MatrixBuilder::from_spec(&spec).map_err(|e| e.to_string()));
        match loaded {
            Ok(matrix) => {
                self.matrix = matrix;
                self.log.push(format!("Matrix from {name} loaded."));
            }
            Err(message) => self.log.push(format!("Could not load {name}: {message}")),
        }
    }

    fn request_run(&mut self) -> Vec<Effect> {
        if self.current_view() == View::Source {
            self.controller.store_current(&mut self.buffers);
        }

        let request = RequestId::new();
        self.pending.push(request);
        self.log.push("Now Running...");
        tracing::info!(%request, in_flight = self.pending.len(), "run requested");

        vec![Effect::Solve {
            request,
            body: SolveRequest::new(self.buffers.load(View::Source)),
        }]
    }

    fn finish_run(&mut self, request: RequestId, outcome: SolveResult<SolveResponse>) {
        if !self.take_pending(request) {
            tracing::debug!(%request, "completion for unknown run dropped");
            return;
        }

        let response = match outcome {
            Ok(response) => response,
            Err(SolveError::Connection { message }) => {
                tracing::warn!(%request, %message, "run failed to connect");
                self.log.push("Unable to connect to the server...");
                return;
            }
            Err(e) => {
                tracing::warn!(%request, error = %e, "run failed");
                self.log.push(e.to_string());
                return;
            }
        };

        // Keep whatever the text area shows before result slots change,
        // then resync it so the switch below stores fresh content.
        self.controller.store_current(&mut self.buffers);

        self.buffers.set_report(response.solution.clone());
        self.buffers.store(View::Objective, response.solution.clone());
        if let Some(text) = response.constraints_text() {
            self.buffers.store(View::Constraints, text);
        }
        if let Some(text) = response.sensitivity_text() {
            self.buffers.store(View::Sensitivity, text);
        }

        self.controller.refresh(&self.buffers);
        self.log.push("Running Complete.");
        tracing::info!(%request, "run complete");
        self.controller.select(View::Result, &mut self.buffers);
    }

    fn load_source(&mut self, name: &str, result: Result<Vec<u8>, String>) {
        let decoded = result
            .and_then(|bytes| decode_source(name, &bytes).map_err(|e| e.to_string()));
        let text = match decoded {
            Ok(text) => text,
            Err(message) => {
                self.log.push(format!("Could not load {name}: {message}"));
                return;
            }
        };

        self.buffers.store(View::Source, text);
        if self.current_view() == View::Source {
            self.controller.refresh(&self.buffers);
        }
        self.log
            .push(format!("Content from {name} is placed into source text space."));
    }

    fn take_pending(&mut self, request: RequestId) -> bool {
        match self.pending.iter().position(|r| *r == request) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }
}
