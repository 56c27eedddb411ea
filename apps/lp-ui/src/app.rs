use crate::run_worker::RunWorker;
use crate::views::{LogView, MatrixView, TextView};
use egui_file_dialog::{DialogMode, FileDialog};
use lp_app::lp_client::{HttpSolver, SolveError, SolverConfig};
use lp_app::lp_core::View;
use lp_app::{
    Effect, Event, SessionState, load_matrix_spec, read_source_file, write_export,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct LpOnlineApp {
    session: SessionState,
    solver: Result<HttpSolver, String>,
    workers: Vec<RunWorker>,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_directory: Option<PathBuf>,
    text_view: TextView,
    matrix_view: MatrixView,
    log_view: LogView,
}

#[derive(Debug, Clone, PartialEq)]
enum FileDialogAction {
    UploadSource,
    LoadMatrix,
    Save { name: &'static str, contents: String },
}

impl LpOnlineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let solver = SolverConfig::from_env()
            .map_err(|e| e.to_string())
            .and_then(|config| HttpSolver::new(&config).map_err(|e| e.to_string()));
        match &solver {
            Ok(solver) => tracing::info!(endpoint = solver.endpoint(), "solve service"),
            Err(message) => tracing::error!(%message, "no usable solve service"),
        }

        Self {
            session: SessionState::default(),
            solver,
            workers: Vec::new(),
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_directory: None,
            text_view: TextView,
            matrix_view: MatrixView,
            log_view: LogView::default(),
        }
    }

    /// Apply `event` and every event its effects produce.
    fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in self.session.apply(event) {
                if let Some(next) = self.perform(effect) {
                    queue.push_back(next);
                }
            }
        }
    }

    fn perform(&mut self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::Solve { request, body } => match &self.solver {
                Ok(solver) => {
                    self.workers
                        .push(RunWorker::start(request, solver.clone(), body));
                    None
                }
                Err(message) => Some(Event::RunFinished {
                    request,
                    outcome: Err(SolveError::Connection {
                        message: message.clone(),
                    }),
                }),
            },
            Effect::SaveFile { name, contents } => {
                self.file_dialog_action = Some(FileDialogAction::Save { name, contents });
                open_save_dialog(&mut self.file_dialog, name);
                None
            }
        }
    }

    fn poll_workers(&mut self) {
        let mut finished = Vec::new();
        self.workers.retain(|worker| match worker.try_finish() {
            Some(outcome) => {
                finished.push(Event::RunFinished {
                    request: worker.request,
                    outcome,
                });
                false
            }
            None => true,
        });
        for event in finished {
            self.dispatch(event);
        }
    }

    fn cancel_runs(&mut self) {
        let cancelled: Vec<_> = self.workers.drain(..).map(|w| w.request).collect();
        for request in cancelled {
            self.dispatch(Event::RunCancelled(request));
        }
    }

    fn open_dialog(&mut self, action: FileDialogAction) {
        self.file_dialog_action = Some(action);
        let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
        let _ = self
            .file_dialog
            .open(DialogMode::SelectFile, true, initial_dir);
    }

    fn on_file_selected(&mut self, path: &Path) {
        self.last_directory = path.parent().map(Path::to_path_buf);
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let event = match self.file_dialog_action.take() {
            Some(FileDialogAction::UploadSource) => match read_source_file(path) {
                Ok((name, bytes)) => Event::SourceFileLoaded {
                    name,
                    result: Ok(bytes),
                },
                Err(e) => Event::SourceFileLoaded {
                    name: display_name,
                    result: Err(e.to_string()),
                },
            },
            Some(FileDialogAction::LoadMatrix) => Event::MatrixFileLoaded {
                name: display_name,
                result: load_matrix_spec(path).map_err(|e| e.to_string()),
            },
            Some(FileDialogAction::Save { name, contents }) => Event::ExportFinished {
                name: name.to_string(),
                result: write_export(path, &contents).map_err(|e| e.to_string()),
            },
            None => return,
        };
        self.dispatch(event);
    }

    fn tab_bar(&mut self, ui: &mut egui::Ui) {
        let current = self.session.current_view();
        ui.horizontal(|ui| {
            for view in View::TABS {
                let selected = current == view
                    || (view == View::Result && current.is_result_leaf());
                if ui.selectable_label(selected, view.label()).clicked() {
                    self.dispatch(Event::TabSelected(view));
                }
            }
        });
    }

    fn result_dash(&mut self, ui: &mut egui::Ui) {
        let current = self.session.current_view().resolve();
        ui.horizontal(|ui| {
            for view in View::RESULT_TABS {
                if ui.selectable_label(current == view, view.label()).clicked() {
                    self.dispatch(Event::TabSelected(view));
                }
            }
            ui.separator();
            if ui.button("Download Report").clicked() {
                self.dispatch(Event::ReportSaveRequested);
            }
        });
    }
}

impl eframe::App for LpOnlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Run").clicked() {
                    self.dispatch(Event::RunRequested);
                }
                if !self.workers.is_empty() {
                    ui.spinner();
                    if ui.button("Cancel").clicked() {
                        self.cancel_runs();
                    }
                }

                ui.separator();

                if ui.button("Download").clicked() {
                    self.dispatch(Event::SourceSaveRequested);
                }
                if ui
                    .button("Upload")
                    .on_hover_text("Load a .lp or .txt file into the source text")
                    .clicked()
                {
                    self.open_dialog(FileDialogAction::UploadSource);
                }
                if ui.button("Load Matrix").clicked() {
                    self.open_dialog(FileDialogAction::LoadMatrix);
                }

                ui.separator();
                match &self.solver {
                    Ok(solver) => ui.label(format!("Solver: {}", solver.endpoint())),
                    Err(message) => ui.colored_label(egui::Color32::RED, message.as_str()),
                };
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.on_file_selected(&path);
        }

        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                self.log_view.show(ui, self.session.log());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.tab_bar(ui);
            ui.separator();

            if self.session.controller().is_result_dash_visible() {
                self.result_dash(ui);
                ui.separator();
            }

            if self.session.controller().is_matrix_visible() {
                let events = self.matrix_view.show(ui, self.session.matrix_mut());
                for event in events {
                    self.dispatch(event);
                }
            } else if let Some(text) = self.text_view.show(ui, self.session.controller()) {
                self.dispatch(Event::TextEdited(text));
            }
        });

        if !self.workers.is_empty() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

/// Open the save dialog with `name` prefilled.
fn open_save_dialog(dialog: &mut FileDialog, name: &str) {
    dialog.config_mut().default_file_name = name.to_string();
    dialog.save_file();
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_app::{REPORT_EXPORT, SOURCE_EXPORT};

    #[test]
    fn save_dialog_is_prefilled_with_export_name() {
        let mut dialog = FileDialog::new();

        open_save_dialog(&mut dialog, REPORT_EXPORT);
        assert_eq!(dialog.config_mut().default_file_name, "report.txt");

        open_save_dialog(&mut dialog, SOURCE_EXPORT);
        assert_eq!(dialog.config_mut().default_file_name, "lp_solve.txt");
    }
}
