use lp_app::lp_core::EventLog;

#[derive(Default)]
pub struct LogView {
    show_times: bool,
}

impl LogView {
    pub fn show(&mut self, ui: &mut egui::Ui, log: &EventLog) {
        ui.horizontal(|ui| {
            ui.strong("Log");
            ui.checkbox(&mut self.show_times, "Timestamps");
        });

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in log.entries() {
                    if self.show_times {
                        ui.monospace(format!("[{}] {}", entry.at.format("%H:%M:%S"), entry.message));
                    } else {
                        ui.monospace(&entry.message);
                    }
                }
            });
    }
}
