use lp_app::lp_core::ViewController;

#[derive(Default)]
pub struct TextView;

impl TextView {
    /// Shared text area. Returns the new text when the user edited it.
    pub fn show(&mut self, ui: &mut egui::Ui, controller: &ViewController) -> Option<String> {
        let area = controller.text_area();
        let mut text = area.text().to_string();

        let editor = egui::TextEdit::multiline(&mut text)
            .code_editor()
            .interactive(!area.is_read_only())
            .desired_width(f32::INFINITY)
            .desired_rows(24);

        let response = egui::ScrollArea::vertical()
            .show(ui, |ui| ui.add(editor))
            .inner;

        response.changed().then_some(text)
    }
}
