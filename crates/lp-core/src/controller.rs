//! Current-view state machine and the shared text area.
//!
//! The text area is a single buffer reused by every text view. On each tab
//! switch the outgoing view's text is stored and the incoming view's slot
//! is loaded, so the visible text always belongs to the current view.

use crate::buffer::BufferStore;
use crate::view::View;

/// Which surface occupies the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Text,
    Matrix,
}

/// The shared, user-facing text buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextArea {
    text: String,
    read_only: bool,
}

impl TextArea {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    current: View,
    surface: Surface,
    result_dash_visible: bool,
    text_area: TextArea,
}

impl ViewController {
    /// Starts on Source, showing whatever Source holds.
    pub fn new(buffers: &BufferStore) -> Self {
        Self {
            current: View::Source,
            surface: Surface::Text,
            result_dash_visible: false,
            text_area: TextArea {
                text: buffers.load(View::Source).to_string(),
                read_only: false,
            },
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn is_text_visible(&self) -> bool {
        self.surface == Surface::Text
    }

    pub fn is_matrix_visible(&self) -> bool {
        self.surface == Surface::Matrix
    }

    pub fn is_result_dash_visible(&self) -> bool {
        self.result_dash_visible
    }

    pub fn text_area(&self) -> &TextArea {
        &self.text_area
    }

    /// Persist the text area into the current view's slot.
    ///
    /// No-op while the matrix surface is up: the text area is hidden then
    /// and holds nothing that belongs to Matrix.
    pub fn store_current(&self, buffers: &mut BufferStore) {
        if self.surface == Surface::Matrix {
            return;
        }
        buffers.store(self.current, self.text_area.text.clone());
    }

    /// Switch to `view`.
    pub fn select(&mut self, view: View, buffers: &mut BufferStore) {
        self.store_current(buffers);

        self.current = view.resolve();
        self.result_dash_visible = view == View::Result || view.is_result_leaf();
        self.text_area.read_only = self.current != View::Source;

        if self.current == View::Matrix {
            self.surface = Surface::Matrix;
            tracing::debug!("matrix surface shown");
            return;
        }

        self.surface = Surface::Text;
        self.text_area.text = buffers.load(self.current).to_string();
        tracing::debug!(view = %self.current, "text view shown");
    }

    /// Reload the current view's slot into the text area.
    pub fn refresh(&mut self, buffers: &BufferStore) {
        if self.surface == Surface::Text {
            self.text_area.text = buffers.load(self.current).to_string();
        }
    }

    /// Replace the text area content with a user edit.
    ///
    /// Returns false, leaving the text untouched, when the text area is
    /// hidden or read-only.
    pub fn edit_text(&mut self, text: impl Into<String>) -> bool {
        if self.surface != Surface::Text || self.text_area.read_only {
            return false;
        }
        self.text_area.text = text.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (ViewController, BufferStore) {
        let buffers = BufferStore::with_source("max: 2x+3y;");
        (ViewController::new(&buffers), buffers)
    }

    #[test]
    fn starts_on_editable_source() {
        let (vc, _) = fresh();
        assert_eq!(vc.current(), View::Source);
        assert_eq!(vc.text_area().text(), "max: 2x+3y;");
        assert!(!vc.text_area().is_read_only());
        assert!(!vc.is_result_dash_visible());
    }

    #[test]
    fn result_trigger_lands_on_objective() {
        let (mut vc, mut buffers) = fresh();
        buffers.store(View::Objective, "23");
        vc.select(View::Result, &mut buffers);
        assert_eq!(vc.current(), View::Objective);
        assert!(vc.is_result_dash_visible());
        assert!(vc.text_area().is_read_only());
        assert_eq!(vc.text_area().text(), "23");
    }

    #[test]
    fn result_tabs_keep_dashboard_open() {
        let (mut vc, mut buffers) = fresh();
        vc.select(View::Result, &mut buffers);
        vc.select(View::Sensitivity, &mut buffers);
        assert!(vc.is_result_dash_visible());
        vc.select(View::Source, &mut buffers);
        assert!(!vc.is_result_dash_visible());
    }

    #[test]
    fn matrix_hides_text_area() {
        let (mut vc, mut buffers) = fresh();
        vc.select(View::Matrix, &mut buffers);
        assert!(vc.is_matrix_visible());
        assert!(!vc.is_text_visible());
        assert!(!vc.edit_text("ignored"));
    }

    #[test]
    fn edits_are_stored_on_exit() {
        let (mut vc, mut buffers) = fresh();
        assert!(vc.edit_text("min: x;"));
        vc.select(View::Objective, &mut buffers);
        assert_eq!(buffers.load(View::Source), "min: x;");
        assert!(!vc.edit_text("nope"));
    }

    #[test]
    fn reselecting_current_view_is_idempotent() {
        let (mut vc, mut buffers) = fresh();
        vc.edit_text("max: y;");
        vc.select(View::Source, &mut buffers);
        vc.select(View::Source, &mut buffers);
        assert_eq!(vc.text_area().text(), "max: y;");
        assert_eq!(buffers.load(View::Source), "max: y;");
    }
}
