use lp_app::Event;
use lp_app::lp_matrix::{Goal, MAX_CONSTRAINTS, MAX_VARIABLES, MatrixBuilder, Relation};

const CELL_WIDTH: f32 = 64.0;

#[derive(Default)]
pub struct MatrixView;

impl MatrixView {
    /// Matrix table. Cell text is edited in place; structural changes and
    /// actions come back as events for the session.
    pub fn show(&mut self, ui: &mut egui::Ui, matrix: &mut MatrixBuilder) -> Vec<Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.label("Variables");
            let mut variables = matrix.variable_count() as i64;
            if ui
                .add(egui::DragValue::new(&mut variables).range(1..=MAX_VARIABLES as i64))
                .changed()
            {
                events.push(Event::VariableCountChanged(variables));
            }

            ui.label("Constraints");
            let mut constraints = matrix.constraint_count() as i64;
            if ui
                .add(egui::DragValue::new(&mut constraints).range(0..=MAX_CONSTRAINTS as i64))
                .changed()
            {
                events.push(Event::ConstraintCountChanged(constraints));
            }

            ui.separator();
            if ui.button("Reset").clicked() {
                events.push(Event::MatrixReset);
            }
            if ui
                .button("Parse Matrix")
                .on_hover_text("Write the matrix into the source text")
                .clicked()
            {
                events.push(Event::MatrixParseRequested);
            }
        });

        ui.separator();

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("lp_matrix")
                .striped(true)
                .spacing([6.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Variable Name(s)");
                    for (column, name) in matrix.variable_names_mut().iter_mut().enumerate() {
                        ui.add(
                            egui::TextEdit::singleline(name)
                                .desired_width(CELL_WIDTH)
                                .hint_text(format!("x{}", column + 1)),
                        );
                    }
                    ui.end_row();

                    ui.label("Optimize");
                    for cell in matrix.objective_mut() {
                        number_cell(ui, cell);
                    }
                    let goal = matrix.goal_mut();
                    egui::ComboBox::new("objective_goal", "")
                        .selected_text(goal.label())
                        .show_ui(ui, |ui| {
                            for option in Goal::ALL {
                                ui.selectable_value(goal, option, option.label());
                            }
                        });
                    if matrix.goal() == Goal::TargetValue {
                        number_cell(ui, matrix.target_value_mut());
                    }
                    ui.end_row();

                    for (index, row) in matrix.rows_mut().iter_mut().enumerate() {
                        ui.label(format!("Constraint {}", index + 1));
                        for cell in row.cells_mut() {
                            number_cell(ui, cell);
                        }
                        let relation = row.relation_mut();
                        egui::ComboBox::new(("relation", index), "")
                            .width(48.0)
                            .selected_text(relation.symbol())
                            .show_ui(ui, |ui| {
                                for option in Relation::ALL {
                                    ui.selectable_value(relation, option, option.symbol());
                                }
                            });
                        number_cell(ui, row.rhs_mut());
                        ui.end_row();
                    }
                });
        });

        events
    }
}

/// Numeric text cell, drawn red while it does not parse.
fn number_cell(ui: &mut egui::Ui, cell: &mut String) {
    let trimmed = cell.trim();
    let valid = trimmed.is_empty() || trimmed.parse::<f64>().is_ok_and(f64::is_finite);
    let mut edit = egui::TextEdit::singleline(cell).desired_width(CELL_WIDTH);
    if !valid {
        edit = edit.text_color(egui::Color32::RED);
    }
    ui.add(edit);
}
