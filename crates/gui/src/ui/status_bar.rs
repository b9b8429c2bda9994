use egui::Ui;

use crate::state::ViewerState;

pub fn show(ui: &mut Ui, state: &ViewerState) {
    ui.horizontal(|ui| {
        match state.model.name() {
            Some(name) => ui.weak(format!("Model: {name}")),
            None => ui.weak("No model"),
        };

        ui.separator();
        ui.weak(format!("Parts: {}", state.model.len()));

        let highlighted = state.model.highlighted_count();
        if highlighted > 0 {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(255, 0, 127),
                format!("Highlighted: {highlighted}"),
            );
        }

        if let Some(pct) = state.load.progress {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(255, 200, 100),
                format!("Loading… {pct:.0}%"),
            );
        }

        for error in error_lines(state) {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(240, 100, 100), error);
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("PartView v0.1");
        });
    });
}

/// Everything error-shaped the bar reports: failed loads and font or
/// tessellation problems from the text overlay.
fn error_lines(state: &ViewerState) -> Vec<&str> {
    let mut lines = Vec::new();
    if let Some(ref error) = state.load.error {
        lines.push(error.as_str());
    }
    if let Some(ref error) = state.overlay.error {
        lines.push(error.as_str());
    }
    lines
}
