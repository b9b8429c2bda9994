//! Part directory: one row per part, click to toggle its highlight.
//! Row visuals derive from the part's highlight flag, so the list can never
//! drift out of sync with the viewport.

use egui::Ui;

use crate::state::ViewerState;

const ACCENT_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 0, 127);

pub fn show(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui| {
        ui.heading("Parts");
        ui.weak(format!("({})", state.model.len()));
    });
    ui.separator();

    if state.model.is_empty() {
        ui.weak("No model loaded");
        return;
    }

    let rows: Vec<(String, String, bool)> = state
        .model
        .parts()
        .iter()
        .map(|p| (p.id.clone(), p.name.clone(), p.highlighted))
        .collect();

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for (id, name, highlighted) in rows {
                let text = if highlighted {
                    egui::RichText::new(&name).color(ACCENT_TEXT).strong()
                } else {
                    egui::RichText::new(&name)
                };
                if ui.selectable_label(highlighted, text).clicked() {
                    state.model.toggle_highlight(&id);
                    tracing::debug!(part = %name, "part toggled from directory");
                }
            }
        });

    if state.model.any_highlighted() {
        ui.separator();
        if ui.button("Clear highlights").clicked() {
            state.model.clear_highlights();
        }
    }
}
