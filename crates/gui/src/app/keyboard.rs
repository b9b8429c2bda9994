//! Global keyboard shortcuts

use eframe::egui;

use crate::state::ViewerState;
use crate::viewport::ViewportPanel;

pub fn handle_keyboard(ctx: &egui::Context, state: &mut ViewerState, viewport: &mut ViewportPanel) {
    // Don't steal keys from text fields
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input(|i| {
        // Escape: clear all highlights
        if i.key_pressed(egui::Key::Escape) {
            let cleared = state.model.clear_highlights();
            if cleared > 0 {
                tracing::info!(cleared, "highlights cleared via Escape");
            }
        }

        // Home: reset camera to the default pose
        if i.key_pressed(egui::Key::Home) {
            viewport.reset_camera();
        }

        // F: frame the first highlighted part
        if i.key_pressed(egui::Key::F) {
            if let Some(part) = state.model.parts().iter().find(|p| p.highlighted) {
                viewport.focus_on(&part.aabb);
            }
        }
    });
}
