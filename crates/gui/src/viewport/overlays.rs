//! Viewport overlay drawing (axis labels, part name tags)

use egui::Painter;

use crate::state::ViewerState;

use super::camera::ArcBallCamera;

/// Draw axis labels in the viewport
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, length: f32) {
    let tip = length + 0.1;
    let labels = [
        ([tip, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, tip, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, tip], "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Tag each highlighted part with its name next to its bounds.
pub fn draw_part_tags(
    painter: &Painter,
    rect: egui::Rect,
    camera: &ArcBallCamera,
    state: &ViewerState,
) {
    for part in state.model.parts() {
        if !part.highlighted {
            continue;
        }
        let center = part.aabb.center();
        if let Some(screen) = camera.project([center.x, part.aabb.max.y, center.z], rect) {
            if rect.contains(screen) {
                painter.text(
                    screen + egui::vec2(0.0, -4.0),
                    egui::Align2::CENTER_BOTTOM,
                    &part.name,
                    egui::FontId::proportional(12.0),
                    egui::Color32::from_rgb(255, 0, 127),
                );
            }
        }
    }
}
