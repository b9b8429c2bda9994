//! 3D text controls: input field, color picker, submit, and the two
//! stretch sliders acting on whatever overlay currently exists.

use egui::Ui;

use shared::{OverlaySpec, Rgb};

use crate::state::overlay::{MAX_SCALE, MIN_SCALE};
use crate::state::ViewerState;

/// Returns a submit request when the user asks for new overlay text; the app
/// owns the tessellator and performs the actual mesh generation.
pub fn show(ui: &mut Ui, state: &mut ViewerState) -> Option<OverlaySpec> {
    let mut submit = None;

    ui.heading("3D Text");
    ui.separator();

    let text_edit = ui.add(
        egui::TextEdit::singleline(&mut state.overlay.input).hint_text("Text to place in scene"),
    );
    let enter_pressed =
        text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.horizontal(|ui| {
        ui.label("Color");
        let mut rgb = state.overlay.color.to_u8();
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            state.overlay.color = Rgb::from_u8(rgb[0], rgb[1], rgb[2]);
        }
    });

    let can_submit = !state.overlay.input.trim().is_empty();
    let clicked = ui
        .add_enabled(can_submit, egui::Button::new("Place text"))
        .clicked();
    if can_submit && (clicked || enter_pressed) {
        submit = Some(OverlaySpec::new(
            state.overlay.input.trim().to_owned(),
            state.overlay.color,
        ));
    }

    ui.add_space(8.0);
    ui.label("Stretch");

    let mut width = state.overlay.width_scale;
    if ui
        .add(egui::Slider::new(&mut width, MIN_SCALE..=MAX_SCALE).text("Width"))
        .changed()
    {
        state.overlay.set_width_scale(width);
    }

    let mut height = state.overlay.height_scale;
    if ui
        .add(egui::Slider::new(&mut height, MIN_SCALE..=MAX_SCALE).text("Height"))
        .changed()
    {
        state.overlay.set_height_scale(height);
    }

    if let Some(instance) = state.overlay.current() {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.weak("Showing:");
            ui.label(&instance.spec.text);
        });
        if ui.button("Remove text").clicked() {
            state.overlay.clear();
        }
    }

    if let Some(ref error) = state.overlay.error {
        ui.add_space(8.0);
        ui.colored_label(egui::Color32::from_rgb(240, 100, 100), error);
    }

    submit
}
