//! Application menu bar and settings window

use eframe::egui;

use crate::state::ViewerState;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.menu_button("File", |ui| {
        if ui.button("Open Model…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Open GLB model")
                .add_filter("glTF binary", &["glb", "gltf"])
                .pick_file()
            {
                state.load.start(path);
            }
        }
        if ui
            .add_enabled(!state.model.is_empty(), egui::Button::new("Close Model"))
            .clicked()
        {
            state.model.clear();
            state.overlay.clear();
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut ViewerState, viewport: &mut ViewportPanel) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.panels.part_list, "Part list");
        ui.checkbox(&mut state.panels.overlay_controls, "Text controls");
        ui.separator();
        ui.checkbox(&mut state.settings.grid.visible, "Grid");
        ui.checkbox(&mut state.settings.axes.visible, "Axes");
        ui.checkbox(&mut state.settings.axes.show_labels, "Axis labels");
        ui.separator();
        if ui.button("Reset camera").clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences…").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut ViewerState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Preferences")
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    // The Close button may have cleared the flag inside the window
    state.show_settings_window &= open;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.heading("Grid");
    ui.checkbox(&mut state.settings.grid.visible, "Show grid");

    ui.horizontal(|ui| {
        ui.label("Cell size");
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(0.1..=100.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Range");
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Opacity");
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.heading("Axes");
    ui.checkbox(&mut state.settings.axes.visible, "Show axes");
    ui.checkbox(&mut state.settings.axes.show_labels, "Show labels");

    ui.horizontal(|ui| {
        ui.label("Length");
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Thickness");
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.heading("Viewport");
    ui.horizontal(|ui| {
        ui.label("Background");
        ui.color_edit_button_srgb(&mut state.settings.viewport.background_color);
    });
    ui.checkbox(&mut state.settings.viewport.antialiasing, "Anti-aliasing");
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut ViewerState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            state.settings.save();
        }
        if ui.button("Reset").clicked() {
            state.settings = crate::state::settings::AppSettings::default();
        }
        if ui.button("Close").clicked() {
            state.show_settings_window = false;
        }
    });
}
