//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
mod overlays;
pub use partview_gui_lib::viewport::{camera, mesh, picking, scene_cache};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::ViewerState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use mesh::MeshData;
use picking::PICK_TOLERANCE;
use scene_cache::SceneCache;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    cache: SceneCache,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            cache: SceneCache::new(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Re-aim the camera at a part's bounds
    pub fn focus_on(&mut self, aabb: &picking::Aabb) {
        self.camera.focus_on(aabb);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut ViewerState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────────────
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x * 0.01, delta.y * 0.01);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        // ── Double-click picking ────────────────────────────────
        self.handle_pick(&response, rect, state);

        // ── Rebuild CPU meshes when model or overlay changed ────
        if !self
            .cache
            .is_valid(state.model.version(), state.overlay.version())
        {
            self.cache.rebuild(&state.model, &state.overlay);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── Overlays ────────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    /// Double-click: nearest part toggles to highlighted; a miss on empty
    /// space clears every highlight.
    fn handle_pick(&self, response: &egui::Response, rect: egui::Rect, state: &mut ViewerState) {
        if !response.double_clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);
        match state.model.pick_nearest(&ray, PICK_TOLERANCE) {
            Some(id) => {
                let name = state
                    .model
                    .part(&id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                if state.model.highlight(&id) {
                    tracing::info!(part = %name, "part highlighted");
                }
            }
            None => {
                let cleared = state.model.clear_highlights();
                if cleared > 0 {
                    tracing::info!(cleared, "highlights cleared");
                }
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &ViewerState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera.clone();

        let meshes: HashMap<String, MeshData> = self.cache.meshes().clone();
        let version = self.cache.rebuild_count();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_from_meshes(gl, &meshes, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &ViewerState) {
        let painter = ui.painter_at(rect);

        if state.settings.axes.show_labels && state.settings.axes.visible {
            overlays::draw_axis_labels(&painter, rect, &self.camera, state.settings.axes.length);
        }

        overlays::draw_part_tags(&painter, rect, &self.camera, state);

        self.draw_camera_info(&painter, rect);

        // Navigation hint while nothing is loaded
        if state.model.is_empty() && !state.load.in_progress() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                "Open a GLB model via File ▸ Open Model…  |  LMB drag: rotate  RMB drag: pan  Scroll: zoom",
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(100, 100, 110),
            );
        }
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance,
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}
