//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::path::PathBuf;

use eframe::egui;

use shared::{OverlaySpec, DEFAULT_PROMPT, DEFAULT_TEXT_COLOR};

use crate::state::{AppSettings, ViewerState};
use crate::text3d::TextTessellator;
use crate::ui::{overlay_panel, part_list, status_bar};
use crate::viewport::ViewportPanel;

/// Startup options parsed from the command line
pub struct StartupOptions {
    pub model: Option<PathBuf>,
    pub font: PathBuf,
}

/// Main application
pub struct ViewerApp {
    state: ViewerState,
    viewport: ViewportPanel,
    /// Glyph tessellator; None when the font failed to load
    text: Option<TextTessellator>,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last persisted settings (for autosave)
    last_saved_settings: AppSettings,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: StartupOptions) -> Self {
        let mut state = ViewerState::default();

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let text = match TextTessellator::from_path(&options.font) {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(error = %e, "3D text disabled");
                state.overlay.error = Some(e.to_string());
                None
            }
        };

        if let Some(model_path) = options.model {
            state.load.start(model_path);
        }

        let last_font_size = state.settings.ui.font_size;
        let last_saved_settings = state.settings.clone();

        Self {
            state,
            viewport,
            text,
            last_font_size,
            last_saved_settings,
        }
    }

    /// Tessellate `spec` and swap it in as the scene's overlay.
    fn apply_overlay(&mut self, spec: OverlaySpec) {
        let Some(tessellator) = self.text.as_mut() else {
            self.state.overlay.error = Some("No font loaded; 3D text is unavailable".to_owned());
            return;
        };
        match tessellator.tessellate(&spec.text) {
            Ok(mesh) => {
                tracing::info!(text = %spec.text, "overlay text placed");
                self.state.overlay.install(spec, mesh);
            }
            Err(e) => {
                tracing::error!(error = %e, "overlay tessellation failed");
                self.state.overlay.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Persist settings when they change
        if self.state.settings != self.last_saved_settings {
            self.state.settings.save();
            self.last_saved_settings = self.state.settings.clone();
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // Finished background load: install the model and show the pick prompt
        if let Some(model) = self.state.load.poll() {
            tracing::info!(name = %model.name, parts = model.parts.len(), "model installed");
            self.state.model.install(model);
            self.apply_overlay(OverlaySpec::new(DEFAULT_PROMPT, DEFAULT_TEXT_COLOR));
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: part directory ───────────────────────
        if self.state.panels.part_list {
            egui::SidePanel::left("part_list")
                .default_width(210.0)
                .width_range(140.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    part_list::show(ui, &mut self.state);
                });
        }

        // ── Right panel: text overlay controls ───────────────
        if self.state.panels.overlay_controls {
            let submit = egui::SidePanel::right("overlay_controls")
                .default_width(240.0)
                .width_range(180.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| overlay_panel::show(ui, &mut self.state))
                .inner;
            if let Some(spec) = submit {
                self.apply_overlay(spec);
            }
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });

        // Continuous render loop: keep animating and polling the loader even
        // without input events
        ctx.request_repaint();
    }
}
