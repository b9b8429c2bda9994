//! Application state: the loaded model, the text overlay, the background
//! loader, and UI/settings flags.

pub mod loader;
pub mod model;
pub mod overlay;
pub mod settings;

pub use loader::LoadState;
pub use model::{ModelState, Part};
pub use overlay::OverlayState;
pub use settings::AppSettings;

/// Which side panels are shown.
pub struct PanelVisibility {
    pub part_list: bool,
    pub overlay_controls: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            part_list: true,
            overlay_controls: true,
        }
    }
}

/// Everything the UI mutates, handed explicitly to each panel.
pub struct ViewerState {
    pub model: ModelState,
    pub overlay: OverlayState,
    pub load: LoadState,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    pub show_settings_window: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            model: ModelState::default(),
            overlay: OverlayState::default(),
            load: LoadState::default(),
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
        }
    }
}
