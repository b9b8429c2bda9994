// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui panels, GL rendering) remain in the binary crate.

pub mod asset;
pub mod fixtures;
pub mod state;
pub mod text3d;
pub mod validation;

/// Viewport types that do not touch the GL context (camera math, mesh data,
/// picking, the render cache). The GL renderer stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
    pub mod scene_cache;
}
