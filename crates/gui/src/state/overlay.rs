//! The single 3D text overlay and its edit controls.

use glam::{Mat4, Vec3};

use shared::{OverlaySpec, Rgb, DEFAULT_TEXT_COLOR};

use crate::text3d::OVERLAY_OFFSET;
use crate::viewport::mesh::MeshData;

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 5.0;

/// The overlay currently in the scene: the request that produced it plus the
/// tessellated glyph mesh (unscaled, at the origin).
pub struct OverlayInstance {
    pub spec: OverlaySpec,
    pub mesh: MeshData,
}

/// There is at most one overlay; submitting new text replaces the old one.
pub struct OverlayState {
    /// Text field contents, not yet submitted.
    pub input: String,
    /// Picker color for the next submit.
    pub color: Rgb,
    /// Horizontal stretch applied to the current overlay (1..=5).
    pub width_scale: f32,
    /// Vertical stretch applied to the current overlay (1..=5).
    pub height_scale: f32,
    /// Last tessellation or font problem, shown in the status bar.
    pub error: Option<String>,
    current: Option<OverlayInstance>,
    version: u64,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            input: String::new(),
            color: DEFAULT_TEXT_COLOR,
            width_scale: MIN_SCALE,
            height_scale: MIN_SCALE,
            error: None,
            current: None,
            version: 0,
        }
    }
}

impl OverlayState {
    /// Install a freshly tessellated overlay, replacing any previous one.
    pub fn install(&mut self, spec: OverlaySpec, mesh: MeshData) {
        self.current = Some(OverlayInstance { spec, mesh });
        self.error = None;
        self.version += 1;
    }

    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            self.version += 1;
        }
    }

    pub fn current(&self) -> Option<&OverlayInstance> {
        self.current.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_width_scale(&mut self, scale: f32) {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        if scale != self.width_scale {
            self.width_scale = scale;
            self.version += 1;
        }
    }

    pub fn set_height_scale(&mut self, scale: f32) {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        if scale != self.height_scale {
            self.height_scale = scale;
            self.version += 1;
        }
    }

    /// The overlay ready for rendering: slider scales and the fixed anchor
    /// baked into the vertices, tinted with the submitted color.
    pub fn scene_mesh(&self) -> Option<MeshData> {
        let instance = self.current.as_ref()?;
        let transform = Mat4::from_translation(Vec3::from(OVERLAY_OFFSET))
            * Mat4::from_scale(Vec3::new(self.width_scale, self.height_scale, 1.0));
        let mut mesh = instance.mesh.transformed(&transform);
        mesh.set_color(instance.spec.color.to_array());
        Some(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::viewport::picking::Aabb;

    fn overlay_with_quad(w: f32, h: f32) -> OverlayState {
        let mut overlay = OverlayState::default();
        overlay.install(
            OverlaySpec::new("hello", DEFAULT_TEXT_COLOR),
            fixtures::quad_mesh(w, h, Rgb::new(1.0, 1.0, 1.0)),
        );
        overlay
    }

    #[test]
    fn test_default_color_is_red() {
        assert_eq!(OverlayState::default().color, Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_install_replaces_previous() {
        let mut overlay = overlay_with_quad(1.0, 0.5);
        overlay.install(
            OverlaySpec::new("second", DEFAULT_TEXT_COLOR),
            fixtures::quad_mesh(2.0, 0.5, Rgb::new(1.0, 1.0, 1.0)),
        );
        assert_eq!(overlay.current().unwrap().spec.text, "second");
    }

    #[test]
    fn test_width_slider_stretches_x_only() {
        let mut overlay = overlay_with_quad(1.0, 0.5);
        let base = Aabb::from_mesh(&overlay.scene_mesh().unwrap());

        overlay.set_width_scale(3.0);
        let wide = Aabb::from_mesh(&overlay.scene_mesh().unwrap());

        let base_w = base.max.x - base.min.x;
        let base_h = base.max.y - base.min.y;
        assert!(((wide.max.x - wide.min.x) - base_w * 3.0).abs() < 1e-5);
        assert!(((wide.max.y - wide.min.y) - base_h).abs() < 1e-5);
    }

    #[test]
    fn test_scales_clamp_to_slider_range() {
        let mut overlay = overlay_with_quad(1.0, 0.5);
        overlay.set_width_scale(0.0);
        assert_eq!(overlay.width_scale, MIN_SCALE);
        overlay.set_height_scale(99.0);
        assert_eq!(overlay.height_scale, MAX_SCALE);
    }

    #[test]
    fn test_scene_mesh_anchored_at_offset() {
        let overlay = overlay_with_quad(1.0, 0.5);
        let aabb = Aabb::from_mesh(&overlay.scene_mesh().unwrap());
        // Quad spans [0, w] x [0, h], so min lands exactly on the anchor
        assert!((aabb.min.x - OVERLAY_OFFSET[0]).abs() < 1e-5);
        assert!((aabb.min.y - OVERLAY_OFFSET[1]).abs() < 1e-5);
        assert!((aabb.min.z - OVERLAY_OFFSET[2]).abs() < 1e-5);
    }

    #[test]
    fn test_scene_mesh_tinted_with_submit_color() {
        let mut overlay = OverlayState::default();
        overlay.install(
            OverlaySpec::new("tinted", Rgb::new(0.0, 1.0, 0.0)),
            fixtures::quad_mesh(1.0, 0.5, Rgb::new(1.0, 1.0, 1.0)),
        );
        let mesh = overlay.scene_mesh().unwrap();
        assert_eq!(&mesh.vertices[6..9], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_slider_versions_invalidate_cache_key() {
        let mut overlay = overlay_with_quad(1.0, 0.5);
        let v = overlay.version();
        overlay.set_width_scale(overlay.width_scale);
        assert_eq!(overlay.version(), v);
        overlay.set_width_scale(2.0);
        assert!(overlay.version() > v);
    }
}
