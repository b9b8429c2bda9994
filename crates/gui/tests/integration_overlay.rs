//! Overlay and render-cache integration: the single-overlay invariant, the
//! stretch sliders, and what actually reaches the renderer.

use partview_gui_lib::fixtures;
use partview_gui_lib::state::{ModelState, OverlayState};
use partview_gui_lib::text3d::OVERLAY_OFFSET;
use partview_gui_lib::validation::MeshValidator;
use partview_gui_lib::viewport::scene_cache::{SceneCache, OVERLAY_MESH_ID};
use shared::{OverlaySpec, Rgb, ACCENT, DEFAULT_PROMPT, DEFAULT_TEXT_COLOR};

fn overlay_with(text: &str, color: Rgb) -> OverlayState {
    let mut overlay = OverlayState::default();
    overlay.install(
        OverlaySpec::new(text, color),
        fixtures::quad_mesh(2.0, 0.4, Rgb::new(1.0, 1.0, 1.0)),
    );
    overlay
}

#[test]
fn test_at_most_one_overlay() {
    let mut overlay = overlay_with(DEFAULT_PROMPT, DEFAULT_TEXT_COLOR);
    overlay.install(
        OverlaySpec::new("replacement", Rgb::new(0.0, 0.0, 1.0)),
        fixtures::quad_mesh(1.0, 0.4, Rgb::new(1.0, 1.0, 1.0)),
    );

    assert_eq!(overlay.current().unwrap().spec.text, "replacement");

    let model = ModelState::default();
    let mut cache = SceneCache::new();
    cache.rebuild(&model, &overlay);

    // Exactly one overlay mesh ever reaches the renderer
    assert_eq!(cache.meshes().len(), 1);
    assert!(cache.meshes().contains_key(OVERLAY_MESH_ID));
}

#[test]
fn test_width_stretch_triples_x_extent_only() {
    let mut overlay = overlay_with("stretch me", DEFAULT_TEXT_COLOR);

    let base = MeshValidator::new(&overlay.scene_mesh().unwrap()).dimensions();
    overlay.set_width_scale(3.0);
    let wide = MeshValidator::new(&overlay.scene_mesh().unwrap()).dimensions();

    assert!((wide[0] - base[0] * 3.0).abs() < 1e-4);
    assert!((wide[1] - base[1]).abs() < 1e-5);
    assert!((wide[2] - base[2]).abs() < 1e-5);
}

#[test]
fn test_height_stretch_independent_of_width() {
    let mut overlay = overlay_with("stretch me", DEFAULT_TEXT_COLOR);
    overlay.set_width_scale(2.0);
    overlay.set_height_scale(5.0);

    let dims = MeshValidator::new(&overlay.scene_mesh().unwrap()).dimensions();
    assert!((dims[0] - 2.0 * 2.0).abs() < 1e-4); // quad width 2 × scale 2
    assert!((dims[1] - 0.4 * 5.0).abs() < 1e-4); // quad height 0.4 × scale 5
}

#[test]
fn test_overlay_anchor_survives_scaling() {
    let mut overlay = overlay_with("anchored", DEFAULT_TEXT_COLOR);
    overlay.set_width_scale(4.0);

    let aabb = MeshValidator::new(&overlay.scene_mesh().unwrap()).aabb();
    // The quad's min corner is the anchor regardless of stretch
    assert!((aabb.min.x - OVERLAY_OFFSET[0]).abs() < 1e-5);
    assert!((aabb.min.y - OVERLAY_OFFSET[1]).abs() < 1e-5);
    assert!((aabb.min.z - OVERLAY_OFFSET[2]).abs() < 1e-5);
}

#[test]
fn test_cache_carries_tinted_overlay_and_accent_parts() {
    let mut model = fixtures::model_with(&["sole", "upper"]);
    let id = model.parts()[0].id.clone();
    model.highlight(&id);

    let overlay = overlay_with("hello", Rgb::new(0.0, 0.8, 0.2));

    let mut cache = SceneCache::new();
    cache.rebuild(&model, &overlay);
    assert_eq!(cache.meshes().len(), 3);

    let overlay_mesh = &cache.meshes()[OVERLAY_MESH_ID];
    assert!(MeshValidator::new(overlay_mesh).uses_color(Rgb::new(0.0, 0.8, 0.2), 1e-5));

    let highlighted = &cache.meshes()[&id];
    assert!(MeshValidator::new(highlighted).uses_color(ACCENT, 1e-5));

    let plain = &cache.meshes()[&model.parts()[1].id];
    assert!(!MeshValidator::new(plain).uses_color(ACCENT, 1e-5));
}

#[test]
fn test_removing_overlay_empties_renderer_slot() {
    let model = fixtures::model_with(&["sole"]);
    let mut overlay = overlay_with("temp", DEFAULT_TEXT_COLOR);

    let mut cache = SceneCache::new();
    cache.rebuild(&model, &overlay);
    assert!(cache.meshes().contains_key(OVERLAY_MESH_ID));

    overlay.clear();
    assert!(!cache.is_valid(model.version(), overlay.version()));
    cache.rebuild(&model, &overlay);
    assert!(!cache.meshes().contains_key(OVERLAY_MESH_ID));
    assert_eq!(cache.meshes().len(), 1);
}
