//! End-to-end highlight flow: camera ray picking, reversible recolor, the
//! miss-clears-everything sweep, and directory toggling against the same
//! model state the viewport renders from.

use glam::Vec3;
use partview_gui_lib::fixtures;
use partview_gui_lib::viewport::camera::ArcBallCamera;
use partview_gui_lib::viewport::picking::{Ray, PICK_TOLERANCE};
use shared::ACCENT;

fn viewport_rect() -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1024.0, 768.0))
}

/// Ray straight down the -Z axis through the part at `offset` on X.
fn ray_at(offset: f32) -> Ray {
    Ray {
        origin: Vec3::new(offset, 0.0, 10.0),
        direction: Vec3::NEG_Z,
    }
}

#[test]
fn test_double_click_highlights_then_second_part() {
    // Fixture spacing is 8 units on X
    let mut model = fixtures::model_with(&["sole", "upper", "lace"]);

    let sole = model.pick_nearest(&ray_at(0.0), PICK_TOLERANCE).unwrap();
    assert_eq!(model.part(&sole).unwrap().name, "sole");
    model.highlight(&sole);

    let upper = model.pick_nearest(&ray_at(8.0), PICK_TOLERANCE).unwrap();
    assert_eq!(model.part(&upper).unwrap().name, "upper");
    model.highlight(&upper);

    // Independent highlights accumulate
    assert_eq!(model.highlighted_count(), 2);
    assert_eq!(model.part(&sole).unwrap().color, ACCENT);
    assert_eq!(model.part(&upper).unwrap().color, ACCENT);
}

#[test]
fn test_miss_click_sweeps_all_highlights() {
    let mut model = fixtures::model_with(&["sole", "upper", "lace"]);
    let ids: Vec<_> = model.parts().iter().map(|p| p.id.clone()).collect();
    let originals: Vec<_> = model.parts().iter().map(|p| p.color).collect();

    for id in &ids {
        model.highlight(id);
    }

    // Ray into empty space far from every part
    let miss = model.pick_nearest(&ray_at(500.0), PICK_TOLERANCE);
    assert!(miss.is_none());
    model.clear_highlights();

    for (id, original) in ids.iter().zip(&originals) {
        let part = model.part(id).unwrap();
        assert!(!part.highlighted);
        assert_eq!(part.color, *original);
    }
}

#[test]
fn test_directory_toggle_matches_viewport_pick() {
    let mut model = fixtures::model_with(&["sole", "upper"]);

    // Highlight via pick, un-highlight via the directory row
    let id = model.pick_nearest(&ray_at(0.0), PICK_TOLERANCE).unwrap();
    model.highlight(&id);
    assert!(model.part(&id).unwrap().highlighted);

    model.toggle_highlight(&id);
    assert!(!model.part(&id).unwrap().highlighted);
    assert_ne!(model.part(&id).unwrap().color, ACCENT);
}

#[test]
fn test_screen_ray_pick_through_default_camera() {
    // Part centered near the origin is visible from the (5,5,5) home pose
    let model = fixtures::model_with(&["sole"]);
    let camera = ArcBallCamera::new();
    let rect = viewport_rect();

    // The fixture triangle strictly contains the origin
    let screen = camera
        .project([0.0, 0.0, 0.0], rect)
        .expect("part in front of camera");
    let ray = camera.screen_ray(screen, rect);

    let hit = model.pick_nearest(&ray, PICK_TOLERANCE).unwrap();
    assert_eq!(model.part(&hit).unwrap().name, "sole");
}

#[test]
fn test_screen_ray_miss_through_default_camera() {
    let model = fixtures::model_with(&["sole"]);
    let camera = ArcBallCamera::new();
    let rect = viewport_rect();

    // Top-left corner looks well past the fixture triangle
    let ray = camera.screen_ray(rect.min, rect);
    assert!(model.pick_nearest(&ray, PICK_TOLERANCE).is_none());
}

#[test]
fn test_reload_resets_highlight_state() {
    let mut model = fixtures::model_with(&["sole", "upper"]);
    let id = model.pick_nearest(&ray_at(0.0), PICK_TOLERANCE).unwrap();
    model.highlight(&id);

    model.install(fixtures::loaded_model(&["sole", "upper"]));
    assert!(!model.any_highlighted());
    // Fresh install means fresh ids; the stale one no longer resolves
    assert!(model.part(&id).is_none());
}
