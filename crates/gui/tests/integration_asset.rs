//! Integration tests for GLB import: the in-memory GLB fixture goes through
//! the same parse path as a real file.

use partview_gui_lib::asset::{load_glb_bytes, AssetError};
use partview_gui_lib::fixtures;
use partview_gui_lib::validation::MeshValidator;
use shared::Rgb;

#[test]
fn test_three_part_shoe_imports_in_scene_order() {
    let glb = fixtures::tiny_glb(&[
        ("sole", [0.15, 0.15, 0.15, 1.0]),
        ("upper", [0.55, 0.27, 0.07, 1.0]),
        ("lace", [0.9, 0.9, 0.9, 1.0]),
    ]);

    let model = load_glb_bytes(&glb).unwrap();
    assert_eq!(model.parts.len(), 3);

    let names: Vec<_> = model.parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["sole", "upper", "lace"]);
}

#[test]
fn test_imported_meshes_are_well_formed() {
    let glb = fixtures::tiny_glb(&[("sole", [0.2, 0.2, 0.2, 1.0]), ("lace", [1.0, 1.0, 1.0, 1.0])]);
    let model = load_glb_bytes(&glb).unwrap();

    for part in &model.parts {
        let v = MeshValidator::new(&part.mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "{}: {:?}", part.name, errors);
        assert_eq!(v.triangle_count(), 1);
    }
}

#[test]
fn test_base_color_factor_lands_in_color_channel() {
    let glb = fixtures::tiny_glb(&[("upper", [0.55, 0.27, 0.07, 1.0])]);
    let model = load_glb_bytes(&glb).unwrap();

    let part = &model.parts[0];
    assert!(part.base_color.approx_eq(Rgb::new(0.55, 0.27, 0.07), 1e-5));
    let v = MeshValidator::new(&part.mesh);
    assert!(v.uses_color(part.base_color, 1e-5));
}

#[test]
fn test_parts_occupy_distinct_bounds() {
    let glb = fixtures::tiny_glb(&[("a", [0.5; 4]), ("b", [0.5; 4])]);
    let model = load_glb_bytes(&glb).unwrap();

    let a = MeshValidator::new(&model.parts[0].mesh).aabb();
    let b = MeshValidator::new(&model.parts[1].mesh).aabb();
    assert!(a.max.x < b.min.x);
}

#[test]
fn test_scene_without_meshes_is_rejected() {
    let glb = glb_without_meshes();
    assert!(matches!(load_glb_bytes(&glb), Err(AssetError::Empty)));
}

#[test]
fn test_truncated_bytes_are_a_parse_error() {
    let mut glb = fixtures::tiny_glb(&[("sole", [0.2, 0.2, 0.2, 1.0])]);
    glb.truncate(20);
    assert!(matches!(load_glb_bytes(&glb), Err(AssetError::Parse(_))));
}

/// A valid GLB whose scene contains a single empty node.
fn glb_without_meshes() -> Vec<u8> {
    let root = serde_json::json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "name": "empty" }]
    });
    let mut json = serde_json::to_vec(&root).unwrap();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }

    let total = 12 + 8 + json.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(&0x4654_6C67_u32.to_le_bytes());
    glb.extend_from_slice(&2_u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F_534A_u32.to_le_bytes());
    glb.extend_from_slice(&json);
    glb
}
