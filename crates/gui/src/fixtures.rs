//! Test fixtures shared by unit and integration tests.

use shared::Rgb;

use crate::asset::{LoadedModel, PartData};
use crate::state::model::ModelState;
use crate::viewport::mesh::MeshData;

/// A single triangle around `(offset, 0, 0)` in the XY plane, large enough
/// that a ray through its offset point lands strictly inside.
pub fn triangle_mesh(offset: f32, color: Rgb) -> MeshData {
    let positions = [
        [offset - 1.0, -1.0, 0.0],
        [offset + 3.0, -1.0, 0.0],
        [offset - 1.0, 3.0, 0.0],
    ];
    let normals = [[0.0, 0.0, 1.0]; 3];
    MeshData::from_arrays(&positions, &normals, vec![0, 1, 2], color.to_array())
}

/// Axis-aligned quad spanning `[0, w] x [0, h]` at z = 0. Stands in for
/// tessellated text because its extents are exact.
pub fn quad_mesh(w: f32, h: f32, color: Rgb) -> MeshData {
    let positions = [
        [0.0, 0.0, 0.0],
        [w, 0.0, 0.0],
        [w, h, 0.0],
        [0.0, h, 0.0],
    ];
    let normals = [[0.0, 0.0, 1.0]; 4];
    MeshData::from_arrays(&positions, &normals, vec![0, 1, 2, 0, 2, 3], color.to_array())
}

pub fn part_data(name: &str, offset: f32, color: Rgb) -> PartData {
    PartData {
        name: name.to_owned(),
        mesh: triangle_mesh(offset, color),
        base_color: color,
    }
}

/// One triangle part per name, spaced 8 units apart on X so their bounds
/// never overlap.
pub fn loaded_model(names: &[&str]) -> LoadedModel {
    let parts = names
        .iter()
        .enumerate()
        .map(|(i, name)| part_data(name, i as f32 * 8.0, Rgb::new(0.5, 0.5, 0.5)))
        .collect();
    LoadedModel {
        name: "fixture".to_owned(),
        parts,
    }
}

/// A `ModelState` with the given parts already installed.
pub fn model_with(names: &[&str]) -> ModelState {
    let mut model = ModelState::default();
    model.install(loaded_model(names));
    model
}

// ── In-memory GLB builder ────────────────────────────────────

/// Build a minimal but valid GLB: one node/mesh per entry, each a single
/// triangle with the given base color factor. Lets the asset tests exercise
/// the real import path without binary files in the repo.
pub fn tiny_glb(parts: &[(&str, [f32; 4])]) -> Vec<u8> {
    // Per part: 3 vec3 positions (36 bytes) + 3 u16 indices (6 bytes) + 2 pad
    const BLOCK: usize = 44;

    let mut bin: Vec<u8> = Vec::with_capacity(parts.len() * BLOCK);
    let mut buffer_views = Vec::new();
    let mut accessors = Vec::new();
    let mut materials = Vec::new();
    let mut meshes = Vec::new();
    let mut nodes = Vec::new();

    for (i, (name, color)) in parts.iter().enumerate() {
        let o = i as f32 * 8.0;
        let positions: [[f32; 3]; 3] = [[o, 0.0, 0.0], [o + 1.0, 0.0, 0.0], [o, 1.0, 0.0]];

        let pos_offset = bin.len();
        for p in &positions {
            for c in p {
                bin.extend_from_slice(&c.to_le_bytes());
            }
        }
        let idx_offset = bin.len();
        for idx in [0_u16, 1, 2] {
            bin.extend_from_slice(&idx.to_le_bytes());
        }
        bin.extend_from_slice(&[0, 0]); // align next block to 4

        buffer_views.push(serde_json::json!({
            "buffer": 0, "byteOffset": pos_offset, "byteLength": 36
        }));
        buffer_views.push(serde_json::json!({
            "buffer": 0, "byteOffset": idx_offset, "byteLength": 6
        }));

        accessors.push(serde_json::json!({
            "bufferView": 2 * i, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [o, 0.0, 0.0], "max": [o + 1.0, 1.0, 0.0]
        }));
        accessors.push(serde_json::json!({
            "bufferView": 2 * i + 1, "componentType": 5123, "count": 3, "type": "SCALAR"
        }));

        materials.push(serde_json::json!({
            "pbrMetallicRoughness": { "baseColorFactor": color }
        }));
        meshes.push(serde_json::json!({
            "name": name,
            "primitives": [{
                "attributes": { "POSITION": 2 * i },
                "indices": 2 * i + 1,
                "material": i
            }]
        }));
        nodes.push(serde_json::json!({ "mesh": i, "name": name }));
    }

    let root = serde_json::json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": (0..parts.len()).collect::<Vec<_>>() }],
        "nodes": nodes,
        "meshes": meshes,
        "materials": materials,
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [{ "byteLength": bin.len() }]
    });

    let mut json = serde_json::to_vec(&root).expect("fixture json");
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(&0x4654_6C67_u32.to_le_bytes()); // "glTF"
    glb.extend_from_slice(&2_u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());

    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F_534A_u32.to_le_bytes()); // "JSON"
    glb.extend_from_slice(&json);

    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x004E_4942_u32.to_le_bytes()); // "BIN\0"
    glb.extend_from_slice(&bin);

    glb
}
