//! GLB/glTF import: flattens the scene graph into a list of named, world-space
//! parts ready for upload to the renderer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use glam::Mat4;
use thiserror::Error;

use shared::Rgb;

use crate::viewport::mesh::{self, MeshData};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("no renderable meshes in asset")]
    Empty,
}

/// One named part extracted from the asset, geometry already in world space.
pub struct PartData {
    pub name: String,
    pub mesh: MeshData,
    pub base_color: Rgb,
}

pub struct LoadedModel {
    pub name: String,
    pub parts: Vec<PartData>,
}

/// Read a GLB file reporting byte progress in percent, then parse it.
pub fn load_glb(
    path: &Path,
    progress: impl FnMut(f32),
) -> Result<LoadedModel, AssetError> {
    let bytes = read_with_progress(path, progress)?;
    let mut model = load_glb_bytes(&bytes)?;
    model.name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_owned());
    Ok(model)
}

/// Parse GLB (or embedded glTF) bytes into named parts.
pub fn load_glb_bytes(data: &[u8]) -> Result<LoadedModel, AssetError> {
    let (document, buffers, _images) = gltf::import_slice(data)?;

    let mut parts = Vec::new();
    let scene = document.default_scene().or_else(|| document.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                collect_parts(&node, Mat4::IDENTITY, &buffers, &mut parts);
            }
        }
        None => {
            // Some exporters omit the scene list entirely
            for node in document.nodes() {
                collect_parts(&node, Mat4::IDENTITY, &buffers, &mut parts);
            }
        }
    }

    if parts.is_empty() {
        return Err(AssetError::Empty);
    }

    tracing::debug!(parts = parts.len(), "parsed glTF asset");
    Ok(LoadedModel {
        name: "model".to_owned(),
        parts,
    })
}

fn collect_parts(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<PartData>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(gltf_mesh) = node.mesh() {
        let primitive_count = gltf_mesh.primitives().len();
        for (i, primitive) in gltf_mesh.primitives().enumerate() {
            let base_name = gltf_mesh
                .name()
                .or_else(|| node.name())
                .unwrap_or("Part");
            let name = if primitive_count > 1 {
                format!("{base_name}_{i}")
            } else {
                base_name.to_owned()
            };
            if let Some(part) = load_primitive(&primitive, buffers, &world, name) {
                out.push(part);
            }
        }
    }

    for child in node.children() {
        collect_parts(&child, world, buffers, out);
    }
}

fn load_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    world: &Mat4,
    name: String,
) -> Option<PartData> {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        tracing::debug!(name, mode = ?primitive.mode(), "skipping non-triangle primitive");
        return None;
    }

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }

    let indices: Vec<u32> = match reader.read_indices() {
        Some(iter) => iter.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(iter) => iter.collect(),
        None => mesh::flat_normals(&positions, &indices),
    };

    let base = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    let base_color = Rgb::new(base[0], base[1], base[2]);

    let local = MeshData::from_arrays(&positions, &normals, indices, base_color.to_array());
    Some(PartData {
        name,
        mesh: local.transformed(world),
        base_color,
    })
}

/// Read the whole file in chunks, calling `progress` with 0..=100 percent.
pub fn read_with_progress(
    path: &Path,
    mut progress: impl FnMut(f32),
) -> Result<Vec<u8>, AssetError> {
    let io_err = |source| AssetError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let total = file.metadata().map_err(io_err)?.len();

    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = [0_u8; 64 * 1024];
    loop {
        let n = file.read(&mut chunk).map_err(io_err)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        let pct = if total > 0 {
            bytes.len() as f32 / total as f32 * 100.0
        } else {
            100.0
        };
        progress(pct.min(100.0));
    }
    progress(100.0);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            load_glb_bytes(b"definitely not a glb"),
            Err(AssetError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_extracts_named_parts_in_order() {
        let glb = fixtures::tiny_glb(&[
            ("sole", [0.1, 0.1, 0.1, 1.0]),
            ("upper", [0.6, 0.3, 0.1, 1.0]),
            ("lace", [0.9, 0.9, 0.9, 1.0]),
        ]);
        let model = load_glb_bytes(&glb).unwrap();
        let names: Vec<_> = model.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["sole", "upper", "lace"]);
    }

    #[test]
    fn test_parse_extracts_base_color() {
        let glb = fixtures::tiny_glb(&[("sole", [0.6, 0.3, 0.1, 1.0])]);
        let model = load_glb_bytes(&glb).unwrap();
        let c = model.parts[0].base_color;
        assert!(c.approx_eq(Rgb::new(0.6, 0.3, 0.1), 1e-5));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_glb(Path::new("/nonexistent/shoe.glb"), |_| {}),
            Err(AssetError::Io { .. })
        ));
    }
}
