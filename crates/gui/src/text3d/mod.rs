//! 3D text tessellation. Glyph outlines are triangulated into flat meshes
//! facing +Z; placement and scaling happen later in the render cache so
//! slider changes never re-tessellate.

use std::path::Path;

use meshtext::{MeshGenerator, MeshText, TextSection};
use thiserror::Error;

use crate::viewport::mesh::MeshData;

/// Glyph height in world units.
pub const TEXT_SIZE: f32 = 0.1;

/// Fixed world-space anchor of the overlay, near the model's front.
pub const OVERLAY_OFFSET: [f32; 3] = [-0.2, 0.1, 0.7];

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("font tessellation failed: {0}")]
    Tessellation(String),
}

pub struct TextTessellator {
    font: &'static [u8],
}

impl TextTessellator {
    pub fn from_path(path: &Path) -> Result<Self, TextError> {
        let bytes = std::fs::read(path).map_err(|source| TextError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        // The generator wants a 'static font slice and we keep one font per
        // session, so leaking the buffer is fine.
        Self {
            font: Box::leak(bytes.into_boxed_slice()),
        }
    }

    /// Triangulate `text` into an unscaled, untinted mesh at the origin.
    pub fn tessellate(&mut self, text: &str) -> Result<MeshData, TextError> {
        let mut generator = MeshGenerator::new(self.font);
        let transform = glam::Mat4::from_scale(glam::Vec3::splat(TEXT_SIZE)).to_cols_array();
        let mesh: MeshText = generator
            .generate_section(text, true, Some(&transform))
            .map_err(|e| TextError::Tessellation(format!("{e:?}")))?;
        Ok(flat_mesh(&mesh.vertices))
    }
}

/// Wrap a flat (z = 0) triangle soup into MeshData with +Z normals and a
/// placeholder color; the cache tints it with the picker color.
fn flat_mesh(positions: &[f32]) -> MeshData {
    let vertex_count = positions.len() / 3;
    let mut vertices = Vec::with_capacity(vertex_count * 9);
    for p in positions.chunks_exact(3) {
        vertices.extend_from_slice(&[p[0], p[1], p[2], 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }
    MeshData {
        vertices,
        indices: (0..vertex_count as u32).collect(),
    }
}
