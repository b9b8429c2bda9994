use glam::{Mat3, Mat4, Vec3};

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Build from separate attribute arrays with a single uniform color.
    pub fn from_arrays(
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
        indices: Vec<u32>,
        color: [f32; 3],
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        let mut vertices = Vec::with_capacity(positions.len() * 9);
        for (p, n) in positions.iter().zip(normals) {
            vertices.extend_from_slice(&[
                p[0], p[1], p[2], n[0], n[1], n[2], color[0], color[1], color[2],
            ]);
        }
        Self { vertices, indices }
    }

    /// Overwrite the color channel of every vertex.
    pub fn set_color(&mut self, color: [f32; 3]) {
        for v in self.vertices.chunks_exact_mut(9) {
            v[6] = color[0];
            v[7] = color[1];
            v[8] = color[2];
        }
    }

    /// Return a copy with positions transformed by `transform` and normals by
    /// its inverse-transpose (renormalized, so non-uniform scale is safe).
    pub fn transformed(&self, transform: &Mat4) -> Self {
        let normal_matrix = Mat3::from_mat4(transform.inverse().transpose());
        let mut out = self.clone();
        for v in out.vertices.chunks_exact_mut(9) {
            let p = transform.transform_point3(Vec3::new(v[0], v[1], v[2]));
            let n = (normal_matrix * Vec3::new(v[3], v[4], v[5])).normalize_or_zero();
            v[0] = p.x;
            v[1] = p.y;
            v[2] = p.z;
            v[3] = n.x;
            v[4] = n.y;
            v[5] = n.z;
        }
        out
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Primitive generation (test fixtures and fallback geometry) ──

pub fn cube(w: f32, h: f32, d: f32, color: [f32; 3]) -> MeshData {
    let hw = w * 0.5;
    let hh = h * 0.5;
    let hd = d * 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Front (+Z)
        ([Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)], Vec3::X),
        // Left (-X)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            vertices.extend_from_slice(&[v.x, v.y, v.z, normal.x, normal.y, normal.z, color[0], color[1], color[2]]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Per-triangle flat normals for a position-only triangle soup. Used when a
/// GLB primitive ships without a NORMAL attribute.
pub fn flat_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0_f32; 3]; positions.len()];
    for tri in indices.chunks_exact(3) {
        let v0 = Vec3::from(positions[tri[0] as usize]);
        let v1 = Vec3::from(positions[tri[1] as usize]);
        let v2 = Vec3::from(positions[tri[2] as usize]);
        let n = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        for &i in tri {
            normals[i as usize] = [n.x, n.y, n.z];
        }
    }
    normals
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.62_f32, 0.62, 0.62, opacity];
    let origin_color_x = [0.7_f32, 0.35, 0.35, opacity];
    let origin_color_z = [0.35_f32, 0.35, 0.7, opacity];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 { origin_color_z } else { grid_color };
        // Line along Z
        push_line_vert(&mut vertices, f, 0.0, -extent, color);
        push_line_vert(&mut vertices, f, 0.0, extent, color);

        let color = if i == 0 { origin_color_x } else { grid_color };
        // Line along X
        push_line_vert(&mut vertices, -extent, 0.0, f, color);
        push_line_vert(&mut vertices, extent, 0.0, f, color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_color_rewrites_every_vertex() {
        let mut m = cube(1.0, 1.0, 1.0, [0.2, 0.2, 0.2]);
        m.set_color([1.0, 0.0, 0.498]);
        for v in m.vertices.chunks_exact(9) {
            assert_eq!(&v[6..9], &[1.0, 0.0, 0.498]);
        }
    }

    #[test]
    fn test_transformed_moves_positions_not_normals() {
        let m = cube(1.0, 1.0, 1.0, [1.0; 3]);
        let t = m.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        // First vertex position shifted by 5 on X
        assert!((t.vertices[0] - (m.vertices[0] + 5.0)).abs() < 1e-6);
        // Normal unchanged by pure translation
        assert_eq!(&t.vertices[3..6], &m.vertices[3..6]);
    }

    #[test]
    fn test_transformed_renormalizes_under_scale() {
        let m = cube(1.0, 1.0, 1.0, [1.0; 3]);
        let t = m.transformed(&Mat4::from_scale(Vec3::new(3.0, 1.0, 1.0)));
        for v in t.vertices.chunks_exact(9) {
            let len = (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_flat_normals_point_out_of_winding() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = flat_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert!((n[2] - 1.0).abs() < 1e-6);
        }
    }
}
