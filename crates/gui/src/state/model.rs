//! The loaded model: named parts, their materials, and reversible
//! highlighting.

use shared::{PartId, Rgb, ACCENT};
use uuid::Uuid;

use crate::asset::LoadedModel;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::{pick_triangle, ray_aabb, Aabb, Ray};

/// One selectable part of the model.
pub struct Part {
    /// Stable id, assigned at install time. Display names may repeat; ids
    /// never do.
    pub id: PartId,
    pub name: String,
    /// World-space geometry, color channel carries the base color.
    pub mesh: MeshData,
    /// Material color as imported.
    pub base_color: Rgb,
    /// Current material color (accent while highlighted).
    pub color: Rgb,
    /// Captured the first time the part is highlighted, restored on
    /// unhighlight. `None` until the part has been highlighted once.
    pub original_color: Option<Rgb>,
    pub highlighted: bool,
    pub aabb: Aabb,
}

#[derive(Default)]
pub struct ModelState {
    parts: Vec<Part>,
    name: Option<String>,
    version: u64,
}

impl ModelState {
    /// Replace the current model with a freshly loaded one. Reloading never
    /// appends; prior parts, ids, and highlights are discarded.
    pub fn install(&mut self, loaded: LoadedModel) {
        self.parts = loaded
            .parts
            .into_iter()
            .map(|p| {
                let aabb = Aabb::from_mesh(&p.mesh);
                Part {
                    id: Uuid::new_v4().to_string(),
                    name: p.name,
                    mesh: p.mesh,
                    base_color: p.base_color,
                    color: p.base_color,
                    original_color: None,
                    highlighted: false,
                    aabb,
                }
            })
            .collect();
        self.name = Some(loaded.name);
        self.version += 1;
    }

    pub fn clear(&mut self) {
        self.parts.clear();
        self.name = None;
        self.version += 1;
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Bumped on any visual change; the render cache keys off it.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Highlight a part: capture its current color (unless it already shows
    /// the accent), then recolor. No-op if the part is already highlighted
    /// or the id is stale.
    pub fn highlight(&mut self, id: &str) -> bool {
        let Some(part) = self.parts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if part.highlighted {
            return false;
        }
        if part.color != ACCENT {
            part.original_color = Some(part.color);
        }
        part.color = ACCENT;
        part.highlighted = true;
        self.version += 1;
        true
    }

    /// Restore a highlighted part to its captured color. Restoring a part
    /// that was never highlighted leaves its color untouched.
    pub fn unhighlight(&mut self, id: &str) -> bool {
        let Some(part) = self.parts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if !part.highlighted {
            return false;
        }
        if let Some(original) = part.original_color {
            part.color = original;
        }
        part.highlighted = false;
        self.version += 1;
        true
    }

    pub fn toggle_highlight(&mut self, id: &str) {
        let highlighted = self
            .parts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.highlighted);
        match highlighted {
            Some(true) => {
                self.unhighlight(id);
            }
            Some(false) => {
                self.highlight(id);
            }
            None => {}
        }
    }

    /// Restore every highlighted part. Returns how many were cleared.
    pub fn clear_highlights(&mut self) -> usize {
        let mut cleared = 0;
        for part in &mut self.parts {
            if part.highlighted {
                if let Some(original) = part.original_color {
                    part.color = original;
                }
                part.highlighted = false;
                cleared += 1;
            }
        }
        if cleared > 0 {
            self.version += 1;
        }
        cleared
    }

    pub fn any_highlighted(&self) -> bool {
        self.parts.iter().any(|p| p.highlighted)
    }

    pub fn highlighted_count(&self) -> usize {
        self.parts.iter().filter(|p| p.highlighted).count()
    }

    /// Nearest-part pick. An exact triangle hit gives the true distance; a
    /// ray that only passes through the tolerance band around a part's
    /// bounds still reports that part, at its box-entry distance, so thin
    /// parts stay clickable.
    pub fn pick_nearest(&self, ray: &Ray, tolerance: f32) -> Option<PartId> {
        let mut best: Option<(PartId, f32)> = None;
        for part in &self.parts {
            let Some(aabb_distance) = ray_aabb(ray, &part.aabb.expanded(tolerance)) else {
                continue;
            };
            let distance = match pick_triangle(ray, &part.mesh) {
                Some(hit) => hit.distance,
                None => aabb_distance,
            };
            if best.as_ref().is_none_or(|(_, d)| distance < *d) {
                best = Some((part.id.clone(), distance));
            }
        }
        best.map(|(id, _)| id)
    }
}
