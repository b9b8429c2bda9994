//! Version-checked cache of the CPU meshes handed to the GL renderer.
//!
//! Rebuilt only when the model or overlay version changes: part meshes get
//! their effective color (accent while highlighted) written into the color
//! channel, and the overlay mesh gets its slider scales and anchor baked in.

use std::collections::HashMap;

use shared::PartId;

use crate::state::{ModelState, OverlayState};
use crate::viewport::mesh::MeshData;

/// Reserved id for the text overlay mesh; GLB part ids are uuids so this can
/// never collide.
pub const OVERLAY_MESH_ID: &str = "__overlay";

pub struct SceneCache {
    meshes: HashMap<PartId, MeshData>,
    versions: (u64, u64),
    rebuild_count: u64,
}

impl SceneCache {
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            versions: (u64::MAX, u64::MAX),
            rebuild_count: 0,
        }
    }

    pub fn is_valid(&self, model_version: u64, overlay_version: u64) -> bool {
        self.versions == (model_version, overlay_version)
    }

    pub fn rebuild(&mut self, model: &ModelState, overlay: &OverlayState) {
        self.meshes.clear();
        for part in model.parts() {
            let mut mesh = part.mesh.clone();
            mesh.set_color(part.color.to_array());
            self.meshes.insert(part.id.clone(), mesh);
        }
        if let Some(mesh) = overlay.scene_mesh() {
            self.meshes.insert(OVERLAY_MESH_ID.to_owned(), mesh);
        }
        self.versions = (model.version(), overlay.version());
        self.rebuild_count += 1;
        tracing::debug!(meshes = self.meshes.len(), "scene cache rebuilt");
    }

    pub fn meshes(&self) -> &HashMap<PartId, MeshData> {
        &self.meshes
    }

    /// Monotonic counter the GL renderer uses to decide when to re-upload.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

impl Default for SceneCache {
    fn default() -> Self {
        Self::new()
    }
}
