//! Interactive viewer state for a single pod
//!
//! Binds the model assigned to a pod's type to a pointer rotation
//! controller. The detail view constructs one of these per mounted pod;
//! the state is not persisted across remounts.

use glam::{Vec2, Vec3};
use selvy_core::Pod;

use crate::models::{ModelCatalog, ModelSpec};
use crate::rotation::{PointerRotationController, RotationLimits, SurfaceRect};

/// Viewer state for one pod: assigned model plus rotation controller
#[derive(Debug, Clone)]
pub struct PodViewer {
    model: ModelSpec,
    controller: PointerRotationController,
}

impl PodViewer {
    /// Build a viewer for a pod type, or `None` when no model is assigned
    /// (empty type) and the caller should omit the viewer entirely.
    pub fn for_type(catalog: &ModelCatalog, limits: RotationLimits, pod_type: &str) -> Option<Self> {
        let model = catalog.assign(pod_type)?.clone();
        Some(Self {
            model,
            controller: PointerRotationController::new(limits),
        })
    }

    pub fn for_pod(catalog: &ModelCatalog, limits: RotationLimits, pod: &Pod) -> Option<Self> {
        Self::for_type(catalog, limits, &pod.pod_type)
    }

    pub fn model(&self) -> &ModelSpec {
        &self.model
    }

    pub fn pointer_move(&mut self, cursor: Vec2, surface: Option<SurfaceRect>) {
        self.controller.pointer_move(cursor, surface);
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    /// Rotation to apply this render: model base plus pointer offset
    pub fn current_rotation(&self) -> Vec3 {
        self.controller.rotation(self.model.base_rotation())
    }
}
