//! Deterministic pod type to 3D model mapping
//!
//! The catalog holds a fixed, ordered list of models. A pod's type string
//! selects one by summing its character codes modulo the catalog length,
//! so the same type always renders with the same model without storing a
//! choice server-side.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ModelCatalogError {
    #[error("model catalog must contain at least one model")]
    Empty,
}

/// Identifier of one of the configured 3D models
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub String);

impl ModelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A configured model: identifier, asset path, and default orientation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: ModelId,
    /// Path handed to the model loader (e.g. "/models/model1.glb")
    pub path: String,
    /// Base rotation in radians (x, y, z) applied before pointer offsets.
    /// Some assets need a yaw offset to face the viewer.
    #[serde(default)]
    pub base_rotation: [f32; 3],
}

impl ModelSpec {
    pub fn base_rotation(&self) -> Vec3 {
        Vec3::from_array(self.base_rotation)
    }
}

/// Fixed, ordered list of models available to the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(rename = "model")]
    models: Vec<ModelSpec>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: vec![
                ModelSpec {
                    id: ModelId("model1".to_string()),
                    path: "/models/model1.glb".to_string(),
                    base_rotation: [0.0, 0.0, 0.0],
                },
                ModelSpec {
                    id: ModelId("model2".to_string()),
                    path: "/models/model2.glb".to_string(),
                    // This asset faces away from the camera by default
                    base_rotation: [0.0, 4.0, 0.0],
                },
            ],
        }
    }
}

impl ModelCatalog {
    pub fn new(models: Vec<ModelSpec>) -> Result<Self, ModelCatalogError> {
        if models.is_empty() {
            return Err(ModelCatalogError::Empty);
        }
        Ok(Self { models })
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read model catalog from {}", path.display()))?;
        let catalog: ModelCatalog =
            toml::from_str(&content).context("Failed to parse model catalog")?;
        if catalog.models.is_empty() {
            anyhow::bail!("model catalog must contain at least one model");
        }
        info!(
            path = %path.display(),
            count = catalog.models.len(),
            "Loaded model catalog"
        );
        Ok(catalog)
    }

    /// Assign a model to a pod type string
    ///
    /// Sums the UTF-16 code units of the type and takes the sum modulo the
    /// catalog length. Pure and stable: the same type always yields the
    /// same model. An empty type yields `None` and the caller omits the
    /// interactive viewer.
    pub fn assign(&self, pod_type: &str) -> Option<&ModelSpec> {
        if pod_type.is_empty() {
            return None;
        }
        let sum: u32 = pod_type.encode_utf16().map(u32::from).sum();
        let index = sum as usize % self.models.len();
        self.models.get(index)
    }

    pub fn get(&self, id: &ModelId) -> Option<&ModelSpec> {
        self.models.iter().find(|m| &m.id == id)
    }

    pub fn models(&self) -> &[ModelSpec] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
