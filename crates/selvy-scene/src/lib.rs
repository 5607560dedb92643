//! Selvy Scene - Model assignment and interactive rotation
//!
//! This crate provides the presentation side of the pod detail view:
//! - Deterministic assignment of a 3D model to a pod based on its type
//! - The pointer-driven rotation controller composed with per-model base
//!   orientations
//! - The model loader seam (load-by-path collaborator with preload hints)
//!
//! Rendering itself is out of scope; consumers feed the resulting
//! rotation into whatever scene graph the loader produced.

pub mod loader;
pub mod models;
pub mod rotation;
pub mod theme;
pub mod viewer;

pub use loader::{preload_catalog, ModelLoader};
pub use models::{ModelCatalog, ModelCatalogError, ModelId, ModelSpec};
pub use rotation::{PointerRotationController, RotationLimits, SurfaceRect};
pub use theme::{HoverState, Palette, StateColors};
pub use viewer::PodViewer;
