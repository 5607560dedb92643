//! Selvy Core - Core types, pod type catalog, and draft validation
//!
//! This crate provides the foundational types for the Selvy system:
//! - Pod and image entities as served by the remote store
//! - The closed, externally-configured pod type catalog
//! - Form draft validation (required fields checked before dispatch)

pub mod draft;
pub mod pod;
pub mod types;

pub use draft::{PodDraft, PodFields, ValidationError};
pub use pod::{Image, ImageFile, ImageId, Pod, PodId};
pub use types::{PodType, PodTypeCatalog};
