//! Remote store contract
//!
//! The remote store is an external collaborator; this trait is its shape
//! as seen from the client. Every method is a suspension point and nothing
//! else in the system suspends.

use async_trait::async_trait;
use selvy_core::{Image, ImageFile, Pod, PodFields, PodId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store rejected request with status {code}")]
    Status { code: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("pod not found")]
    NotFound,
}

/// Request/response contract of the remote pod store
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// `GET /api/pods` - the full collection, nested images included
    async fn list_pods(&self) -> Result<Vec<Pod>, StoreError>;

    /// `POST /api/pods` - multipart create, optionally with an initial
    /// photo and care note. The store assigns the id.
    async fn create_pod(
        &self,
        fields: PodFields,
        care_note: Option<String>,
        image: Option<ImageFile>,
    ) -> Result<Pod, StoreError>;

    /// `PUT /api/pods/{id}` - replace the mutable metadata fields
    async fn update_pod(&self, id: PodId, fields: PodFields) -> Result<Pod, StoreError>;

    /// `DELETE /api/pods/{id}` - irreversible
    async fn delete_pod(&self, id: PodId) -> Result<(), StoreError>;

    /// `POST /api/pods/{id}/images` - multipart image upload
    async fn upload_image(
        &self,
        id: PodId,
        file: ImageFile,
        description: Option<String>,
    ) -> Result<Image, StoreError>;
}
