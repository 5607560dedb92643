//! Add-photo workflow for a single pod
//!
//! One manager exists per mounted pod detail view. It tracks the selected
//! file and optional caption, allows exactly one upload in flight at a
//! time, and keeps the selection on failure so the user can retry without
//! reselecting.

use selvy_core::{Image, ImageFile, PodId};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::repository::PodRepository;
use crate::store::{RemoteStore, StoreError};

#[derive(Error, Debug)]
pub enum AttachError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("an upload for this pod is already in flight")]
    UploadInFlight,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State of the add-photo form
#[derive(Debug, Clone, PartialEq)]
pub enum AttachState {
    /// Nothing selected
    Idle,
    /// A file (and optional caption) is ready to upload
    Selected {
        file: ImageFile,
        caption: Option<String>,
    },
    Uploading,
    /// Upload failed; the selection is retained for retry
    Failed {
        file: ImageFile,
        caption: Option<String>,
        reason: String,
    },
}

/// Manages the add-photo workflow for one pod
pub struct ImageAttachmentManager<S: RemoteStore> {
    pod: PodId,
    store: Arc<S>,
    repository: Arc<PodRepository<S>>,
    state: RwLock<AttachState>,
}

impl<S: RemoteStore> ImageAttachmentManager<S> {
    pub fn new(pod: PodId, store: Arc<S>, repository: Arc<PodRepository<S>>) -> Self {
        Self {
            pod,
            store,
            repository,
            state: RwLock::new(AttachState::Idle),
        }
    }

    pub fn pod(&self) -> PodId {
        self.pod
    }

    pub async fn state(&self) -> AttachState {
        self.state.read().await.clone()
    }

    /// Select a file, replacing any previous selection. A caption already
    /// entered (including on a failed attempt) is kept. Rejected while an
    /// upload is in flight: the selection must not erase the in-flight
    /// marker.
    pub async fn select_file(&self, file: ImageFile) -> Result<(), AttachError> {
        let mut state = self.state.write().await;
        let caption = match &*state {
            AttachState::Selected { caption, .. } | AttachState::Failed { caption, .. } => {
                caption.clone()
            }
            AttachState::Uploading => {
                warn!(pod = %self.pod, "Selection rejected while upload in flight");
                return Err(AttachError::UploadInFlight);
            }
            AttachState::Idle => None,
        };
        *state = AttachState::Selected { file, caption };
        Ok(())
    }

    /// Set or clear the optional caption for the current selection
    pub async fn set_caption(&self, text: Option<String>) {
        let mut state = self.state.write().await;
        match &mut *state {
            AttachState::Selected { caption, .. } | AttachState::Failed { caption, .. } => {
                *caption = text;
            }
            // No selection to caption yet
            _ => {}
        }
    }

    pub async fn clear_selection(&self) {
        let mut state = self.state.write().await;
        if !matches!(*state, AttachState::Uploading) {
            *state = AttachState::Idle;
        }
    }

    /// Upload the selected file
    ///
    /// Preconditions: a file is selected and no upload for this pod is in
    /// flight (a second attempt is rejected, never raced). On success the
    /// selection is cleared and the owning pod's view refreshed; on
    /// failure the selection is retained.
    pub async fn attach(&self) -> Result<Image, AttachError> {
        let (file, caption) = {
            let mut state = self.state.write().await;
            match std::mem::replace(&mut *state, AttachState::Uploading) {
                AttachState::Selected { file, caption }
                | AttachState::Failed { file, caption, .. } => (file, caption),
                AttachState::Uploading => return Err(AttachError::UploadInFlight),
                AttachState::Idle => {
                    *state = AttachState::Idle;
                    return Err(AttachError::NoFileSelected);
                }
            }
        };

        match self
            .store
            .upload_image(self.pod, file.clone(), caption.clone())
            .await
        {
            Ok(image) => {
                *self.state.write().await = AttachState::Idle;
                info!(pod = %self.pod, image = %image.id, "Image attached");
                self.repository.invalidate().await;
                Ok(image)
            }
            Err(e) => {
                warn!(pod = %self.pod, error = %e, "Image attach failed");
                *self.state.write().await = AttachState::Failed {
                    file,
                    caption,
                    reason: e.to_string(),
                };
                Err(AttachError::Store(e))
            }
        }
    }
}
