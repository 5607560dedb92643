//! Create, update, and delete orchestration
//!
//! Every mutation validates its input first (an invalid draft never
//! reaches the store), dispatches to the remote store, and invalidates the
//! repository only after success is observed. Failures stay local: the
//! caller's draft is untouched and the edit state records the error so the
//! user can retry.

use selvy_core::{PodDraft, PodId, PodTypeCatalog, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::repository::PodRepository;
use crate::store::{RemoteStore, StoreError};

#[derive(Error, Debug)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("deletion requires explicit confirmation")]
    NotConfirmed,
}

/// Outcome of the user-facing confirmation step that guards deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Denied,
}

/// Edit-flow state of the controller
///
/// `Failed` keeps the editing context: the form stays open with the error
/// shown so the user can retry without losing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing { pod: PodId },
    Saving { pod: PodId },
    Failed { pod: PodId, reason: String },
}

impl EditState {
    /// True while the edit form should stay open
    pub fn is_editing(&self) -> bool {
        !matches!(self, EditState::Idle)
    }
}

/// Orchestrates pod mutations against the remote store
pub struct PodMutationController<S: RemoteStore> {
    store: Arc<S>,
    repository: Arc<PodRepository<S>>,
    catalog: PodTypeCatalog,
    state: RwLock<EditState>,
}

impl<S: RemoteStore> PodMutationController<S> {
    pub fn new(store: Arc<S>, repository: Arc<PodRepository<S>>, catalog: PodTypeCatalog) -> Self {
        Self {
            store,
            repository,
            catalog,
            state: RwLock::new(EditState::Idle),
        }
    }

    pub async fn edit_state(&self) -> EditState {
        self.state.read().await.clone()
    }

    /// Open the edit form for a pod
    pub async fn begin_edit(&self, pod: PodId) {
        *self.state.write().await = EditState::Editing { pod };
    }

    /// Close the edit form without saving
    pub async fn cancel_edit(&self) {
        *self.state.write().await = EditState::Idle;
    }

    /// Submit a new pod, optionally with an initial photo and care note
    ///
    /// Validation failures block dispatch entirely. The draft is taken by
    /// reference: a failed submission loses no form input.
    pub async fn create(&self, draft: &PodDraft) -> Result<PodId, MutationError> {
        let fields = draft.validate(&self.catalog)?;

        let pod = self
            .store
            .create_pod(fields, draft.care_note.clone(), draft.image.clone())
            .await?;

        info!(pod = %pod.id, name = %pod.name, "Pod created");
        self.repository.invalidate().await;
        Ok(pod.id)
    }

    /// Replace the mutable metadata fields of an existing pod
    ///
    /// On success the editing state is exited and the view refreshed; on
    /// failure the state stays in the editing flow with the error recorded.
    pub async fn update(&self, id: PodId, draft: &PodDraft) -> Result<(), MutationError> {
        let fields = draft.validate(&self.catalog)?;

        *self.state.write().await = EditState::Saving { pod: id };

        match self.store.update_pod(id, fields).await {
            Ok(_) => {
                *self.state.write().await = EditState::Idle;
                info!(pod = %id, "Pod updated");
                self.repository.invalidate().await;
                Ok(())
            }
            Err(e) => {
                warn!(pod = %id, error = %e, "Pod update failed");
                *self.state.write().await = EditState::Failed {
                    pod: id,
                    reason: e.to_string(),
                };
                Err(MutationError::Store(e))
            }
        }
    }

    /// Delete a pod; requires the explicit confirmation outcome
    ///
    /// On success the caller is expected to navigate away from any detail
    /// view of this id. On failure the pod remains listed.
    pub async fn delete(&self, id: PodId, confirmation: Confirmation) -> Result<(), MutationError> {
        if confirmation != Confirmation::Confirmed {
            return Err(MutationError::NotConfirmed);
        }

        self.store.delete_pod(id).await?;
        info!(pod = %id, "Pod deleted");
        self.repository.invalidate().await;
        Ok(())
    }
}
