//! Selvy Client - Pod lifecycle controller
//!
//! Keeps a local view of the pod collection synchronized with the remote
//! store. All mutation flows through the controllers here and ends in a
//! repository invalidation; nothing mutates cached pod data directly.
//!
//! - [`store::RemoteStore`] - the remote store contract and its HTTP
//!   implementation
//! - [`repository::PodRepository`] - cached list/detail view with
//!   invalidation and change notification
//! - [`mutation::PodMutationController`] - create/update/delete
//! - [`attachment::ImageAttachmentManager`] - per-pod add-photo workflow

pub mod attachment;
pub mod http;
pub mod mutation;
pub mod repository;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

pub use attachment::{AttachError, AttachState, ImageAttachmentManager};
pub use http::{HttpRemoteStore, StoreConfig};
pub use mutation::{Confirmation, EditState, MutationError, PodMutationController};
pub use repository::{LoadState, Lookup, PodEvent, PodListView, PodRepository};
pub use store::{RemoteStore, StoreError};
