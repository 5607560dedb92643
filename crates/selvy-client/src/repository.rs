//! In-memory view of the pod collection
//!
//! The repository caches the last fetched list, exposes list/detail reads,
//! and broadcasts a change notification whenever the view moves. All
//! mutation elsewhere in the system funnels into `invalidate()`; nothing
//! writes cached pod data directly.
//!
//! Overlapping refreshes are resolved with a fetch ticket: each fetch
//! takes a ticket before the remote call and its completion is applied
//! only if no later-ticketed fetch has already landed. A stale completion
//! (including one that arrives after the caller's view is gone) is
//! discarded rather than applied.

use selvy_core::{Pod, PodId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

use crate::store::RemoteStore;

/// Load state of the cached view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Never fetched
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; previously loaded pods stay visible (stale)
    Failed(String),
}

/// Snapshot of the cached pod collection
#[derive(Debug, Clone, PartialEq)]
pub struct PodListView {
    pub pods: Vec<Pod>,
    pub state: LoadState,
    /// Bumped on every applied successful fetch
    pub generation: u64,
}

impl PodListView {
    fn empty() -> Self {
        Self {
            pods: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
        }
    }
}

/// Outcome of a single-pod detail lookup
///
/// `NotFound` is a valid terminal display state, not an error: the id may
/// have been removed concurrently.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Pod),
    NotFound,
    Failed(String),
}

/// Change notification broadcast to subscribed views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodEvent {
    /// Cached view was marked stale; a re-fetch is underway
    Invalidated,
    /// A fetch landed and the view moved to this generation
    Refreshed { generation: u64 },
    RefreshFailed,
}

struct ViewInner {
    view: PodListView,
    /// Ticket of the most recently applied fetch completion
    applied_ticket: u64,
}

/// Cached view of the pod collection, refreshed from the remote store
pub struct PodRepository<S: RemoteStore> {
    store: Arc<S>,
    inner: RwLock<ViewInner>,
    next_ticket: AtomicU64,
    events: broadcast::Sender<PodEvent>,
}

impl<S: RemoteStore> PodRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            store,
            inner: RwLock::new(ViewInner {
                view: PodListView::empty(),
                applied_ticket: 0,
            }),
            next_ticket: AtomicU64::new(0),
            events,
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<PodEvent> {
        self.events.subscribe()
    }

    /// Clone of the current view
    pub async fn snapshot(&self) -> PodListView {
        self.inner.read().await.view.clone()
    }

    /// Current pods (possibly stale if the last fetch failed)
    pub async fn pods(&self) -> Vec<Pod> {
        self.inner.read().await.view.pods.clone()
    }

    /// Fetch the collection and apply the result if still relevant
    ///
    /// Returns the view state after this call. A completion that lost the
    /// race to a later fetch leaves the view untouched.
    pub async fn refresh(&self) -> LoadState {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut inner = self.inner.write().await;
            if inner.applied_ticket < ticket {
                inner.view.state = LoadState::Loading;
            }
        }
        debug!(ticket, "Fetching pod list");

        let result = self.store.list_pods().await;

        let mut inner = self.inner.write().await;
        if inner.applied_ticket >= ticket {
            debug!(
                ticket,
                applied = inner.applied_ticket,
                "Discarding stale fetch completion"
            );
            return inner.view.state.clone();
        }
        inner.applied_ticket = ticket;

        match result {
            Ok(pods) => {
                inner.view.generation += 1;
                inner.view.pods = pods;
                inner.view.state = LoadState::Loaded;
                info!(
                    generation = inner.view.generation,
                    count = inner.view.pods.len(),
                    "Pod list refreshed"
                );
                let _ = self.events.send(PodEvent::Refreshed {
                    generation: inner.view.generation,
                });
            }
            Err(e) => {
                warn!(error = %e, "Pod list refresh failed");
                inner.view.state = LoadState::Failed(e.to_string());
                let _ = self.events.send(PodEvent::RefreshFailed);
            }
        }
        inner.view.state.clone()
    }

    /// Mark the cached view stale and trigger a re-fetch
    pub async fn invalidate(&self) {
        let _ = self.events.send(PodEvent::Invalidated);
        self.refresh().await;
    }

    /// Detail lookup by id
    ///
    /// The store exposes no get-by-id endpoint, so this fetches the full
    /// list and filters client-side.
    pub async fn get_pod(&self, id: PodId) -> Lookup {
        let state = self.refresh().await;
        if let LoadState::Failed(reason) = state {
            return Lookup::Failed(reason);
        }

        let inner = self.inner.read().await;
        match inner.view.pods.iter().find(|p| p.id == id) {
            Some(pod) => Lookup::Found(pod.clone()),
            None => Lookup::NotFound,
        }
    }
}
