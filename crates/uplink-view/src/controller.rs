//! Scenario detail controller
//!
//! Owns the [`ViewState`] and mediates the two API operations:
//! - `load`: fetch the record for the current identifier
//! - `start`: ask the API for a play session
//!
//! Every fetch is stamped with a generation number. A settlement is applied
//! only while its generation is still the latest one issued, so a slow
//! response for an old identifier can never overwrite newer state.
//! The state lock is never held across an `.await`.

use crate::state::{RenderState, ViewError, ViewState};
use parking_lot::Mutex;
use std::sync::Arc;
use uplink_client::{ApiError, ScenarioApi};
use uplink_model::{Scenario, ScenarioId};

/// Result of the start action, handed to whoever owns navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Session created; the caller should move to the play route
    Started(ScenarioId),
    /// Session refused; the message is now the view's error
    Failed(String),
}

/// Proof that a fetch was issued, needed to settle it
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a load ticket must be settled"]
pub struct LoadTicket {
    generation: u64,
    id: ScenarioId,
}

impl LoadTicket {
    /// Generation this fetch was issued under
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identifier being fetched
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ScenarioId {
        &self.id
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: ViewState,
    current_id: Option<ScenarioId>,
    generation: u64,
}

/// Detail view controller
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ScenarioDetailController {
    api: Arc<dyn ScenarioApi>,
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for ScenarioDetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ScenarioDetailController")
            .field("current_id", &inner.current_id)
            .field("generation", &inner.generation)
            .field("state", &inner.state)
            .finish_non_exhaustive()
    }
}

impl ScenarioDetailController {
    /// Create an unmounted controller
    #[must_use]
    pub fn new(api: Arc<dyn ScenarioApi>) -> Self {
        Self {
            api,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Snapshot of the view state
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.inner.lock().state.clone()
    }

    /// Current render branch
    #[must_use]
    pub fn render(&self) -> RenderState {
        self.inner.lock().state.render()
    }

    /// Identifier the view is showing, if mounted
    #[must_use]
    pub fn current_id(&self) -> Option<ScenarioId> {
        self.inner.lock().current_id.clone()
    }

    /// Latest issued fetch generation
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.lock().generation
    }

    /// React to the route identifier; fetches only when it changed
    ///
    /// The first call after construction (or after [`unmount`](Self::unmount))
    /// always fetches. Returns whether a fetch was issued.
    pub async fn route_changed(&self, id: ScenarioId) -> bool {
        let unchanged = self.inner.lock().current_id.as_ref() == Some(&id);
        if unchanged {
            tracing::debug!("route id {:?} unchanged, no fetch", id.as_str());
            return false;
        }
        self.load(id).await;
        true
    }

    /// Fetch the scenario for `id` and settle the outcome
    pub async fn load(&self, id: ScenarioId) {
        let ticket = self.begin_load(id);
        let result = self.api.fetch_scenario(ticket.id()).await;
        self.settle_load(&ticket, result);
    }

    /// Mark a fetch as in flight and stamp it
    pub fn begin_load(&self, id: ScenarioId) -> LoadTicket {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        if inner.current_id.as_ref() != Some(&id) {
            // A record for another identifier must never render under this one
            inner.state.scenario = None;
        }
        inner.current_id = Some(id.clone());
        inner.state.loading = true;
        tracing::info!(
            "fetching scenario {:?} (generation {})",
            id.as_str(),
            inner.generation
        );
        LoadTicket {
            generation: inner.generation,
            id,
        }
    }

    /// Apply a fetch outcome if it is still the latest one
    ///
    /// Returns `false` when the ticket was superseded; nothing is written in
    /// that case, `loading` included.
    pub fn settle_load(&self, ticket: &LoadTicket, result: Result<Scenario, ApiError>) -> bool {
        let mut inner = self.inner.lock();
        if ticket.generation != inner.generation {
            tracing::debug!(
                "discarding stale fetch for {:?} (generation {}, latest {})",
                ticket.id.as_str(),
                ticket.generation,
                inner.generation
            );
            return false;
        }

        match result {
            Ok(scenario) => {
                tracing::info!("scenario {:?} loaded", ticket.id.as_str());
                inner.state.scenario = Some(scenario);
            }
            Err(err) => {
                tracing::warn!("fetch for {:?} failed: {}", ticket.id.as_str(), err);
                inner.state.error = Some(ViewError::from_fetch(&err));
            }
        }
        inner.state.loading = false;
        tracing::debug!("render branch now {}", inner.state.render().name());
        true
    }

    /// Ask the API to start a session for the current identifier
    ///
    /// Not gated on a loaded record. On success nothing is mutated; on
    /// failure the message becomes the view error and the action stays
    /// available. A failure that settles after the route moved on (or the
    /// view unmounted) is returned but not written to the state.
    pub async fn start(&self) -> StartOutcome {
        let (id, generation) = {
            let inner = self.inner.lock();
            (inner.current_id.clone().unwrap_or_default(), inner.generation)
        };
        tracing::info!("starting scenario {:?}", id.as_str());

        match self.api.start_scenario(&id).await {
            Ok(()) => {
                tracing::info!("scenario {:?} started", id.as_str());
                StartOutcome::Started(id)
            }
            Err(err) => {
                tracing::warn!("start for {:?} failed: {}", id.as_str(), err);
                let error = ViewError::from_start(&err);
                let message = error.text();
                let mut inner = self.inner.lock();
                if inner.generation == generation && inner.current_id.is_some() {
                    inner.state.error = Some(error);
                } else {
                    tracing::debug!(
                        "start failure for {:?} arrived after the view moved on",
                        id.as_str()
                    );
                }
                StartOutcome::Failed(message)
            }
        }
    }

    /// Tear down: forget state and invalidate any in-flight fetch
    pub fn unmount(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.current_id = None;
        inner.state = ViewState::default();
        tracing::debug!("unmounted (generation {})", inner.generation);
    }
}
