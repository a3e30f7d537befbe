//! Testing utilities for the uplink workspace
//!
//! Shared fakes and fixtures:
//! - [`ScriptedApi`]: queued API results, optionally held until released
//! - [`RecordingNavigator`]: remembers every route it was sent to
//! - [`sample_scenario`]: a ready-made record

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::oneshot;
use uplink_client::{ApiError, ScenarioApi};
use uplink_model::{Scenario, ScenarioId};
use uplink_view::{Navigator, Route};

pub fn sample_scenario(id: &str) -> Scenario {
    Scenario::new(
        id,
        "Operation Glasswing",
        "red team operator",
        "hard",
        "Gain a foothold in the staging cluster without tripping the IDS.",
    )
}

enum Scripted<T> {
    Ready(T),
    Held(oneshot::Receiver<T>),
}

/// Handle that settles a held API call
#[must_use = "a held call never settles unless released"]
pub struct Release<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Release<T> {
    pub fn release(self, value: T) {
        // The caller may have been dropped already; nothing to settle then
        let _ = self.tx.send(value);
    }
}

/// Scripted [`ScenarioApi`]
///
/// Each call pops the next scripted result for its operation. Calls with
/// nothing scripted fail with a transport error.
#[derive(Default)]
pub struct ScriptedApi {
    fetches: Mutex<VecDeque<Scripted<Result<Scenario, ApiError>>>>,
    starts: Mutex<VecDeque<Scripted<Result<(), ApiError>>>>,
    fetch_calls: Mutex<Vec<ScenarioId>>,
    start_calls: Mutex<Vec<ScenarioId>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_fetch(&self, result: Result<Scenario, ApiError>) {
        self.fetches.lock().push_back(Scripted::Ready(result));
    }

    pub fn push_start(&self, result: Result<(), ApiError>) {
        self.starts.lock().push_back(Scripted::Ready(result));
    }

    /// Next fetch stays pending until the returned handle is released
    pub fn hold_fetch(&self) -> Release<Result<Scenario, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.fetches.lock().push_back(Scripted::Held(rx));
        Release { tx }
    }

    /// Next start stays pending until the returned handle is released
    pub fn hold_start(&self) -> Release<Result<(), ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.starts.lock().push_back(Scripted::Held(rx));
        Release { tx }
    }

    pub fn fetch_calls(&self) -> Vec<ScenarioId> {
        self.fetch_calls.lock().clone()
    }

    pub fn start_calls(&self) -> Vec<ScenarioId> {
        self.start_calls.lock().clone()
    }
}

async fn settle<T>(next: Option<Scripted<Result<T, ApiError>>>) -> Result<T, ApiError> {
    match next {
        Some(Scripted::Ready(result)) => result,
        Some(Scripted::Held(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::transport("held call dropped"))),
        None => Err(ApiError::transport("no scripted response")),
    }
}

#[async_trait]
impl ScenarioApi for ScriptedApi {
    async fn fetch_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        self.fetch_calls.lock().push(id.clone());
        let next = self.fetches.lock().pop_front();
        settle(next).await
    }

    async fn start_scenario(&self, id: &ScenarioId) -> Result<(), ApiError> {
        self.start_calls.lock().push(id.clone());
        let next = self.starts.lock().pop_front();
        settle(next).await
    }
}

/// [`Navigator`] that records routes instead of moving anywhere
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &Route) {
        self.routes.lock().push(route.clone());
    }
}

/// Yield to the runtime until `cond` holds
///
/// # Panics
/// If the condition is still false after many scheduler turns.
pub async fn yield_until(mut cond: impl FnMut() -> bool) {
    for _ in 0..10_000 {
        if cond() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
