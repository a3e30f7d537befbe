//! Page host: wires the controller to a navigator
//!
//! The controller reports the start outcome as a value; this host is the
//! one place that turns `Started` into navigation.

use crate::controller::{ScenarioDetailController, StartOutcome};
use crate::navigation::{Navigator, Route};
use crate::screen::DetailScreen;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uplink_client::ScenarioApi;
use uplink_model::ScenarioId;

/// Scenario detail page
#[derive(Debug)]
pub struct ScenarioDetailPage<N> {
    controller: ScenarioDetailController,
    navigator: N,
    departed: AtomicBool,
}

impl<N: Navigator> ScenarioDetailPage<N> {
    /// Create page over an API and a navigator
    #[must_use]
    pub fn new(api: Arc<dyn ScenarioApi>, navigator: N) -> Self {
        Self {
            controller: ScenarioDetailController::new(api),
            navigator,
            departed: AtomicBool::new(false),
        }
    }

    /// Underlying controller
    #[inline]
    #[must_use]
    pub fn controller(&self) -> &ScenarioDetailController {
        &self.controller
    }

    /// Navigator the page hands control to
    #[inline]
    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// True once the page navigated to a play session
    #[must_use]
    pub fn has_departed(&self) -> bool {
        self.departed.load(Ordering::SeqCst)
    }

    /// Mount with the router's identifier (may be absent)
    pub async fn mount(&self, route_param: Option<&str>) {
        self.departed.store(false, Ordering::SeqCst);
        self.controller
            .route_changed(ScenarioId::from_route(route_param))
            .await;
    }

    /// Start control activated
    ///
    /// Returns `None` if the page already navigated away. Otherwise the
    /// outcome; on `Started` the navigator has been called exactly once.
    pub async fn press_start(&self) -> Option<StartOutcome> {
        if self.has_departed() {
            tracing::debug!("start pressed after departure, ignored");
            return None;
        }

        let outcome = self.controller.start().await;
        if let StartOutcome::Started(id) = &outcome {
            if !self.departed.swap(true, Ordering::SeqCst) {
                let route = Route::Play(id.clone());
                tracing::info!("navigating to {}", route);
                self.navigator.navigate_to(&route);
                self.controller.unmount();
            }
        }
        Some(outcome)
    }

    /// "Return to Index" link
    pub fn return_to_index(&self) {
        self.departed.store(true, Ordering::SeqCst);
        self.navigator.navigate_to(&Route::ScenarioIndex);
        self.controller.unmount();
    }

    /// Presentation model for the current state
    #[must_use]
    pub fn screen(&self) -> DetailScreen {
        let id = self.controller.current_id().unwrap_or_default();
        DetailScreen::build(&self.controller.render(), &id)
    }
}
