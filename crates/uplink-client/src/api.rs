//! Collaborator contract consumed by the detail view

use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;
use uplink_model::{Scenario, ScenarioId};

/// Remote mission API
///
/// Implementations own retries and timeouts; callers issue exactly one
/// request per operation and never inspect the identifier.
#[async_trait]
pub trait ScenarioApi: Send + Sync {
    /// Fetch one scenario record
    ///
    /// # Errors
    /// - `ApiError::NotFound` if no record matches `id`
    /// - `ApiError::Transport` on network or service failure
    async fn fetch_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError>;

    /// Provision a play session for the scenario
    ///
    /// # Errors
    /// Same kinds as [`ScenarioApi::fetch_scenario`].
    async fn start_scenario(&self, id: &ScenarioId) -> Result<(), ApiError>;
}

#[async_trait]
impl<T: ScenarioApi + ?Sized> ScenarioApi for Arc<T> {
    async fn fetch_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        (**self).fetch_scenario(id).await
    }

    async fn start_scenario(&self, id: &ScenarioId) -> Result<(), ApiError> {
        (**self).start_scenario(id).await
    }
}
