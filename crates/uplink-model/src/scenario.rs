//! Scenario record as served by the mission API

use crate::difficulty::Difficulty;
use crate::id::ScenarioId;
use serde::{Deserialize, Serialize};

/// A playable mission
///
/// Read-only to the detail view: fetched fresh on every mount and
/// dropped when the view goes away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Server identifier (document stores send it as `_id`)
    #[serde(alias = "_id")]
    pub id: ScenarioId,
    pub title: String,
    /// Specialization label
    pub role: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
}

impl Scenario {
    /// Create a scenario record
    #[must_use]
    pub fn new(
        id: impl Into<ScenarioId>,
        title: impl Into<String>,
        role: impl Into<String>,
        difficulty: impl Into<Difficulty>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            role: role.into(),
            difficulty: difficulty.into(),
            description: description.into(),
        }
    }
}

/// Body of a successful fetch: `{ "scenario": { ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEnvelope {
    pub scenario: Scenario,
}
