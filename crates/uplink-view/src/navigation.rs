//! Navigation contract

use std::fmt::{self, Display, Formatter};
use uplink_model::ScenarioId;

/// Destinations reachable from the detail view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Scenario list ("Return to Index")
    ScenarioIndex,
    /// Play session for a scenario
    Play(ScenarioId),
}

impl Route {
    /// Path understood by the hosting router
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ScenarioIndex => "/scenarios".to_string(),
            Self::Play(id) => format!("/play/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One-way transition to another view
///
/// Fire-and-forget: nothing is returned and the detail view does not touch
/// its state afterwards.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &Route);
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn navigate_to(&self, route: &Route) {
        (**self).navigate_to(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::ScenarioIndex.path(), "/scenarios");
        assert_eq!(Route::Play(ScenarioId::new("abc")).to_string(), "/play/abc");
    }
}
