//! Scenario identifiers taken from the route

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Placeholder label shown when the route carries no identifier
const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Number of characters kept in the short display label
const SHORT_LABEL_CHARS: usize = 8;

/// Opaque scenario identifier
///
/// The identifier is an external key: it is never parsed or validated.
/// An absent route parameter is represented by the empty identifier, and
/// requests are still issued with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create identifier from any string
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier from an optional route parameter
    #[inline]
    #[must_use]
    pub fn from_route(param: Option<&str>) -> Self {
        Self(param.unwrap_or_default().to_string())
    }

    /// Raw identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the route supplied nothing usable
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First eight characters, or `UNKNOWN` for an empty identifier
    #[must_use]
    pub fn short_label(&self) -> String {
        if self.0.is_empty() {
            return UNKNOWN_LABEL.to_string();
        }
        self.0.chars().take(SHORT_LABEL_CHARS).collect()
    }
}

impl Display for ScenarioId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScenarioId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ScenarioId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_truncates_to_eight_chars() {
        let id = ScenarioId::new("65f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(id.short_label(), "65f1a2b3");
    }

    #[test]
    fn short_label_keeps_short_ids() {
        assert_eq!(ScenarioId::new("abc").short_label(), "abc");
    }

    #[test]
    fn missing_route_param_is_unknown() {
        let id = ScenarioId::from_route(None);
        assert!(id.is_empty());
        assert_eq!(id.short_label(), "UNKNOWN");
        assert_eq!(ScenarioId::from_route(Some("")).short_label(), "UNKNOWN");
    }

    #[test]
    fn short_label_counts_chars_not_bytes() {
        let id = ScenarioId::new("ŝćéńáŕíóxyz");
        assert_eq!(id.short_label(), "ŝćéńáŕíó");
    }
}
