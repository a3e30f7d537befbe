//! Difficulty values and their risk categories

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Scenario difficulty as sent by the server
///
/// Matching is exact and case-sensitive. Anything that is not `easy`,
/// `medium` or `hard` is kept verbatim in [`Difficulty::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    /// Wire text for this difficulty
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Other(raw) => raw,
        }
    }

    /// Display category; total over every difficulty value
    #[inline]
    #[must_use]
    pub fn risk_tier(&self) -> RiskTier {
        match self {
            Self::Hard => RiskTier::High,
            Self::Medium => RiskTier::Elevated,
            Self::Easy | Self::Other(_) => RiskTier::Low,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "easy" => Self::Easy,
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk styling category shown next to the difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskTier {
    /// Easy and unrecognized difficulties
    Low,
    /// Medium difficulty
    Elevated,
    /// Hard difficulty
    High,
}

impl RiskTier {
    /// Short uppercase tag
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Elevated => "ELEVATED",
            Self::High => "HIGH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values_map_to_tiers() {
        assert_eq!(Difficulty::from("hard").risk_tier(), RiskTier::High);
        assert_eq!(Difficulty::from("medium").risk_tier(), RiskTier::Elevated);
        assert_eq!(Difficulty::from("easy").risk_tier(), RiskTier::Low);
    }

    #[test]
    fn unknown_values_are_low_risk() {
        let extreme = Difficulty::from("extreme");
        assert_eq!(extreme, Difficulty::Other("extreme".into()));
        assert_eq!(extreme.risk_tier(), RiskTier::Low);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Difficulty::from("HARD").risk_tier(), RiskTier::Low);
        assert_eq!(Difficulty::from("Medium").risk_tier(), RiskTier::Low);
    }

    #[test]
    fn serde_preserves_raw_text() {
        let parsed: Difficulty = serde_json::from_str("\"nightmare\"").unwrap();
        assert_eq!(parsed.as_str(), "nightmare");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"nightmare\"");
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }

    proptest! {
        #[test]
        fn prop_risk_tier_is_total(raw in ".*") {
            let tier = Difficulty::from(raw.as_str()).risk_tier();
            let expected = match raw.as_str() {
                "hard" => RiskTier::High,
                "medium" => RiskTier::Elevated,
                _ => RiskTier::Low,
            };
            prop_assert_eq!(tier, expected);
        }
    }
}
