//! Presentation model for the detail page
//!
//! Derived from [`RenderState`]; carries text and categories only, no
//! styling. Renderers (console, GUI) decide how each part looks.

use crate::state::RenderState;
use uplink_model::{RiskTier, Scenario, ScenarioId};

pub const LOADING_STATUS: &str = "DECRYPTING_ASSETS...";
pub const NOT_FOUND_NOTICE: &str = "404 // DATA_FRAGMENT_NOT_FOUND";
pub const START_LABEL: &str = "Initiate Sequence";
pub const RETURN_LABEL: &str = "Return to Index";
pub const EXECUTION_PARAMETERS_HEADING: &str = "Execution Parameters";
/// Fixed sidebar rows; decorative, not fetched
pub const EXECUTION_PARAMETERS: &[(&str, &str)] = &[
    ("Auth Status", "VERIFIED"),
    ("Instance", "Ephemeral"),
    ("Latency", "24ms"),
];
pub const BRIEFING_FOOTER: &str = "System: Connection encrypted via TLS 1.3 // Neural-Link ready // \
All actions recorded for post-mission analysis.";

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    /// Whether the top navigation bar is drawn
    pub show_nav_bar: bool,
    pub body: ScreenBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenBody {
    /// Spinner with a status line
    Loading { status: &'static str },
    /// Bare notice, no navigation bar
    NotFound { notice: &'static str },
    /// Briefing layout; `card` is absent when only an error is known
    Briefing(Briefing),
}

/// Detail layout with the action sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    pub return_label: &'static str,
    /// `OBJ_ID: <first 8 chars | UNKNOWN>`
    pub object_label: String,
    pub card: Option<ScenarioCard>,
    pub parameters_heading: &'static str,
    /// Label/value rows shown above the banner
    pub parameters: &'static [(&'static str, &'static str)],
    /// Rendered as `> {text}` above the start control
    pub banner: Option<String>,
    pub start_label: &'static str,
    /// Terminal line under the sidebar
    pub footer: &'static str,
}

/// Scenario fields as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCard {
    pub title: String,
    pub specialization: String,
    pub difficulty: String,
    pub risk: RiskTier,
    pub overview: String,
}

impl From<&Scenario> for ScenarioCard {
    fn from(scenario: &Scenario) -> Self {
        Self {
            title: scenario.title.clone(),
            specialization: scenario.role.clone(),
            difficulty: scenario.difficulty.to_string(),
            risk: scenario.difficulty.risk_tier(),
            overview: scenario.description.clone(),
        }
    }
}

impl DetailScreen {
    /// Build the screen for a render state and the route identifier
    #[must_use]
    pub fn build(render: &RenderState, id: &ScenarioId) -> Self {
        match render {
            RenderState::Loading => Self {
                show_nav_bar: true,
                body: ScreenBody::Loading {
                    status: LOADING_STATUS,
                },
            },
            RenderState::NotFound => Self {
                show_nav_bar: false,
                body: ScreenBody::NotFound {
                    notice: NOT_FOUND_NOTICE,
                },
            },
            RenderState::ErrorOnly(message) => Self::briefing(id, None, Some(message.clone())),
            RenderState::Loaded { scenario, banner } => {
                Self::briefing(id, Some(ScenarioCard::from(scenario)), banner.clone())
            }
        }
    }

    fn briefing(id: &ScenarioId, card: Option<ScenarioCard>, banner: Option<String>) -> Self {
        Self {
            show_nav_bar: true,
            body: ScreenBody::Briefing(Briefing {
                return_label: RETURN_LABEL,
                object_label: format!("OBJ_ID: {}", id.short_label()),
                card,
                parameters_heading: EXECUTION_PARAMETERS_HEADING,
                parameters: EXECUTION_PARAMETERS,
                banner,
                start_label: START_LABEL,
                footer: BRIEFING_FOOTER,
            }),
        }
    }

    /// Whether the start control is shown (and therefore actionable)
    #[must_use]
    pub fn start_available(&self) -> bool {
        matches!(self.body, ScreenBody::Briefing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn loaded_screen_carries_card_and_label() {
        let scenario = Scenario::new(
            "65f1a2b3c4d5e6f7",
            "Night Shift",
            "SOC analyst",
            "medium",
            "Triage the alert queue.",
        );
        let render = RenderState::Loaded {
            scenario: scenario.clone(),
            banner: None,
        };

        let screen = DetailScreen::build(&render, &scenario.id);

        assert_eq!(
            screen,
            DetailScreen {
                show_nav_bar: true,
                body: ScreenBody::Briefing(Briefing {
                    return_label: RETURN_LABEL,
                    object_label: "OBJ_ID: 65f1a2b3".into(),
                    card: Some(ScenarioCard {
                        title: "Night Shift".into(),
                        specialization: "SOC analyst".into(),
                        difficulty: "medium".into(),
                        risk: RiskTier::Elevated,
                        overview: "Triage the alert queue.".into(),
                    }),
                    parameters_heading: "Execution Parameters",
                    parameters: &[
                        ("Auth Status", "VERIFIED"),
                        ("Instance", "Ephemeral"),
                        ("Latency", "24ms"),
                    ],
                    banner: None,
                    start_label: START_LABEL,
                    footer: "System: Connection encrypted via TLS 1.3 // Neural-Link ready // \
All actions recorded for post-mission analysis.",
                }),
            }
        );
    }

    #[test]
    fn error_only_keeps_start_control() {
        let screen = DetailScreen::build(
            &RenderState::ErrorOnly("link down".into()),
            &ScenarioId::default(),
        );
        assert!(screen.start_available());
        match screen.body {
            ScreenBody::Briefing(briefing) => {
                assert!(briefing.card.is_none());
                assert_eq!(briefing.banner.as_deref(), Some("link down"));
                assert_eq!(briefing.object_label, "OBJ_ID: UNKNOWN");
                assert_eq!(briefing.parameters, EXECUTION_PARAMETERS);
                assert_eq!(briefing.footer, BRIEFING_FOOTER);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn not_found_hides_nav_bar() {
        let screen = DetailScreen::build(&RenderState::NotFound, &ScenarioId::new("x"));
        assert!(!screen.show_nav_bar);
        assert!(!screen.start_available());
    }
}
