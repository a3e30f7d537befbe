//! View state and render selection
//!
//! [`ViewState`] is the controller-owned tuple `(scenario, loading, error)`.
//! [`ViewState::render`] is a pure function of it and yields exactly one
//! [`RenderState`].

use uplink_client::ApiError;
use uplink_model::Scenario;

/// Error held by the view
///
/// Not-found is kept apart from message errors so render selection can
/// branch on the kind instead of on an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The fetched identifier has no record
    NotFound,
    /// Any other failure, as shown to the user
    Message(String),
}

impl ViewError {
    /// Error recorded after a failed fetch
    #[must_use]
    pub fn from_fetch(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound => Self::NotFound,
            ApiError::Transport { .. } => Self::Message(err.to_string()),
        }
    }

    /// Error recorded after a failed start; always shown as a banner
    #[must_use]
    pub fn from_start(err: &ApiError) -> Self {
        Self::Message(err.to_string())
    }

    /// Banner text
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::NotFound => ApiError::NotFound.to_string(),
            Self::Message(message) => message.clone(),
        }
    }
}

/// Locally owned view state
///
/// `scenario` and `error` may both be set: a successful load leaves an
/// earlier error in place, and a failed start after a load adds one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub scenario: Option<Scenario>,
    /// True only while the latest fetch is in flight
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl ViewState {
    /// Select the render branch
    #[must_use]
    pub fn render(&self) -> RenderState {
        if self.loading {
            return RenderState::Loading;
        }
        match (&self.scenario, &self.error) {
            (Some(scenario), error) => RenderState::Loaded {
                scenario: scenario.clone(),
                banner: error.as_ref().map(ViewError::text),
            },
            (None, None | Some(ViewError::NotFound)) => RenderState::NotFound,
            (None, Some(ViewError::Message(message))) => RenderState::ErrorOnly(message.clone()),
        }
    }
}

/// The four mutually exclusive things the page can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    /// A fetch is in flight
    Loading,
    /// Nothing to show for this identifier
    NotFound,
    /// No record, but a failure message to show
    ErrorOnly(String),
    /// Full detail, with an inline banner when an error is active
    Loaded {
        scenario: Scenario,
        banner: Option<String>,
    },
}

impl RenderState {
    /// Short name used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound => "not-found",
            Self::ErrorOnly(_) => "error-only",
            Self::Loaded { .. } => "loaded",
        }
    }
}
