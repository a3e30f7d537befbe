//! Uplink View - Scenario detail page
//!
//! The detail page for one scenario:
//! - Fetches the record whenever the route identifier changes
//! - Selects one of four render states (loading, not-found, error-only, loaded)
//! - Dispatches the start action and reports its outcome
//! - Hands control to the play route through a [`Navigator`]
//!
//! # Example
//!
//! ```rust,ignore
//! use uplink_view::{ScenarioDetailPage, StartOutcome};
//!
//! let page = ScenarioDetailPage::new(api, navigator);
//! page.mount(Some("65f1a2b3")).await;
//! println!("{:?}", page.screen());
//!
//! if let Some(StartOutcome::Failed(message)) = page.press_start().await {
//!     eprintln!("start refused: {message}");
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod controller;
pub mod navigation;
pub mod page;
pub mod screen;
pub mod state;

pub use controller::{LoadTicket, ScenarioDetailController, StartOutcome};
pub use navigation::{Navigator, Route};
pub use page::ScenarioDetailPage;
pub use screen::{Briefing, DetailScreen, ScenarioCard, ScreenBody};
pub use state::{RenderState, ViewError, ViewState};
pub use uplink_client::UPLINK_FAILURE_MESSAGE;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for hosting the detail page
    pub use crate::{
        DetailScreen, Navigator, RenderState, Route, ScenarioDetailController, ScenarioDetailPage,
        StartOutcome, ViewState,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
