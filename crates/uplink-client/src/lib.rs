//! Uplink Client
//!
//! The mission API as seen by the detail view:
//! - [`ScenarioApi`]: async contract with two operations (fetch, start)
//! - [`ApiError`]: tagged failure kinds (`NotFound`, `Transport`)
//! - [`HttpScenarioApi`]: reqwest-backed implementation
//! - [`ClientConfig`]: base URL and optional request timeout
//!
//! # Example
//!
//! ```rust,ignore
//! use uplink_client::{ClientConfig, HttpScenarioApi, ScenarioApi};
//! use uplink_model::ScenarioId;
//!
//! let api = HttpScenarioApi::new(&ClientConfig::new().with_base_url("http://localhost:5000/api"))?;
//! let scenario = api.fetch_scenario(&ScenarioId::new("65f1a2b3")).await?;
//! println!("{}", scenario.title);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ScenarioApi;
pub use config::ClientConfig;
pub use error::{ApiError, ClientBuildError, UPLINK_FAILURE_MESSAGE};
pub use http::HttpScenarioApi;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
