//! Uplink Model
//!
//! Domain records for the scenario detail view.
//!
//! # Core Concepts
//!
//! - [`Scenario`]: Remote-owned mission record (title, role, difficulty, description)
//! - [`ScenarioId`]: Opaque route identifier, never validated
//! - [`Difficulty`]: Enumerated difficulty string that preserves unknown values
//! - [`RiskTier`]: Display category derived from difficulty
//!
//! # Example
//!
//! ```
//! use uplink_model::{Difficulty, RiskTier, ScenarioId};
//!
//! let id = ScenarioId::from_route(Some("6650c0ffee1234"));
//! assert_eq!(id.short_label(), "6650c0ff");
//!
//! assert_eq!(Difficulty::from("hard").risk_tier(), RiskTier::High);
//! assert_eq!(Difficulty::from("extreme").risk_tier(), RiskTier::Low);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod difficulty;
mod id;
mod scenario;

pub use difficulty::{Difficulty, RiskTier};
pub use id::ScenarioId;
pub use scenario::{Scenario, ScenarioEnvelope};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
