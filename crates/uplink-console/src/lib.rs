//! Uplink Console
//!
//! Terminal host for the scenario detail view: resolves configuration,
//! installs logging, talks to the mission API over HTTP and prints the
//! screen as text.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;

pub use cli::{build_cli, run, ConsoleNavigator};
pub use config::ConsoleConfig;
pub use render::render_screen;
