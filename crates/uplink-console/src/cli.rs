//! Command-line surface
//!
//! - `uplink show <ID>`: mount the detail view and print it
//! - `uplink start <ID>`: mount, then activate the start control

use crate::config::ConsoleConfig;
use crate::logging;
use crate::render::render_screen;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use uplink_client::HttpScenarioApi;
use uplink_view::{Navigator, RenderState, Route, ScenarioDetailPage, StartOutcome};

/// Exit code for a completed command
pub const EXIT_OK: i32 = 0;
/// Exit code when the view ended without a record or the start was refused
pub const EXIT_FAILED: i32 = 1;

/// Build the command tree
#[must_use]
pub fn build_cli() -> Command {
    let id_arg = Arg::new("id")
        .required(true)
        .help("Scenario identifier from the route");

    Command::new("uplink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scenario detail console")
        .subcommand_required(true)
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Mission API root (overrides config and UPLINK_BASE_URL)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("timeout-secs")
                .long("timeout-secs")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Per-request timeout in seconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("show")
                .about("Fetch and display a scenario")
                .arg(id_arg.clone()),
        )
        .subcommand(
            Command::new("start")
                .about("Display a scenario, then start a play session")
                .arg(id_arg),
        )
}

/// Navigator for the console: remembers where control went
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    #[must_use]
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, route: &Route) {
        tracing::info!("handing control to {}", route);
        *self.last.lock() = Some(route.clone());
    }
}

/// Resolve configuration from flags, environment and file
///
/// # Errors
/// If the config file cannot be loaded.
pub fn resolve_config(matches: &ArgMatches) -> anyhow::Result<ConsoleConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let config = ConsoleConfig::load(path.map(PathBuf::as_path))?
        .with_env(|key| std::env::var(key).ok())
        .with_flags(
            matches.get_one::<String>("base-url").map(String::as_str),
            matches.get_one::<u64>("timeout-secs").copied(),
        );
    Ok(config)
}

/// Run parsed arguments, returning the process exit code
///
/// # Errors
/// On configuration or client construction failure. API failures are not
/// errors here; they are shown on screen and reflected in the exit code.
pub async fn run(matches: &ArgMatches) -> anyhow::Result<i32> {
    let config = resolve_config(matches)?;
    logging::init(&config.log_filter, matches.get_count("verbose"));

    let api = HttpScenarioApi::new(&config.client).context("building mission api client")?;
    tracing::debug!("using mission api at {}", api.base_url());
    let page = ScenarioDetailPage::new(Arc::new(api), ConsoleNavigator::default());

    match matches.subcommand() {
        Some(("show", args)) => {
            let id = args.get_one::<String>("id").map(String::as_str);
            page.mount(id).await;
            print!("{}", render_screen(&page.screen()));
            let render = page.controller().render();
            tracing::debug!("show finished on the {} branch", render.name());
            Ok(exit_code_for(&render))
        }
        Some(("start", args)) => {
            let id = args.get_one::<String>("id").map(String::as_str);
            page.mount(id).await;
            print!("{}", render_screen(&page.screen()));

            match page.press_start().await {
                Some(StartOutcome::Started(_)) => {
                    if let Some(route) = page.navigator().last_route() {
                        println!("=> {route}");
                    }
                    Ok(EXIT_OK)
                }
                Some(StartOutcome::Failed(_)) | None => {
                    print!("{}", render_screen(&page.screen()));
                    Ok(EXIT_FAILED)
                }
            }
        }
        _ => Ok(EXIT_FAILED),
    }
}

fn exit_code_for(render: &RenderState) -> i32 {
    match render {
        RenderState::Loaded { .. } => EXIT_OK,
        RenderState::Loading | RenderState::NotFound | RenderState::ErrorOnly(_) => EXIT_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from([
                "uplink",
                "show",
                "abc",
                "--base-url",
                "http://flag/api",
                "--timeout-secs",
                "4",
                "-vv",
            ])
            .unwrap();

        assert_eq!(matches.get_count("verbose"), 2);
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.client.base_url, "http://flag/api");
        assert_eq!(config.client.timeout_secs, Some(4));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(build_cli().try_get_matches_from(["uplink"]).is_err());
        assert!(build_cli().try_get_matches_from(["uplink", "show"]).is_err());
    }

    #[test]
    fn only_loaded_exits_ok() {
        assert_eq!(exit_code_for(&RenderState::NotFound), EXIT_FAILED);
        assert_eq!(exit_code_for(&RenderState::ErrorOnly("x".into())), EXIT_FAILED);
    }
}
