//! Plain-text rendering of the detail screen

use std::fmt::Write;
use uplink_model::RiskTier;
use uplink_view::{Briefing, DetailScreen, ScreenBody};

const NAV_BAR: &str = "== UPLINK ==";
const RULE: &str = "----------------------------------------";

/// Render a screen as terminal text
#[must_use]
pub fn render_screen(screen: &DetailScreen) -> String {
    let mut out = String::new();
    if screen.show_nav_bar {
        out.push_str(NAV_BAR);
        out.push('\n');
    }

    match &screen.body {
        ScreenBody::Loading { status } => {
            let _ = writeln!(out, "[ .. ] {status}");
        }
        ScreenBody::NotFound { notice } => {
            let _ = writeln!(out, "[ {notice} ]");
        }
        ScreenBody::Briefing(briefing) => render_briefing(&mut out, briefing),
    }
    out
}

fn render_briefing(out: &mut String, briefing: &Briefing) {
    let _ = writeln!(out, "<- {}    {}", briefing.return_label, briefing.object_label);
    let _ = writeln!(out, "{RULE}");

    if let Some(card) = &briefing.card {
        let _ = writeln!(out, "{}.", card.title);
        let _ = writeln!(out, "Specialization: {}", card.specialization);
        let _ = writeln!(
            out,
            "Risk Factor:    {} [{}]",
            card.difficulty.to_uppercase(),
            risk_marker(card.risk)
        );
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Operational Overview");
        let _ = writeln!(out, "{}", card.overview);
        let _ = writeln!(out, "{RULE}");
    }

    let _ = writeln!(out, "{}", briefing.parameters_heading.to_uppercase());
    for (label, value) in briefing.parameters {
        let _ = writeln!(out, "  {label:<14}{value}");
    }
    if let Some(banner) = &briefing.banner {
        let _ = writeln!(out, "> {banner}");
    }
    let _ = writeln!(out, "[ {} ]", briefing.start_label);
    let _ = writeln!(out, "{}", briefing.footer);
}

fn risk_marker(tier: RiskTier) -> String {
    let bangs = match tier {
        RiskTier::High => "!!!",
        RiskTier::Elevated => "!!",
        RiskTier::Low => "!",
    };
    format!("{bangs} {}", tier.tag())
}
