//! Threat Triage CLI — Binary Entrypoint
//! Loads a feed of flagged posts, renders each triage card, and (with
//! `--analyze`) runs the review flow against the configured backend.
//!
//! Usage: `threat-triage [--analyze] [feed.json]`
//! The feed is a JSON array of threat inputs; without a path a built-in
//! sample feed is used.

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use threat_triage::alert::TracingAlerts;
use threat_triage::analyze::{build_client_from_config, AnalyzeConfig};
use threat_triage::card::ThreatCard;
use threat_triage::render::render_card;
use threat_triage::threat::ThreatInput;

fn enable_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("threat_triage=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn load_feed(path: Option<&str>) -> Result<Vec<ThreatInput>> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p).with_context(|| format!("reading feed {p}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing feed {p}"))
        }
        None => Ok(sample_feed()),
    }
}

fn sample_feed() -> Vec<ThreatInput> {
    vec![
        ThreatInput {
            username: "@breach_herald".to_string(),
            timestamp: "2m ago".to_string(),
            text: "Fresh combo list dropping tonight, DMs open.".to_string(),
            risk_score: 0.82,
            s_val: 0.71,
            v_val: 0.66,
            e_val: 0.63,
            avatar_url: String::new(),
        },
        ThreatInput {
            username: "@ops_watcher".to_string(),
            timestamp: "11m ago".to_string(),
            text: "Seeing odd login spikes on the portal again.".to_string(),
            risk_score: 0.52,
            s_val: 0.44,
            v_val: 0.61,
            e_val: 0.38,
            avatar_url: String::new(),
        },
        ThreatInput {
            username: "@daily_memes".to_string(),
            timestamp: "30m ago".to_string(),
            text: "monday mood: everything is on fire (the usual)".to_string(),
            risk_score: 0.12,
            s_val: 0.33,
            v_val: 0.18,
            e_val: 0.72,
            avatar_url: String::new(),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    enable_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let analyze = args.iter().any(|a| a == "--analyze");
    let path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    let feed = load_feed(path)?;
    tracing::info!(cards = feed.len(), "feed loaded");

    let config = AnalyzeConfig::load();
    let client = build_client_from_config(&config);
    let alerts = TracingAlerts;

    for input in feed {
        let card = ThreatCard::new(input);
        if analyze {
            let outcome = card.request_review(client.as_ref(), &alerts).await;
            tracing::debug!(?outcome, username = %card.input().username, "review done");
        }
        println!("{}", render_card(&card));
    }

    Ok(())
}
