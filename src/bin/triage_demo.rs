//! Demo that walks a few cards through the review flow with the mock client
//! (no network I/O); prints each card before and after analysis.

use std::time::Duration;

use threat_triage::alert::TracingAlerts;
use threat_triage::analyze::{AnalysisResult, MockClient};
use threat_triage::card::ThreatCard;
use threat_triage::render::render_card;
use threat_triage::threat::ThreatInput;

fn demo_input(username: &str, text: &str, risk: f32) -> ThreatInput {
    ThreatInput {
        username: username.to_string(),
        timestamp: "just now".to_string(),
        text: text.to_string(),
        risk_score: risk,
        s_val: 0.65,
        v_val: 0.45,
        e_val: 0.30,
        avatar_url: String::new(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let client = MockClient::new(AnalysisResult {
        verdict: "Malicious".to_string(),
        confidence: 0.91,
        explanation: "Pattern matches known credential-dump announcements.".to_string(),
    })
    .with_delay(Duration::from_millis(400));
    let alerts = TracingAlerts;

    let feed = [
        demo_input("@breach_herald", "Fresh combo list dropping tonight.", 0.82),
        demo_input("@ops_watcher", "Odd login spikes on the portal.", 0.52),
        demo_input("@daily_memes", "monday mood", 0.12),
    ];

    for input in feed {
        let card = ThreatCard::new(input);
        println!("{}", render_card(&card));
        card.request_review(&client, &alerts).await;
        println!("{}", render_card(&card));
    }

    println!("triage-demo done ({} analyze calls)", client.calls());
}
