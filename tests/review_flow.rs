// tests/review_flow.rs
//
// End-to-end checks for the card review flow with mock clients:
// - re-entrancy guard: a second trigger mid-flight sends nothing
// - success path renders "MALICIOUS" / "91%"
// - failure path alerts exactly once and clears state

use std::time::Duration;

use threat_triage::alert::RecordingAlerts;
use threat_triage::analyze::{AnalysisResult, FailingClient, MockClient};
use threat_triage::card::{ReviewOutcome, ThreatCard, ANALYZE_FAILED_ALERT};
use threat_triage::render::{render_card, BUSY_LABEL};
use threat_triage::threat::ThreatInput;

fn mk_input(risk: f32) -> ThreatInput {
    ThreatInput {
        username: "@breach_herald".to_string(),
        timestamp: "2m ago".to_string(),
        text: "Fresh combo list dropping tonight.".to_string(),
        risk_score: risk,
        s_val: 0.71,
        v_val: 0.55,
        e_val: 0.63,
        avatar_url: String::new(),
    }
}

fn malicious_fixture() -> AnalysisResult {
    AnalysisResult {
        verdict: "Malicious".to_string(),
        confidence: 0.91,
        explanation: "Pattern matches known credential-dump announcements.".to_string(),
    }
}

#[tokio::test]
async fn second_trigger_mid_flight_sends_no_request() {
    let card = ThreatCard::new(mk_input(0.82));
    let client = MockClient::new(malicious_fixture()).with_delay(Duration::from_millis(100));
    let alerts = RecordingAlerts::new();

    let (first, second) = tokio::join!(card.request_review(&client, &alerts), async {
        // Let the first trigger claim the in-flight flag.
        tokio::time::sleep(Duration::from_millis(20)).await;
        card.request_review(&client, &alerts).await
    });

    assert_eq!(first, ReviewOutcome::Completed);
    assert_eq!(second, ReviewOutcome::Busy, "mid-flight trigger must no-op");
    assert_eq!(client.calls(), 1, "exactly one network call");
    assert!(card.analysis().is_some());
}

#[tokio::test]
async fn card_mid_flight_renders_busy_label_and_hides_actions() {
    let card = ThreatCard::new(mk_input(0.82));
    let client = MockClient::new(malicious_fixture()).with_delay(Duration::from_millis(200));
    let alerts = RecordingAlerts::new();

    let review = card.request_review(&client, &alerts);
    tokio::pin!(review);
    // Drive the request past the guarded entry, but not to completion.
    let poked = tokio::time::timeout(Duration::from_millis(20), &mut review).await;
    assert!(poked.is_err(), "request must still be in flight");

    let text = render_card(&card);
    assert!(text.contains(BUSY_LABEL), "busy card must show the busy label");
    assert!(
        !text.contains("[Review & Block]") && !text.contains("False Positive"),
        "busy card must hide the action labels"
    );

    assert_eq!(review.await, ReviewOutcome::Completed);
    assert!(!render_card(&card).contains(BUSY_LABEL));
}

#[tokio::test]
async fn card_can_be_reviewed_again_after_completion() {
    let card = ThreatCard::new(mk_input(0.82));
    let client = MockClient::new(malicious_fixture());
    let alerts = RecordingAlerts::new();

    assert_eq!(
        card.request_review(&client, &alerts).await,
        ReviewOutcome::Completed
    );
    assert_eq!(
        card.request_review(&client, &alerts).await,
        ReviewOutcome::Completed,
        "flag must fold back to idle after completion"
    );
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn successful_analysis_renders_uppercase_verdict_and_percent() {
    let card = ThreatCard::new(mk_input(0.82));
    let client = MockClient::new(malicious_fixture());
    let alerts = RecordingAlerts::new();

    card.request_review(&client, &alerts).await;
    let text = render_card(&card);

    assert!(text.contains("MALICIOUS"), "verdict must render uppercased");
    assert!(text.contains("Confidence 91%"), "confidence must render rounded");
    assert!(
        text.contains("[HIGH]"),
        "tier accent stays derived from risk_score, not the verdict"
    );
}

#[tokio::test]
async fn failure_alerts_once_flag_false_result_cleared() {
    let card = ThreatCard::new(mk_input(0.52));
    let ok_client = MockClient::new(malicious_fixture());
    let alerts = RecordingAlerts::new();

    // Seed a prior result, then fail the next attempt.
    card.request_review(&ok_client, &alerts).await;
    let out = card.request_review(&FailingClient, &alerts).await;

    assert_eq!(out, ReviewOutcome::Failed);
    assert!(!card.is_analyzing(), "in-flight flag must be released");
    assert!(card.analysis().is_none(), "prior result must be cleared");
    assert_eq!(alerts.count(), 1, "alert shown exactly once");
    assert_eq!(alerts.messages()[0], ANALYZE_FAILED_ALERT);
}
