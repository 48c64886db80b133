// src/render.rs
//! Plain-text rendering of a triage card for the CLI. Keeps the same display
//! rules as the triage UI: tier-colored accent, uppercased verdict, rounded
//! percent confidence, S/V/E breakdown with two decimals.

use std::fmt::Write as _;

use crate::analyze::AnalysisResult;
use crate::card::ThreatCard;
use crate::threat::RiskTier;
use crate::triage::{SignalStatus, TriageSummary};

/// Shown while a request is in flight.
pub const BUSY_LABEL: &str = "CONTACTING ANALYSIS AGENT...";

/// Panel tone derived from the backend verdict. Independent of the tier
/// accent, which only ever follows `risk_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Hostile,
    Clear,
}

impl VerdictTone {
    pub fn from_verdict(verdict: &str) -> Self {
        if verdict.eq_ignore_ascii_case("malicious") {
            VerdictTone::Hostile
        } else {
            VerdictTone::Clear
        }
    }
}

/// Confidence as a whole percent, rounded half-up: 0.91 -> "91%".
pub fn confidence_percent(confidence: f32) -> String {
    format!("{}%", (confidence * 100.0).round() as i32)
}

pub fn tier_accent(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "HIGH",
        RiskTier::Medium => "MEDIUM",
        RiskTier::Low => "LOW",
    }
}

/// Primary action label; the secondary action is always "False Positive".
pub fn primary_action(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "Review & Block",
        _ => "Flag for RAG",
    }
}

fn status_tag(status: SignalStatus) -> &'static str {
    match status {
        SignalStatus::Ok => "ok",
        SignalStatus::Warn => "warn",
    }
}

fn render_verdict_panel(out: &mut String, analysis: &AnalysisResult) {
    let tone = match VerdictTone::from_verdict(&analysis.verdict) {
        VerdictTone::Hostile => "hostile",
        VerdictTone::Clear => "clear",
    };
    let _ = writeln!(
        out,
        "  [{tone}] {}  Confidence {}",
        analysis.verdict.to_uppercase(),
        confidence_percent(analysis.confidence)
    );
    let _ = writeln!(out, "  {}", analysis.explanation);
}

fn render_summary(out: &mut String, summary: &TriageSummary) {
    for p in &summary.analysis_points {
        let _ = writeln!(out, "  [{:4}] {}", status_tag(p.status), p.desc);
    }
    let _ = writeln!(out, "  sources: {}", summary.sources.join(", "));
}

/// Render one card as a multi-line text block.
pub fn render_card(card: &ThreatCard) -> String {
    let input = card.input();
    let tier = input.tier();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}  [{}] Risk Score: {}",
        input.username,
        input.timestamp,
        tier_accent(tier),
        input.risk_score
    );
    let _ = writeln!(
        out,
        "  S {:.2}  V {:.2}  E {:.2}",
        input.s_val, input.v_val, input.e_val
    );
    let _ = writeln!(out, "  {}", input.text);

    if card.is_analyzing() {
        let _ = writeln!(out, "  {BUSY_LABEL}");
        return out;
    }

    let _ = writeln!(out, "  [{}] [False Positive]", primary_action(tier));

    if let Some(analysis) = card.analysis() {
        render_verdict_panel(&mut out, &analysis);
        render_summary(&mut out, &card.summary());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threat::ThreatInput;

    fn mk_card(risk: f32) -> ThreatCard {
        ThreatCard::new(ThreatInput {
            username: "@breach_herald".to_string(),
            timestamp: "2m ago".to_string(),
            text: "dumping creds tonight".to_string(),
            risk_score: risk,
            s_val: 0.71,
            v_val: 0.55,
            e_val: 0.63,
            avatar_url: String::new(),
        })
    }

    #[test]
    fn confidence_rounds_to_whole_percent() {
        assert_eq!(confidence_percent(0.91), "91%");
        assert_eq!(confidence_percent(0.914), "91%");
        assert_eq!(confidence_percent(0.917), "92%");
        assert_eq!(confidence_percent(0.0), "0%");
        assert_eq!(confidence_percent(1.0), "100%");
    }

    #[test]
    fn action_labels_follow_tier() {
        assert_eq!(primary_action(RiskTier::High), "Review & Block");
        assert_eq!(primary_action(RiskTier::Medium), "Flag for RAG");
        assert_eq!(primary_action(RiskTier::Low), "Flag for RAG");
    }

    #[test]
    fn verdict_tone_is_hostile_only_for_malicious() {
        assert_eq!(
            VerdictTone::from_verdict("Malicious"),
            VerdictTone::Hostile
        );
        assert_eq!(
            VerdictTone::from_verdict("MALICIOUS"),
            VerdictTone::Hostile
        );
        assert_eq!(VerdictTone::from_verdict("Suspect"), VerdictTone::Clear);
        assert_eq!(VerdictTone::from_verdict("Safe"), VerdictTone::Clear);
    }

    #[test]
    fn card_without_analysis_has_no_verdict_panel() {
        let card = mk_card(0.82);
        let text = render_card(&card);
        assert!(text.contains("[HIGH] Risk Score: 0.82"));
        assert!(
            text.contains("S 0.71  V 0.55  E 0.63"),
            "header must carry the two-decimal S/V/E breakdown"
        );
        assert!(text.contains("[Review & Block] [False Positive]"));
        assert!(!text.contains("Confidence"));
    }
}
