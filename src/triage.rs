//! triage.rs — Derived triage summary: verdict, confidence, summary text and
//! the three S/V/E signal points. Recomputed on demand from the card's input
//! plus whatever the analysis backend returned; never stored or persisted.

use serde::{Deserialize, Serialize};

use crate::analyze::AnalysisResult;
use crate::threat::ThreatInput;

/// Both S and V warn at or above this value; E is inverted and warns below it.
pub const SIGNAL_WARN_THRESHOLD: f32 = 0.6;

/// Fixed provenance list shown under every summary.
pub const SUMMARY_SOURCES: [&str; 3] = ["X Signal", "NoteBoost RAG", "Threat Intel Cache"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Ok,
    Warn,
}

/// One explainability row (Sentiment Signal / Propagation Velocity / Evidence Density).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalPoint {
    pub title: String,
    pub desc: String,
    pub status: SignalStatus,
}

/// Display-only triage object combining heuristic scores and optional backend analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageSummary {
    pub verdict: String,
    pub confidence: f32,
    pub summary: String,
    pub analysis_points: Vec<SignalPoint>,
    pub sources: Vec<String>,
}

impl TriageSummary {
    /// Derive the summary for one card. Backend analysis, when present,
    /// overrides verdict/confidence/summary; the signal points depend only on
    /// the heuristic S/V/E components.
    pub fn derive(input: &ThreatInput, analysis: Option<&AnalysisResult>) -> Self {
        let verdict = analysis
            .map(|a| a.verdict.clone())
            .unwrap_or_else(|| input.tier().default_verdict().to_string());
        let confidence = analysis.map(|a| a.confidence).unwrap_or(input.risk_score);
        let summary = analysis
            .map(|a| a.explanation.clone())
            .unwrap_or_else(|| input.text.clone());

        TriageSummary {
            verdict,
            confidence,
            summary,
            analysis_points: vec![
                sentiment_point(input.s_val),
                velocity_point(input.v_val),
                evidence_point(input.e_val),
            ],
            sources: SUMMARY_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn sentiment_point(s_val: f32) -> SignalPoint {
    let warn = s_val >= SIGNAL_WARN_THRESHOLD;
    SignalPoint {
        title: "Sentiment Signal".to_string(),
        desc: format!(
            "S-score at {s_val:.2} indicates {} sentiment volatility.",
            if warn { "heightened" } else { "stable" }
        ),
        status: if warn { SignalStatus::Warn } else { SignalStatus::Ok },
    }
}

fn velocity_point(v_val: f32) -> SignalPoint {
    let warn = v_val >= SIGNAL_WARN_THRESHOLD;
    SignalPoint {
        title: "Propagation Velocity".to_string(),
        desc: format!(
            "V-score at {v_val:.2} suggests {} spread velocity.",
            if warn { "accelerated" } else { "normal" }
        ),
        status: if warn { SignalStatus::Warn } else { SignalStatus::Ok },
    }
}

/// E is inverted: a link-heavy post is well-evidenced (ok), a low-evidence
/// post is the warning case.
fn evidence_point(e_val: f32) -> SignalPoint {
    let dense = e_val >= SIGNAL_WARN_THRESHOLD;
    SignalPoint {
        title: "Evidence Density".to_string(),
        desc: format!(
            "E-score at {e_val:.2} indicates {} evidence density.",
            if dense { "link-heavy" } else { "low" }
        ),
        status: if dense { SignalStatus::Ok } else { SignalStatus::Warn },
    }
}
