//! threat.rs — Threat feed item model and the risk tier classification.
//!
//! `RiskTier` is a pure function of the heuristic `risk_score`; nothing the
//! analysis backend returns is allowed to move a card between tiers.

use serde::{Deserialize, Serialize};

/// One flagged post as supplied by the upstream feed. Immutable per card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatInput {
    /// Handle of the posting account (e.g. "@breach_herald").
    pub username: String,
    /// Display timestamp as delivered by the feed (e.g. "2m ago").
    /// Kept as a `String`; the feed formats it, we only show it.
    pub timestamp: String,
    /// Raw post text; also the payload sent to the analysis backend.
    pub text: String,
    /// Heuristic risk in <0.0, 1.0>.
    pub risk_score: f32,
    /// Sentiment volatility component.
    pub s_val: f32,
    /// Propagation velocity component.
    pub v_val: f32,
    /// Evidence density component.
    pub e_val: f32,
    /// Avatar location; carried through untouched (rendering is out of scope).
    #[serde(default)]
    pub avatar_url: String,
}

/// Risk classification bucket derived from `risk_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Exhaustive, mutually exclusive partition:
    /// high ≥ 0.75, medium in [0.4, 0.75), low otherwise.
    pub fn from_score(risk_score: f32) -> Self {
        if risk_score >= 0.75 {
            RiskTier::High
        } else if risk_score >= 0.4 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Default verdict label for a card that has no backend analysis yet.
    pub fn default_verdict(self) -> &'static str {
        match self {
            RiskTier::High => "Malicious",
            RiskTier::Medium => "Suspect",
            RiskTier::Low => "Safe",
        }
    }
}

impl ThreatInput {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_partition_is_exhaustive_and_exclusive() {
        assert_eq!(RiskTier::from_score(1.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.75), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.7499), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.4), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.3999), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
    }

    #[test]
    fn default_verdict_follows_tier() {
        assert_eq!(RiskTier::High.default_verdict(), "Malicious");
        assert_eq!(RiskTier::Medium.default_verdict(), "Suspect");
        assert_eq!(RiskTier::Low.default_verdict(), "Safe");
    }

    #[test]
    fn threat_input_deserializes_from_feed_json() {
        let raw = r#"{
            "username": "@breach_herald",
            "timestamp": "2m ago",
            "text": "dumping creds tonight",
            "risk_score": 0.82,
            "s_val": 0.71,
            "v_val": 0.55,
            "e_val": 0.63
        }"#;
        let t: ThreatInput = serde_json::from_str(raw).expect("feed item json");
        assert_eq!(t.tier(), RiskTier::High);
        assert!(t.avatar_url.is_empty(), "avatar_url defaults when absent");
    }
}
