// src/card.rs
//! Per-card review flow: idle → requesting → success/failure → idle.
//!
//! One boolean guards re-entrancy; a second trigger while a request is
//! outstanding is a no-op and performs no network call. The flag is cleared
//! unconditionally on completion, success or failure. State is per card;
//! nothing is shared across card instances.

use std::sync::Mutex;

use crate::alert::AlertSink;
use crate::analyze::{AnalysisResult, AnalyzeClient};
use crate::threat::ThreatInput;
use crate::triage::TriageSummary;

/// Message surfaced through the alert sink when a review attempt fails.
pub const ANALYZE_FAILED_ALERT: &str = "Unable to analyze threat. Please try again.";

/// Outcome of a single review trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Result stored; the card now carries a backend verdict.
    Completed,
    /// Request failed; alert surfaced once, result left empty.
    Failed,
    /// A request was already in flight; nothing was sent.
    Busy,
}

#[derive(Debug, Default)]
struct CardState {
    analyzing: bool,
    analysis: Option<AnalysisResult>,
}

/// One triage card. Holds the immutable feed input plus the two pieces of
/// review state (in-flight flag, optional analysis result).
pub struct ThreatCard {
    input: ThreatInput,
    state: Mutex<CardState>,
}

impl ThreatCard {
    pub fn new(input: ThreatInput) -> Self {
        Self {
            input,
            state: Mutex::new(CardState::default()),
        }
    }

    pub fn input(&self) -> &ThreatInput {
        &self.input
    }

    pub fn is_analyzing(&self) -> bool {
        self.state.lock().expect("card state poisoned").analyzing
    }

    pub fn analysis(&self) -> Option<AnalysisResult> {
        self.state
            .lock()
            .expect("card state poisoned")
            .analysis
            .clone()
    }

    /// Derive the current triage summary from the input and whatever analysis
    /// is stored right now.
    pub fn summary(&self) -> TriageSummary {
        TriageSummary::derive(&self.input, self.analysis().as_ref())
    }

    /// Trigger one review. No retry, no timeout, no cancellation: a single
    /// best-effort call per trigger.
    pub async fn request_review(
        &self,
        client: &dyn AnalyzeClient,
        alerts: &dyn AlertSink,
    ) -> ReviewOutcome {
        // Guarded entry: claim the flag and clear the prior result in one
        // critical section. The lock is never held across the await.
        {
            let mut st = self.state.lock().expect("card state poisoned");
            if st.analyzing {
                return ReviewOutcome::Busy;
            }
            st.analysis = None;
            st.analyzing = true;
        }

        let res = client.analyze(&self.input.text).await;

        let mut st = self.state.lock().expect("card state poisoned");
        st.analyzing = false;
        match res {
            Ok(analysis) => {
                tracing::debug!(
                    target: "triage::card",
                    username = %self.input.username,
                    provider = client.provider_name(),
                    verdict = %analysis.verdict,
                    "analysis completed"
                );
                st.analysis = Some(analysis);
                ReviewOutcome::Completed
            }
            Err(err) => {
                tracing::warn!(
                    target: "triage::card",
                    username = %self.input.username,
                    provider = client.provider_name(),
                    error = %err,
                    "analysis failed"
                );
                alerts.alert(ANALYZE_FAILED_ALERT);
                ReviewOutcome::Failed
            }
        }
    }
}
