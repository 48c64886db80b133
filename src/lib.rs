// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod alert;
pub mod analyze;
pub mod card;
pub mod render;
pub mod threat;
pub mod triage;

// ---- Re-exports for stable public API ----
pub use crate::alert::{AlertSink, RecordingAlerts, TracingAlerts};
pub use crate::analyze::{AnalysisResult, AnalyzeClient, AnalyzeConfig, DynAnalyzeClient};
pub use crate::card::{ReviewOutcome, ThreatCard, ANALYZE_FAILED_ALERT};
pub use crate::threat::{RiskTier, ThreatInput};
pub use crate::triage::{SignalPoint, SignalStatus, TriageSummary};
