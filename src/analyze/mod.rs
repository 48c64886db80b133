// src/analyze/mod.rs
//! Analysis backend integration: the wire types, the client abstraction, and
//! its configuration. Everything here treats failure uniformly ("request
//! failed"); callers decide how to surface it.

pub mod client;
pub mod config;

use serde::{Deserialize, Serialize};

// Re-export convenient types.
pub use crate::analyze::client::{
    build_client_from_config, AnalyzeClient, DynAnalyzeClient, FailingClient, HttpClient,
    MockClient,
};
pub use crate::analyze::config::AnalyzeConfig;

/// Verdict payload returned by the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: String,
    pub confidence: f32,
    pub explanation: String,
}
