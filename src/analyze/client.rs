// src/analyze/client.rs
//! Analysis client: trait object used by the card flow, the real reqwest
//! client, and mock implementations for tests and offline runs.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::analyze::config::{AnalyzeConfig, ENV_TEST_MODE};
use crate::analyze::AnalysisResult;

/// Trait object used by the card flow and tests.
pub trait AnalyzeClient: Send + Sync {
    /// Analyze the raw post text. Exactly one request per invocation; any
    /// transport error or non-2xx status comes back as a plain error.
    fn analyze<'a>(
        &'a self,
        tweet_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult>> + Send + 'a>>;
    /// Client name for diagnostics/logs.
    fn provider_name(&self) -> &'static str;
}

/// Convenient alias used by callers.
pub type DynAnalyzeClient = Arc<dyn AnalyzeClient>;

/// Factory: build a client according to config and environment.
///
/// * If `TRIAGE_TEST_MODE=mock`, returns a deterministic mock client.
/// * Otherwise builds the real HTTP client against `config.endpoint`.
pub fn build_client_from_config(config: &AnalyzeConfig) -> DynAnalyzeClient {
    if std::env::var(ENV_TEST_MODE)
        .map(|v| v == "mock")
        .unwrap_or(false)
    {
        return Arc::new(MockClient::new(AnalysisResult {
            verdict: "Suspect".to_string(),
            confidence: 0.5,
            explanation: "Deterministic mock verdict.".to_string(),
        }));
    }
    Arc::new(HttpClient::new(config))
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    tweet_text: &'a str,
}

/// Real client. One best-effort POST per call: no retry, no timeout, no
/// cancellation.
pub struct HttpClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpClient {
    pub fn new(config: &AnalyzeConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("threat-triage/0.1 (+github.com/threat-triage/threat-triage)")
            .build()
            .expect("reqwest client");
        Self {
            http,
            endpoint: config.endpoint.clone(),
        }
    }

    async fn analyze_impl(&self, tweet_text: &str) -> Result<AnalysisResult> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { tweet_text })
            .send()
            .await
            .context("analyze request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("analyze request failed: {status}");
        }

        let body: AnalysisResult = resp
            .json()
            .await
            .context("analyze response was not valid JSON")?;
        Ok(body)
    }
}

impl AnalyzeClient for HttpClient {
    fn analyze<'a>(
        &'a self,
        tweet_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult>> + Send + 'a>> {
        Box::pin(self.analyze_impl(tweet_text))
    }
    fn provider_name(&self) -> &'static str {
        "http"
    }
}

/// Deterministic client for tests/local runs. Counts calls and can delay its
/// answer to keep a request "in flight" for re-entrancy tests.
pub struct MockClient {
    fixed: AnalysisResult,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockClient {
    pub fn new(fixed: AnalysisResult) -> Self {
        Self {
            fixed,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of analyze calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalyzeClient for MockClient {
    fn analyze<'a>(
        &'a self,
        _tweet_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let out = self.fixed.clone();
        let delay = self.delay;
        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            Ok(out)
        })
    }
    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Always fails; used to exercise the failure branch of the card flow.
pub struct FailingClient;

impl AnalyzeClient for FailingClient {
    fn analyze<'a>(
        &'a self,
        _tweet_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult>> + Send + 'a>> {
        Box::pin(async { bail!("analyze request failed: connection refused") })
    }
    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
