// src/alert.rs
//! User-facing alert sink. The card flow reports a failed analysis exactly
//! once per attempt through this seam; production uses the tracing-backed
//! sink, tests plug in a recorder.

use std::sync::Mutex;

pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Default sink: surfaces the alert as a warning log line.
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn alert(&self, message: &str) {
        tracing::warn!(target: "triage::alert", "{message}");
    }
}

/// Records every alert; lets tests assert "exactly once" behavior.
#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("alert log poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().expect("alert log poisoned").len()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .expect("alert log poisoned")
            .push(message.to_string());
    }
}
