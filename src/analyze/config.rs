// src/analyze/config.rs
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

pub const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:8000/analyze-threat";
pub const DEFAULT_CONFIG_PATH: &str = "config/triage.json";

/// Env var overriding the analyze endpoint regardless of the config file.
pub const ENV_ANALYZE_URL: &str = "TRIAGE_ANALYZE_URL";
/// Set to "mock" to get a deterministic client with no network I/O.
pub const ENV_TEST_MODE: &str = "TRIAGE_TEST_MODE";

fn default_endpoint() -> String {
    DEFAULT_ANALYZE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Analysis endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl AnalyzeConfig {
    /// Load from a JSON file, then apply env overrides. Missing or malformed
    /// files fall back to defaults; the env var wins over the file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let mut cfg = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => AnalyzeConfig::default(),
        };
        if let Ok(url) = env::var(ENV_ANALYZE_URL) {
            let url = url.trim();
            if !url.is_empty() {
                cfg.endpoint = url.to_string();
            }
        }
        cfg
    }

    /// Load from the conventional path (`config/triage.json`).
    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }
}
