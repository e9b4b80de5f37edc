//! Process configuration, read once from the environment at start-up.

use serde::{Deserialize, Serialize};

use uniinv_observability::{LogFormat, ObservabilityConfig};

/// How reports and search results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub observability: ObservabilityConfig,
    /// Preload the demo furniture and lab items.
    pub seed_demo_data: bool,
    pub report_format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            seed_demo_data: true,
            report_format: ReportFormat::Text,
        }
    }
}

impl AppConfig {
    /// Read `UNIINV_*` variables (and `RUST_LOG` as a filter fallback).
    ///
    /// Returns the config plus a warning per value that could not be used.
    /// Tracing is not up yet when this runs, so the caller logs them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(filter) = lookup("UNIINV_LOG").or_else(|| lookup("RUST_LOG")) {
            if !filter.trim().is_empty() {
                config.observability.filter = filter.trim().to_string();
            }
        }

        if let Some(raw) = lookup("UNIINV_LOG_FORMAT") {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.observability.format = format,
                Err(e) => warnings.push(format!("UNIINV_LOG_FORMAT ignored: {e}")),
            }
        }

        if let Some(raw) = lookup("UNIINV_SEED") {
            match parse_flag(&raw) {
                Some(flag) => config.seed_demo_data = flag,
                None => warnings.push(format!("UNIINV_SEED ignored: not a boolean: {raw}")),
            }
        }

        if let Some(raw) = lookup("UNIINV_REPORT_FORMAT") {
            match raw.parse::<ReportFormat>() {
                Ok(format) => config.report_format = format,
                Err(e) => warnings.push(format!("UNIINV_REPORT_FORMAT ignored: {e}")),
            }
        }

        (config, warnings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
