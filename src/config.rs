//! Build-time configuration
//!
//! Values are baked in when Trunk compiles the bundle:
//! - `LEAD_INTAKE_API_URL`: backend base URL (empty = same origin)
//! - `LEAD_INTAKE_LOG`: console log level (`trace` .. `error`)

use tracing::Level;

const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base: String,
    /// Maximum level written to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Configuration captured from the build environment
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LEAD_INTAKE_API_URL"),
            option_env!("LEAD_INTAKE_LOG"),
        )
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base: normalize_base(api_base.unwrap_or_default()),
            log_level: log_level.and_then(parse_level).unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
