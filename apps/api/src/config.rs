use std::time::Duration;

use anyhow::{Context, Result};

use crate::pipeline::TransitionPolicy;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Application configuration loaded from environment variables.
///
/// The Gemini API key is not part of this struct: it is looked up on every
/// parse call so a key exported after startup is still picked up.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub resume_parse_timeout: Duration,
    pub search_delay: Duration,
    pub quick_filter_delay: Duration,
    pub transition_policy: TransitionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            resume_parse_timeout: Duration::from_secs(30),
            search_delay: Duration::from_millis(1200),
            quick_filter_delay: Duration::from_millis(800),
            transition_policy: TransitionPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_base),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            resume_parse_timeout: Duration::from_secs(parse_env(
                "RESUME_PARSE_TIMEOUT_SECS",
                defaults.resume_parse_timeout.as_secs(),
            )?),
            search_delay: Duration::from_millis(parse_env(
                "SEARCH_DELAY_MS",
                defaults.search_delay.as_millis() as u64,
            )?),
            quick_filter_delay: Duration::from_millis(parse_env(
                "QUICK_FILTER_DELAY_MS",
                defaults.quick_filter_delay.as_millis() as u64,
            )?),
            transition_policy: match std::env::var("TRANSITION_POLICY") {
                Ok(raw) => raw
                    .parse()
                    .with_context(|| format!("TRANSITION_POLICY has invalid value '{raw}'"))?,
                Err(_) => defaults.transition_policy,
            },
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
