use std::env;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::MatchCount;

pub const DEFAULT_FOOTBALL_API_BASE_URL: &str = "https://api.football-data.org/v4";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

/// Longest history window, in days, that a match fetch may cover.
pub const MAX_LOOKBACK_DAYS: i64 = 3650;

#[derive(Debug, Clone)]
pub struct Config {
    pub football_api_key: String,
    pub anthropic_api_key: String,
    pub football_api_base_url: String,
    pub anthropic_model: String,
    pub bind_addr: String,
    pub stats_timeout: Duration,
    pub llm_timeout: Duration,
    pub match_lookback_days: i64,
    pub default_match_count: MatchCount,
    pub restrict_to_competition: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} environment variable not set", key)))
        };

        let football_api_key = required("FOOTBALL_API_KEY")?;
        let anthropic_api_key = required("ANTHROPIC_API_KEY")?;

        let football_api_base_url = lookup("FOOTBALL_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_FOOTBALL_API_BASE_URL.to_string());

        let anthropic_model =
            lookup("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:7860".to_string());

        let stats_timeout = lookup("STATS_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let llm_timeout = lookup("LLM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let match_lookback_days = lookup("MATCH_LOOKBACK_DAYS")
            .and_then(|v| v.parse().ok())
            .filter(|days: &i64| (1..=MAX_LOOKBACK_DAYS).contains(days))
            .unwrap_or(365);

        let default_match_count = lookup("DEFAULT_MATCH_COUNT")
            .and_then(|v| v.parse::<u32>().ok())
            .map(MatchCount::clamped)
            .unwrap_or_default();

        let restrict_to_competition = lookup("RESTRICT_TO_COMPETITION")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            football_api_key,
            anthropic_api_key,
            football_api_base_url,
            anthropic_model,
            bind_addr,
            stats_timeout,
            llm_timeout,
            match_lookback_days,
            default_match_count,
            restrict_to_competition,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub default_match_count: MatchCount,
    pub restrict_to_competition: bool,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            default_match_count: config.default_match_count,
            restrict_to_competition: config.restrict_to_competition,
        }
    }
}
