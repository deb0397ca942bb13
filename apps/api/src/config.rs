use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Everything is optional: without `GEMINI_API_KEY` the service runs on the
/// local simplifier alone.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub port: u16,
    pub rust_log: String,
    pub lexicon_path: Option<PathBuf>,
    pub cors_allowed_origins: Vec<String>,
    /// Requests one client IP may make per window.
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let rate_limit_max_requests = non_empty("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|| "100".to_string())
            .parse::<u32>()
            .context("RATE_LIMIT_MAX_REQUESTS must be a positive integer")?;
        let rate_limit_window_secs = non_empty("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|| "900".to_string())
            .parse::<u64>()
            .context("RATE_LIMIT_WINDOW_SECS must be a positive integer")?;
        if rate_limit_max_requests == 0 || rate_limit_window_secs == 0 {
            bail!("rate limit quota and window must both be greater than zero");
        }

        Ok(Config {
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: non_empty("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            lexicon_path: non_empty("LEXICON_PATH").map(PathBuf::from),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_max_requests,
            rate_limit_window_secs,
        })
    }

    /// Time for one spent request to be replenished: the window spread evenly over the quota.
    pub fn rate_limit_period(&self) -> Duration {
        let window_ms = self.rate_limit_window_secs.saturating_mul(1000);
        Duration::from_millis((window_ms / u64::from(self.rate_limit_max_requests)).max(1))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.port, 3001);
        assert_eq!(config.rust_log, "info");
        assert!(config.lexicon_path.is_none());
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.rate_limit_max_requests, 100);
        assert_eq!(config.rate_limit_window_secs, 900);
    }

    #[test]
    fn test_rate_limit_period_spreads_window_over_quota() {
        // 100 requests per 15 minutes → one request back every 9 seconds
        let config = config_from(&[]).unwrap();
        assert_eq!(config.rate_limit_period(), Duration::from_secs(9));

        let config = config_from(&[
            ("RATE_LIMIT_MAX_REQUESTS", "3"),
            ("RATE_LIMIT_WINDOW_SECS", "1"),
        ])
        .unwrap();
        assert_eq!(config.rate_limit_period(), Duration::from_millis(333));
    }

    #[test]
    fn test_zero_rate_limit_is_error() {
        assert!(config_from(&[("RATE_LIMIT_MAX_REQUESTS", "0")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_WINDOW_SECS", "0")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_MAX_REQUESTS", "lots")]).is_err());
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, https://edvia.vercel.app,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://edvia.vercel.app"]
        );
    }
}
