use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
    /// Upper bound on a single completion call. Reqwest aborts the request past this.
    pub upstream_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: parse_port(std::env::var("PORT").ok())?,
            upstream_timeout: parse_timeout(std::env::var("UPSTREAM_TIMEOUT_SECS").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
        None => Ok(DEFAULT_PORT),
    }
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let secs = match raw {
        Some(value) => value.trim().parse::<u64>().with_context(|| {
            format!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got '{value}'")
        })?,
        None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
    };
    anyhow::ensure!(secs > 0, "UPSTREAM_TIMEOUT_SECS must be greater than zero");
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_3001() {
        assert_eq!(parse_port(None).unwrap(), 3001);
    }

    #[test]
    fn test_port_parses_explicit_value() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_timeout_defaults_to_60s() {
        assert_eq!(parse_timeout(None).unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn test_timeout_rejects_zero() {
        assert!(parse_timeout(Some("0".to_string())).is_err());
    }
}
