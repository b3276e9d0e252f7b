use anyhow::{Context, Result};

use crate::parsing::DEFAULT_SKILL_VOCABULARY;

/// Application configuration loaded from environment variables once at
/// startup. Components receive it through `AppState` — nothing reads the
/// environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    /// Origins allowed by the CORS layer. Credentials are allowed, so this
    /// must be an explicit list, never a wildcard.
    pub allowed_origins: Vec<String>,
    /// Timeout applied to both the document fetch and the generation call.
    pub request_timeout_secs: u64,
    /// Closed skill vocabulary for the local field extractor.
    pub skill_vocabulary: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origins: parse_list(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "https://uniplace.vercel.app".to_string()),
            ),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            skill_vocabulary: match std::env::var("SKILL_VOCABULARY") {
                Ok(raw) => parse_list(&raw),
                Err(_) => DEFAULT_SKILL_VOCABULARY
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated env value, trimming entries and dropping empties.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_empties() {
        let parsed = parse_list(" python , rust ,, go ,");
        assert_eq!(parsed, vec!["python", "rust", "go"]);
    }

    #[test]
    fn test_parse_list_single_entry() {
        assert_eq!(
            parse_list("https://uniplace.vercel.app"),
            vec!["https://uniplace.vercel.app"]
        );
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }
}
