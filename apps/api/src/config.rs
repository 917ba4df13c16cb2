use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub model_dir: PathBuf,
    /// Enables the AI response cache.
    pub redis_url: Option<String>,
    /// Enables archival of uploaded PDFs.
    pub s3: Option<S3Config>,
    /// Enables job search.
    pub adzuna: Option<AdzunaCredentials>,
    /// Admin endpoints answer 403 while this is unset.
    pub admin_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        // S3 is all-or-nothing, keyed on the bucket name
        let s3 = match optional_env("S3_BUCKET") {
            Some(bucket) => Some(S3Config {
                bucket,
                endpoint: require_env("S3_ENDPOINT")?,
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        let adzuna = match (optional_env("ADZUNA_APP_ID"), optional_env("ADZUNA_API_KEY")) {
            (Some(app_id), Some(api_key)) => Some(AdzunaCredentials { app_id, api_key }),
            _ => None,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            model_dir: optional_env("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("models")),
            redis_url: optional_env("REDIS_URL"),
            s3,
            adzuna,
            admin_token: optional_env("ADMIN_TOKEN"),
            port: parse_port(optional_env("PORT").as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_parses_value() {
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(parse_port(Some("not-a-port")).is_err());
        assert!(parse_port(Some("70000")).is_err());
    }
}
