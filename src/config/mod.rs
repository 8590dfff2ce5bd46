//! Configuration module for the Question Aura client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::errors::{ClientError, ClientResult};

/// File name of the persisted demo session inside the state directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Default number of questions per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API
    pub api_url: String,
    /// Directory holding locally persisted session state
    pub state_dir: PathBuf,
    /// Questions per page for paginated views
    pub page_size: u32,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Identity provider access token, if signed in through the provider
    pub provider_access_token: Option<String>,
    /// Identity provider ID token carrying the profile claims
    pub provider_id_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("QA_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let state_dir = env::var("QA_STATE_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let page_size = match env::var("QA_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let log_level = env::var("QA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let provider_access_token = non_empty_var("QA_PROVIDER_ACCESS_TOKEN");
        let provider_id_token = non_empty_var("QA_PROVIDER_ID_TOKEN");

        Ok(Self {
            api_url,
            state_dir,
            page_size,
            log_level,
            provider_access_token,
            provider_id_token,
        })
    }

    /// Path of the persisted demo session file.
    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE_NAME)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_page_size(raw: &str) -> ClientResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ClientError::Config(format!(
            "QA_PAGE_SIZE must be a positive integer, got {:?}",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("QA_API_URL");
        env::remove_var("QA_STATE_DIR");
        env::remove_var("QA_PAGE_SIZE");
        env::remove_var("QA_LOG_LEVEL");
        env::remove_var("QA_PROVIDER_ACCESS_TOKEN");
        env::remove_var("QA_PROVIDER_ID_TOKEN");

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:8000");
        assert_eq!(config.state_dir, PathBuf::from("./data"));
        assert_eq!(config.session_path(), PathBuf::from("./data/session.json"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log_level, "info");
        assert!(config.provider_access_token.is_none());
        assert!(config.provider_id_token.is_none());
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!(parse_page_size("25").unwrap(), 25);
        assert_eq!(parse_page_size(" 5 ").unwrap(), 5);
        assert!(matches!(parse_page_size("0"), Err(ClientError::Config(_))));
        assert!(matches!(parse_page_size("ten"), Err(ClientError::Config(_))));
    }
}
