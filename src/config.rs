//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use sha2::{Digest, Sha256};

/// Heading used on exported documents when CLUB_NAME is unset
pub const DEFAULT_CLUB_NAME: &str = "Clube de Desbravadores";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// SHA-256 hex digest of the admin API key
    pub api_key_hash: String,

    /// Club name shown on exported documents
    pub club_name: String,

    /// Load the demo roster on startup
    pub seed_demo_data: bool,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let api_key = env::var("ADMIN_API_KEY").map_err(|_| ConfigError::MissingEnv("ADMIN_API_KEY"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue("ADMIN_API_KEY"));
        }

        let club_name = env::var("CLUB_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLUB_NAME.to_string());

        let seed_demo_data = parse_bool(
            "SEED_DEMO_DATA",
            &env::var("SEED_DEMO_DATA").unwrap_or_else(|_| "true".to_string()),
        )?;

        let log_format = env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "text".to_string())
            .parse()?;

        Ok(Self {
            host,
            port,
            environment,
            api_key_hash: hash_api_key(&api_key),
            club_name,
            seed_demo_data,
            log_format,
        })
    }

    /// Configuration for tests and embedding: demo data off, given key
    pub fn with_api_key(api_key: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "development".to_string(),
            api_key_hash: hash_api_key(api_key),
            club_name: DEFAULT_CLUB_NAME.to_string(),
            seed_demo_data: false,
            log_format: LogFormat::Text,
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// SHA-256 hex digest of an API key
pub fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue(name)),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
