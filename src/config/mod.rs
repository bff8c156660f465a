use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod billing;
pub mod server;

pub use billing::BillingConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!(
                "Invalid LOG_FORMAT: {}",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: var_or("APP_ENV", "development"),
                log_level: var_or("LOG_LEVEL", "info"),
                log_format: var_or("LOG_FORMAT", "pretty").parse()?,
            },
            server: ServerConfig::from_env()?,
            billing: BillingConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.billing.validate()?;

        Ok(())
    }
}

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to `default` when unset
pub(crate) fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    var_or(name, default)
        .trim()
        .parse()
        .map_err(|_| AppError::configuration(format!("Invalid {}", name)))
}
