use super::{parse_var, var_or};
use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Origin allowed to call the API from a browser (the marketing/pricing site)
    pub cors_allowed_origin: Option<String>,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
            cors_allowed_origin: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            var_or("SERVER_HOST", "127.0.0.1"),
            parse_var("SERVER_PORT", "8080")?,
        );

        if let Ok(workers) = std::env::var("SERVER_WORKERS") {
            config.workers = workers
                .trim()
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;
        }

        config.cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
