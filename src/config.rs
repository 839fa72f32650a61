// src/config.rs

use std::env;
use std::path::PathBuf;

/// Application configuration, sourced from the environment.
///
/// AWS credentials (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`) are not
/// held here; the SDK's environment credential chain reads them directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub catalog_path: PathBuf,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Display host for the startup log line only; never used for binding.
    pub public_host: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub region: String,
    pub bucket: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number")]
    InvalidPort,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort)?,
                public_host: env::var("PUBLIC_IP").unwrap_or_else(|_| "localhost".to_string()),
            },
            storage: StorageConfig {
                region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                bucket: env::var("AWS_BUCKET_NAME")
                    .unwrap_or_else(|_| "portfolio-uploads".to_string()),
            },
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "projects.json".to_string())
                .into(),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
        })
    }
}
