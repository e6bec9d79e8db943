//! Shared types and configuration for the viralscan workspace.

pub mod config;
pub mod posts;
pub mod topics;

pub use config::{load_scan_config, load_scan_config_from_env, Backend, ScanConfig};
pub use posts::PostRecord;
pub use topics::{load_topics, validate_topics, TopicsFile, DEFAULT_TOPICS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read topics file {path}: {source}")]
    TopicsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse topics file: {0}")]
    TopicsFileParse(#[from] serde_yaml::Error),

    #[error("topics validation failed: {0}")]
    Validation(String),
}
