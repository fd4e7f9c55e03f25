pub mod app_config;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::CollectorConfig;
pub use config::{load_config, load_config_from_env};
pub use records::{GameIdentity, Review};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
