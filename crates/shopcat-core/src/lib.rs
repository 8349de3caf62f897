pub mod app_config;
pub mod config;
pub mod rows;
pub mod stores;

pub use app_config::{AppConfig, DEFAULT_USER_AGENT, MAX_PAGE_LIMIT};
pub use config::{load_app_config, load_app_config_from_env};
pub use rows::{FlatRow, CSV_HEADERS};
pub use stores::{load_stores, StoresFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stores file {path}: {source}")]
    StoresFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stores file: {0}")]
    StoresFileParse(#[from] serde_yaml::Error),
}
