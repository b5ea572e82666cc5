//! Error types for configuration loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that can go wrong while resolving, loading or publishing a config.
///
/// All variants are terminal for the call that produced them; no partial
/// configuration is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the config path not exists: {path}")]
    PathNotFound { path: String },

    #[error("empty folder: {path}")]
    EmptyDirectory { path: String },

    #[error("the config file at:{path} not exists")]
    FileNotFound { path: String },

    /// Read or parse failure, for both the base and the append file.
    #[error("invalid configuration file: {path}")]
    InvalidConfig {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("append key is required")]
    AppendKeyRequired,

    #[error("a key with name {key} already exists, please change the key name")]
    AppendKeyCollision { key: String },

    #[error("cannot append to non-object configuration: {path}")]
    AppendTargetNotObject { path: String },

    #[error("the file at:{path} not exists")]
    AppendFileNotFound { path: String },

    #[error("you can not add to the global object with this name: {name}")]
    GlobalNameCollision { name: String },

    #[error("unable to determine host name")]
    Hostname(#[source] std::io::Error),

    #[error("configuration does not match the requested type")]
    Deserialize(#[source] serde_json::Error),
}

impl ConfigError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::PathNotFound { path }
            | ConfigError::EmptyDirectory { path }
            | ConfigError::FileNotFound { path }
            | ConfigError::InvalidConfig { path, .. }
            | ConfigError::AppendTargetNotObject { path }
            | ConfigError::AppendFileNotFound { path } => Some(path),
            _ => None,
        }
    }
}
