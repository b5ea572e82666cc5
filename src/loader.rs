//! Config file loading

use crate::error::{ConfigError, Result};
use crate::options::{AppendOptions, EnvOptions, LoadOptions};
use crate::paths::{first_entry, normalize_dir, resolve_file_name};
use crate::registry::{self, Registry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Loads configuration files and publishes them into a [`Registry`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: Arc<Registry>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that publishes into the process-wide registry.
    pub fn new() -> Self {
        Self::with_registry(Arc::clone(registry::global()))
    }

    pub fn with_registry(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Resolve the base config file path without reading it.
    pub fn resolve(&self, opts: &LoadOptions) -> Result<String> {
        let dir = normalize_dir(&opts.path);
        if !Path::new(&dir).is_dir() {
            return Err(ConfigError::PathNotFound { path: dir });
        }

        let name = match opts.requested_file() {
            Some(file) => file.to_string(),
            None => {
                let first = first_entry(Path::new(&dir))
                    .map_err(|_| ConfigError::PathNotFound { path: dir.clone() })?;
                let Some(first) = first else {
                    return Err(ConfigError::EmptyDirectory { path: dir });
                };
                tracing::debug!("No config file requested, falling back to {}{}", dir, first);
                first
            }
        };

        let config_path = format!("{dir}{}", resolve_file_name(&name));
        if !Path::new(&config_path).exists() {
            return Err(ConfigError::FileNotFound { path: config_path });
        }
        Ok(config_path)
    }

    /// Load the base file, attach the append file and publish the result.
    pub fn load(&self, opts: &LoadOptions) -> Result<Value> {
        let config_path = self.resolve(opts)?;
        let mut config = read_json(&config_path)?;
        tracing::debug!("Loaded configuration from {}", config_path);

        if let Some(append) = &opts.append {
            attach(&mut config, &normalize_dir(&opts.path), &config_path, append)?;
        }

        if let Some(name) = opts.global_name() {
            self.registry.register(name, config.clone())?;
        }

        Ok(config)
    }

    /// Load and deserialize into `T`.
    pub fn load_as<T: DeserializeOwned>(&self, opts: &LoadOptions) -> Result<T> {
        let config = self.load(opts)?;
        serde_json::from_value(config).map_err(ConfigError::Deserialize)
    }

    /// Load the file named by an environment variable.
    ///
    /// An unset, empty or non-unicode variable leaves `file` unset, so the
    /// first entry of the directory is loaded instead.
    pub fn load_from_env(&self, opts: &LoadOptions, env: &EnvOptions) -> Result<Value> {
        let mut opts = opts.clone();
        opts.file = std::env::var(&env.env_var).ok();
        if opts.requested_file().is_none() {
            tracing::debug!("Environment variable {} is not set", env.env_var);
        }
        self.load(&opts)
    }

    /// Load the file named after this machine's host name.
    pub fn load_from_hostname(&self, opts: &LoadOptions) -> Result<Value> {
        let mut opts = opts.clone();
        opts.file = Some(hostname()?);
        self.load(&opts)
    }
}

pub fn hostname() -> Result<String> {
    whoami::fallible::hostname().map_err(ConfigError::Hostname)
}

fn attach(config: &mut Value, dir: &str, config_path: &str, append: &AppendOptions) -> Result<()> {
    let Some(file) = append.requested_file() else {
        return Ok(());
    };
    if append.key.is_empty() {
        return Err(ConfigError::AppendKeyRequired);
    }
    let Some(object) = config.as_object_mut() else {
        return Err(ConfigError::AppendTargetNotObject { path: config_path.to_string() });
    };
    if object.contains_key(&append.key) {
        return Err(ConfigError::AppendKeyCollision { key: append.key.clone() });
    }

    let append_path = format!("{dir}{}", resolve_file_name(file));
    if !Path::new(&append_path).exists() {
        return Err(ConfigError::AppendFileNotFound { path: append_path });
    }

    let appended = read_json(&append_path)?;
    tracing::debug!("Appended {} under key '{}'", append_path, append.key);
    object.insert(append.key.clone(), appended);
    Ok(())
}

fn read_json(path: &str) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| ConfigError::InvalidConfig {
        path: path.to_string(),
        source: serde_json::Error::io(e),
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|source| ConfigError::InvalidConfig { path: path.to_string(), source })
}

/// [`ConfigLoader::load`] against the process-wide registry.
pub fn load(opts: &LoadOptions) -> Result<Value> {
    ConfigLoader::new().load(opts)
}

/// [`ConfigLoader::load_as`] against the process-wide registry.
pub fn load_as<T: DeserializeOwned>(opts: &LoadOptions) -> Result<T> {
    ConfigLoader::new().load_as(opts)
}

/// [`ConfigLoader::load_from_env`] against the process-wide registry.
pub fn load_from_env(opts: &LoadOptions, env: &EnvOptions) -> Result<Value> {
    ConfigLoader::new().load_from_env(opts, env)
}

/// [`ConfigLoader::load_from_hostname`] against the process-wide registry.
pub fn load_from_hostname(opts: &LoadOptions) -> Result<Value> {
    ConfigLoader::new().load_from_hostname(opts)
}
