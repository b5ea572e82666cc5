//! Load options and their defaults

use serde::Deserialize;

pub const DEFAULT_PATH: &str = "config";
pub const DEFAULT_APPEND_KEY: &str = "common";
pub const DEFAULT_ENV_VAR: &str = "NODE_ENV";

/// Options for a single load.
///
/// Field defaults: `file` unset (first directory entry is used), `path`
/// `"config"`, no global registration, no append.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadOptions {
    /// Base file name; `.json` is added when it has no extension.
    pub file: Option<String>,
    /// Directory holding the configuration files.
    pub path: String,
    /// Name to publish the loaded config under in the registry.
    pub add_to_global_with_name: Option<String>,
    pub append: Option<AppendOptions>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file: None,
            path: DEFAULT_PATH.to_string(),
            add_to_global_with_name: None,
            append: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn add_to_global_with_name(mut self, name: impl Into<String>) -> Self {
        self.add_to_global_with_name = Some(name.into());
        self
    }

    pub fn append(mut self, append: AppendOptions) -> Self {
        self.append = Some(append);
        self
    }

    /// The base file name, treating an empty string as unset.
    pub(crate) fn requested_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }

    /// The registration name, treating an empty string as unset.
    pub(crate) fn global_name(&self) -> Option<&str> {
        self.add_to_global_with_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// A second file attached to the loaded config under `key`.
///
/// Without a `file` the append step is skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppendOptions {
    #[serde(default = "default_append_key")]
    pub key: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_append_key() -> String {
    DEFAULT_APPEND_KEY.to_string()
}

impl AppendOptions {
    pub fn new(file: impl Into<String>) -> Self {
        Self { key: default_append_key(), file: Some(file.into()) }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The append file name, treating an empty string as unset.
    pub(crate) fn requested_file(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }
}

/// Which environment variable names the base file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvOptions {
    pub env_var: String,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self { env_var: DEFAULT_ENV_VAR.to_string() }
    }
}

impl EnvOptions {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self { env_var: env_var.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = LoadOptions::default();
        assert_eq!(opts.path, "config");
        assert!(opts.file.is_none());
        assert!(opts.add_to_global_with_name.is_none());
        assert!(opts.append.is_none());
        assert_eq!(AppendOptions::new("production").key, "common");
        assert_eq!(EnvOptions::default().env_var, "NODE_ENV");
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let opts: LoadOptions = serde_json::from_str(
            r#"{"file":"server1","addToGlobalWithName":"APP","append":{"file":"production"}}"#,
        )
        .expect("parse options");
        assert_eq!(opts.path, "config");
        assert_eq!(opts.file.as_deref(), Some("server1"));
        assert_eq!(opts.global_name(), Some("APP"));
        assert_eq!(opts.append, Some(AppendOptions::new("production")));

        let env: EnvOptions = serde_json::from_str(r#"{"envVar":"APP_ENV"}"#).expect("parse env");
        assert_eq!(env.env_var, "APP_ENV");
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let opts = LoadOptions::new().file("").add_to_global_with_name("");
        assert!(opts.requested_file().is_none());
        assert!(opts.global_name().is_none());
        assert!(AppendOptions::new("").requested_file().is_none());
    }

    #[test]
    fn append_without_file_deserializes() {
        let opts: LoadOptions =
            serde_json::from_str(r#"{"file":"server1","append":{"key":"common"}}"#)
                .expect("parse options");
        let append = opts.append.expect("append block");
        assert_eq!(append.key, "common");
        assert!(append.file.is_none());
        assert!(append.requested_file().is_none());
    }
}
