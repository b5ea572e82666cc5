//! Shared CLI arguments.

use anyhow::Result;
use best_config::options::DEFAULT_PATH;
use best_config::{loader, LoadOptions};
use clap::Args;

/// Where the configuration lives and how the base file is chosen.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Configuration directory
    #[arg(short, long, value_name = "DIR", env = "BEST_CONFIG_PATH", default_value = DEFAULT_PATH)]
    pub path: String,

    /// Base file name (".json" is added when there is no extension)
    #[arg(short, long, value_name = "NAME", conflicts_with_all = ["from_env", "from_hostname"])]
    pub file: Option<String>,

    /// Take the base file name from an environment variable
    #[arg(
        long,
        value_name = "VAR",
        num_args = 0..=1,
        default_missing_value = best_config::options::DEFAULT_ENV_VAR,
        conflicts_with = "from_hostname"
    )]
    pub from_env: Option<String>,

    /// Take the base file name from this machine's host name
    #[arg(long)]
    pub from_hostname: bool,
}

impl SourceArgs {
    /// Build load options with the base file already decided.
    ///
    /// An unset `--from-env` variable leaves the file unset, like the library does.
    pub fn to_options(&self) -> Result<LoadOptions> {
        let mut opts = LoadOptions::new().path(self.path.clone());
        opts.file = if let Some(var) = &self.from_env {
            std::env::var(var).ok()
        } else if self.from_hostname {
            Some(loader::hostname()?)
        } else {
            self.file.clone()
        };
        Ok(opts)
    }
}
