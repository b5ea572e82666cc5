//! best-config: load JSON configuration files
//!
//! Picks a JSON file from a configuration directory (by explicit name, by an
//! environment variable, by host name, or the first entry), optionally
//! attaches a second file under a key, and optionally publishes the result
//! into a named [`Registry`].
//!
//! ```no_run
//! use best_config::{load, AppendOptions, LoadOptions};
//!
//! let config = load(
//!     &LoadOptions::new()
//!         .file("server1")
//!         .append(AppendOptions::new("production")),
//! )?;
//! println!("{}", config["common"]["foo"]);
//! # Ok::<(), best_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod options;
pub mod paths;
pub mod registry;

pub use error::{ConfigError, Result};
pub use loader::{load, load_as, load_from_env, load_from_hostname, ConfigLoader};
pub use options::{AppendOptions, EnvOptions, LoadOptions};
pub use registry::Registry;
