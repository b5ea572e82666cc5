//! best-config: inspect JSON configuration directories
//!
//! Resolves and prints configuration the same way the library loads it.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
