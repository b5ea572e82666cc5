//! Show command implementation

use anyhow::{Context, Result};
use best_config::{AppendOptions, ConfigLoader};
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Attach this file under --append-key
    #[arg(short, long, value_name = "NAME")]
    pub append_file: Option<String>,

    /// Key the appended file is attached under
    #[arg(
        short = 'k',
        long,
        value_name = "KEY",
        default_value = best_config::options::DEFAULT_APPEND_KEY
    )]
    pub append_key: String,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut opts = args.source.to_options()?;
    if let Some(file) = args.append_file {
        opts = opts.append(AppendOptions::new(file).key(args.append_key));
    }

    let config = ConfigLoader::new().load(&opts)?;
    let rendered = if args.compact {
        serde_json::to_string(&config)
    } else {
        serde_json::to_string_pretty(&config)
    }
    .context("Failed rendering configuration")?;
    println!("{}", rendered);
    Ok(())
}
