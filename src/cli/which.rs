//! Which command implementation

use anyhow::Result;
use best_config::ConfigLoader;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct WhichArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: WhichArgs) -> Result<()> {
    let opts = args.source.to_options()?;
    let path = ConfigLoader::new().resolve(&opts)?;
    println!("{}", path);
    Ok(())
}
