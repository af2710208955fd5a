//! lan create - Scaffold a project into the current directory

use std::env;
use std::time::Instant;

use clap::Args;

use crate::cli::output;
use crate::core::LaniaResult;
use crate::scaffold::Builder;

#[derive(Args)]
pub struct CreateArgs {
    /// Project name (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,
}

pub async fn execute(args: CreateArgs) -> LaniaResult<()> {
    let start_time = Instant::now();

    let builder = Builder::new(env::current_dir()?);
    builder.run(args.name).await?;

    output::info(&format!(
        "Done in {}",
        output::format_duration(start_time.elapsed().as_millis())
    ));
    Ok(())
}
