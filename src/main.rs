//! Lania - an interactive frontend project scaffolder
//!
//! `lan create` prompts for project choices, renders a template set into the
//! current directory, resolves dependency versions from the npm registry and
//! installs them. `lan dev` and `lan build` drive the generated project's
//! bundler from the persisted `lan.config.json`.

mod cli;
mod core;
mod registry;
mod scaffold;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use crate::core::LaniaResult;

#[tokio::main]
async fn main() -> LaniaResult<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let result = match cli.command {
        Commands::Create(args) => cli::commands::create::execute(args).await,
        Commands::Dev(args) => cli::commands::dev::execute(args).await,
        Commands::Build(args) => cli::commands::build::execute(args).await,
    };

    // Single reporting path for every fatal error
    if let Err(e) = result {
        eprintln!("{} {}", console::style("error:").red().bold(), e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
