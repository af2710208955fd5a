//! CLI module for Lania
//!
//! Provides command-line interface using clap.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Lania - an interactive frontend project scaffolder
#[derive(Parser)]
#[command(name = "lan")]
#[command(author = "Lania Contributors")]
#[command(version)]
#[command(about = "Scaffold, serve and build frontend projects", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a project in the current (empty) directory
    #[command(visible_alias = "c")]
    Create(commands::create::CreateArgs),

    /// Start the dev server for the scaffolded project
    Dev(commands::dev::DevArgs),

    /// Produce a production build of the scaffolded project
    Build(commands::build::BuildArgs),
}
