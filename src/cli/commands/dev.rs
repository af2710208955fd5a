//! lan dev - Start the dev server matching the project config

use std::env;

use clap::Args;

use crate::cli::commands::run_shell;
use crate::cli::output;
use crate::core::config::ProjectConfig;
use crate::core::options::BuildTool;
use crate::core::{LaniaError, LaniaResult};

#[derive(Args)]
pub struct DevArgs {}

pub async fn execute(_args: DevArgs) -> LaniaResult<()> {
    let project_dir = env::current_dir()?;
    let config = ProjectConfig::load(&project_dir)?;

    // App projects carry exactly one bundler; the first entry decides
    let (command, envs): (&str, &[(&str, &str)]) = match config.build_tools[0] {
        BuildTool::Webpack => (
            "webpack serve --config webpack.config.js",
            &[("NODE_ENV", "development")],
        ),
        BuildTool::Vite => ("vite", &[]),
        other => {
            return Err(LaniaError::config(format!(
                "'{}' projects have no dev server",
                other.as_str()
            )))
        }
    };

    output::info(&format!("Starting dev server ({})", command));
    run_shell(command, &project_dir, envs).await
}
