//! lan build - Production build via the configured bundler

use std::env;

use clap::Args;

use crate::cli::commands::run_shell;
use crate::cli::output;
use crate::core::config::ProjectConfig;
use crate::core::options::{BuildTool, Frame};
use crate::core::LaniaResult;

#[derive(Args)]
pub struct BuildArgs {}

pub async fn execute(_args: BuildArgs) -> LaniaResult<()> {
    let project_dir = env::current_dir()?;
    let config = ProjectConfig::load(&project_dir)?;

    let mut envs: &[(&str, &str)] = &[];
    let command = if config.build_tools.contains(&BuildTool::Webpack) {
        envs = &[("NODE_ENV", "production")];
        "webpack --config webpack.config.js".to_string()
    } else if config.build_tools.contains(&BuildTool::Vite) {
        build_command_for_vite(&config)
    } else {
        "rollup --config rollup.config.js".to_string()
    };

    output::info(&format!("Building ({})", command));
    run_shell(&command, &project_dir, envs).await
}

/// Vite builds chain a framework type-check first when TypeScript is on
fn build_command_for_vite(config: &ProjectConfig) -> String {
    match config.frame {
        Some(Frame::Vue) if config.use_ts => "vue-tsc && vite build".to_string(),
        Some(Frame::Svelte) => "vite build".to_string(),
        _ if config.use_ts => "tsc && vite build".to_string(),
        _ => "vite build".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{PackageTool, ProjectType};

    fn config(frame: Option<Frame>, use_ts: bool) -> ProjectConfig {
        ProjectConfig {
            project_type: ProjectType::Spa,
            frame,
            build_tools: vec![BuildTool::Vite],
            use_ts,
            package_tool: PackageTool::Npm,
        }
    }

    #[test]
    fn vue_with_typescript_chains_vue_tsc() {
        let cmd = build_command_for_vite(&config(Some(Frame::Vue), true));
        assert_eq!(cmd, "vue-tsc && vite build");
    }

    #[test]
    fn svelte_skips_the_type_check_step() {
        let cmd = build_command_for_vite(&config(Some(Frame::Svelte), true));
        assert_eq!(cmd, "vite build");
    }

    #[test]
    fn default_with_typescript_chains_tsc() {
        let cmd = build_command_for_vite(&config(Some(Frame::React), true));
        assert_eq!(cmd, "tsc && vite build");
    }

    #[test]
    fn no_typescript_means_plain_vite_build() {
        let cmd = build_command_for_vite(&config(Some(Frame::React), false));
        assert_eq!(cmd, "vite build");
    }
}
