//! Command implementations

pub mod build;
pub mod create;
pub mod dev;

use std::env;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::core::{LaniaError, LaniaResult};

/// Run a shell command inside a project directory with node_modules/.bin
/// prepended to PATH, inheriting stdio.
pub(crate) async fn run_shell(
    command: &str,
    project_dir: &Path,
    envs: &[(&str, &str)],
) -> LaniaResult<()> {
    let shell = get_shell();
    let shell_arg = get_shell_arg();

    let node_modules_bin = project_dir.join("node_modules").join(".bin");
    let path_env = env::var("PATH").unwrap_or_default();
    let new_path = format!(
        "{}{}{}",
        node_modules_bin.display(),
        if cfg!(windows) { ";" } else { ":" },
        path_env
    );

    let mut cmd = Command::new(&shell);
    cmd.arg(&shell_arg)
        .arg(command)
        .current_dir(project_dir)
        .env("PATH", &new_path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let status = cmd.status().await?;
    if !status.success() {
        return Err(LaniaError::CommandFailed(format!(
            "'{}' exited with code {}",
            command,
            status.code().unwrap_or(1)
        )));
    }
    Ok(())
}

/// Shell used for running external tools
fn get_shell() -> String {
    if cfg!(windows) {
        env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

fn get_shell_arg() -> String {
    if cfg!(windows) {
        "/c".to_string()
    } else {
        "-c".to_string()
    }
}
