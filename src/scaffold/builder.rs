//! Scaffold orchestration
//!
//! Sequences one full run: precondition check, prompts, plugin selection,
//! dependency resolution, file emission, dependency installation. Each phase
//! returns its output and hands it to the next; nothing is accumulated on
//! shared mutable state.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::options::ProjectOptions;
use crate::core::{LaniaError, LaniaResult};
use crate::registry::{RegistryClient, ResolvedDependencyMap, INSTALL_REGISTRY};
use crate::scaffold::{
    get_an_available_port, plugin_for, Emitter, TaskSpec, TemplatePlugin,
};

/// Outcome of the emission phase
#[derive(Debug, Default, PartialEq)]
pub struct EmitReport {
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Drives one scaffold run against a target directory
pub struct Builder {
    root: PathBuf,
}

impl Builder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The full pipeline behind `lan create`
    pub async fn run(&self, name: Option<String>) -> LaniaResult<()> {
        ensure_empty(&self.root)?;

        let options = super::prompt::collect(name)?.normalize()?;
        let plugin = plugin_for(&options)?;

        let (dependencies, dev_dependencies) =
            resolve_dependencies(plugin.as_ref(), &options).await?;

        let report = emit_files(
            plugin.file_tasks(&options),
            &options,
            &self.root,
            &dependencies,
            &dev_dependencies,
        )
        .await;
        if report.failed > 0 {
            output::warning(&format!(
                "{} of {} files could not be created",
                report.failed,
                report.written + report.failed
            ));
        }

        install_dependencies(&options, &self.root).await;

        output::banner(&format!(
            "LANIA   {}-{}",
            options.project_type.as_str().to_uppercase(),
            options
                .frame
                .map(|f| f.as_str().to_uppercase())
                .unwrap_or_else(|| "NONE".to_string()),
        ));
        Ok(())
    }
}

/// The target directory must be empty before any side effect happens
fn ensure_empty(root: &Path) -> LaniaResult<()> {
    if std::fs::read_dir(root)?.next().is_some() {
        return Err(LaniaError::DirectoryNotEmpty);
    }
    Ok(())
}

/// Resolve runtime and dev dependency lists through the registry, one batch
/// after the other. A failure in either batch aborts the run.
async fn resolve_dependencies(
    plugin: &dyn TemplatePlugin,
    options: &ProjectOptions,
) -> LaniaResult<(ResolvedDependencyMap, ResolvedDependencyMap)> {
    let spec = plugin.compute_dependencies(options);
    let registry = RegistryClient::new()?;

    let spinner = output::spinner("Resolving dependencies...");
    let resolved: LaniaResult<(ResolvedDependencyMap, ResolvedDependencyMap)> = async {
        let dependencies = registry.resolve(&spec.dependencies).await?;
        let dev_dependencies = registry.resolve(&spec.dev_dependencies).await?;
        Ok((dependencies, dev_dependencies))
    }
    .await;
    spinner.finish_and_clear();

    match resolved {
        Ok(pair) => {
            output::success("Dependencies resolved");
            Ok(pair)
        }
        Err(e) => {
            output::error("Dependency resolution failed");
            Err(e)
        }
    }
}

/// Materialize and emit every task in declared order.
///
/// Hidden tasks are skipped. A failed task is reported and the loop moves
/// on; one broken template never aborts the run.
pub(crate) async fn emit_files(
    specs: Vec<TaskSpec>,
    options: &ProjectOptions,
    root: &Path,
    dependencies: &ResolvedDependencyMap,
    dev_dependencies: &ResolvedDependencyMap,
) -> EmitReport {
    let emitter = Emitter::new(root);
    let mut report = EmitReport::default();

    for spec in specs {
        let task = match spec {
            TaskSpec::Ready(task) => task,
            TaskSpec::WithPort { base, build } => build(get_an_available_port(base).await),
        };
        if task.hide {
            report.skipped += 1;
            continue;
        }
        match emitter.emit(&task, options, dependencies, dev_dependencies) {
            Ok(path) => {
                tracing::debug!("wrote {}", path.display());
                output::success(&format!("Created {}", task.output_path));
                report.written += 1;
            }
            Err(e) => {
                output::error(&format!("Failed to create {}: {}", task.output_path, e));
                report.failed += 1;
            }
        }
    }
    report
}

/// Best-effort install through the chosen package manager against the
/// mirror registry. Failure is reported; the run still completes.
async fn install_dependencies(options: &ProjectOptions, root: &Path) {
    let command = format!(
        "{} install --registry={}",
        options.package_tool.as_str(),
        INSTALL_REGISTRY
    );
    let spinner = output::spinner("Installing dependencies...");
    let result = crate::cli::commands::run_shell(&command, root, &[]).await;
    spinner.finish_and_clear();
    match result {
        Ok(()) => output::success("Dependencies installed"),
        Err(e) => output::warning(&format!("Dependency installation failed: {}", e)),
    }
}
