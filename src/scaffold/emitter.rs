//! Template rendering and file emission

use std::path::PathBuf;

use minijinja::Environment;

use crate::core::options::ProjectOptions;
use crate::core::LaniaResult;
use crate::registry::ResolvedDependencyMap;
use crate::scaffold::{css_ext, js_ext, jsx_ext, ContentType, FileTask};

/// Renders one task's template with the merged parameter bag and writes the
/// result under the project root
pub struct Emitter {
    env: Environment<'static>,
    root: PathBuf,
}

impl Emitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            env: Environment::new(),
            root: root.into(),
        }
    }

    /// Render, format and persist one task. Returns the absolute path the
    /// file was written to.
    pub fn emit(
        &self,
        task: &FileTask,
        options: &ProjectOptions,
        dependencies: &ResolvedDependencyMap,
        dev_dependencies: &ResolvedDependencyMap,
    ) -> LaniaResult<PathBuf> {
        let bag = parameter_bag(task, options, dependencies, dev_dependencies)?;
        let rendered = self.env.render_str(task.template, &bag)?;
        let formatted = format_code(&rendered, task.content_type)?;

        let target = self.root.join(&task.output_path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, formatted)?;
        Ok(target)
    }
}

/// Task options merged with task extras and both resolved dependency maps
fn parameter_bag(
    task: &FileTask,
    options: &ProjectOptions,
    dependencies: &ResolvedDependencyMap,
    dev_dependencies: &ResolvedDependencyMap,
) -> LaniaResult<serde_json::Value> {
    let mut bag = serde_json::to_value(options)?;
    let object = bag
        .as_object_mut()
        .expect("ProjectOptions serializes to an object");
    object.insert("cssExt".to_string(), css_ext(options).into());
    object.insert("jsExt".to_string(), js_ext(options).into());
    object.insert("jsxExt".to_string(), jsx_ext(options).into());
    for (key, value) in &task.extras {
        object.insert(key.clone(), value.clone());
    }
    object.insert(
        "dependencies".to_string(),
        serde_json::to_value(dependencies)?,
    );
    object.insert(
        "devDependencies".to_string(),
        serde_json::to_value(dev_dependencies)?,
    );
    Ok(bag)
}

/// Post-process rendered text by content-type tag.
///
/// JSON output is re-serialized through serde_json so manifests come out
/// canonically indented regardless of template whitespace; everything else
/// just gets a trailing newline.
fn format_code(content: &str, content_type: ContentType) -> LaniaResult<String> {
    match content_type {
        ContentType::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            let mut pretty = serde_json::to_string_pretty(&value)?;
            pretty.push('\n');
            Ok(pretty)
        }
        _ => {
            let trimmed = content.trim_end();
            Ok(format!("{}\n", trimmed))
        }
    }
}
