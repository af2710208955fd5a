//! Project scaffolding: framework plugins, file tasks and the build pipeline

mod builder;
mod emitter;
mod port;
mod prompt;
mod react;
mod svelte;
mod vue;

use serde::Serialize;

use crate::core::options::{BuildTool, CssProcessor, Frame, ProjectOptions, ProjectType};
use crate::core::{LaniaError, LaniaResult};

pub use builder::Builder;
pub use emitter::Emitter;
pub use port::get_an_available_port;
pub use react::SpaReact;
pub use svelte::SpaSvelte;
pub use vue::SpaVue;

/// Base port the bundler config starts probing from
pub const DEFAULT_DEV_PORT: u16 = 8089;

/// Symbolic package names a scaffold needs, split runtime vs. development.
///
/// Duplicates are tolerated; the resolved map collapses them.
#[derive(Debug, Default, Clone)]
pub struct DependencySpec {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

/// Content-type tag of an output file, keys the formatter and is exposed
/// to reviewers of a task list (stylesheet tasks carry the preprocessor
/// name unless the output is plain css).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Json,
    Js,
    Ts,
    Jsx,
    Tsx,
    Vue,
    Svelte,
    Css,
    Sass,
    Less,
    Stylus,
    Html,
    Other,
}

/// One file to materialize: embedded template source, target path relative
/// to the project root, formatter tag, render extras and a visibility flag.
pub struct FileTask {
    pub template: &'static str,
    pub output_path: String,
    pub content_type: ContentType,
    pub extras: serde_json::Map<String, serde_json::Value>,
    pub hide: bool,
}

impl FileTask {
    pub fn new(
        template: &'static str,
        output_path: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            template,
            output_path: output_path.into(),
            content_type,
            extras: serde_json::Map::new(),
            hide: false,
        }
    }

    pub fn hidden(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    pub fn with_extra(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.extras.insert(key.to_string(), value.into());
        self
    }
}

/// A deferred file task.
///
/// Most tasks are plain descriptors; the bundler config must first probe
/// for a free dev-server port before its shape is known.
pub enum TaskSpec {
    Ready(FileTask),
    WithPort {
        base: u16,
        build: Box<dyn FnOnce(u16) -> FileTask + Send>,
    },
}

impl TaskSpec {
    pub fn with_port(base: u16, build: impl FnOnce(u16) -> FileTask + Send + 'static) -> Self {
        TaskSpec::WithPort {
            base,
            build: Box::new(build),
        }
    }
}

/// Per-framework scaffolding strategy: a dependency table and an ordered
/// file-task list, both pure functions of the collected options.
pub trait TemplatePlugin: Send + Sync {
    /// Symbolic dependency names for this framework under these options.
    /// Never touches the filesystem or network.
    fn compute_dependencies(&self, options: &ProjectOptions) -> DependencySpec;

    /// The complete ordered task list for one scaffold. Order is part of
    /// the contract: later tasks may overwrite earlier ones at the same
    /// output path to pick the final variant of a file.
    fn file_tasks(&self, options: &ProjectOptions) -> Vec<TaskSpec>;
}

/// Select the plugin for a (type, framework) pair.
///
/// The match is exhaustive over supported combinations; anything else is a
/// fatal configuration error surfaced before any side effect.
pub fn plugin_for(options: &ProjectOptions) -> LaniaResult<Box<dyn TemplatePlugin>> {
    match (options.project_type, options.frame) {
        (ProjectType::Spa, Some(Frame::React)) => Ok(Box::new(SpaReact)),
        (ProjectType::Spa, Some(Frame::Vue)) => Ok(Box::new(SpaVue)),
        (ProjectType::Spa, Some(Frame::Svelte)) => Ok(Box::new(SpaSvelte)),
        (project_type, frame) => Err(LaniaError::unsupported(format!(
            "'{}' projects with framework '{}' are not supported yet",
            project_type.as_str(),
            frame.map(|f| f.as_str()).unwrap_or("none"),
        ))),
    }
}

/// Markup extension for jsx-style frameworks
pub(crate) fn jsx_ext(options: &ProjectOptions) -> &'static str {
    if options.use_ts {
        "tsx"
    } else {
        "jsx"
    }
}

/// Script extension
pub(crate) fn js_ext(options: &ProjectOptions) -> &'static str {
    if options.use_ts {
        "ts"
    } else {
        "js"
    }
}

/// Stylesheet extension, fixed lookup per preprocessor
pub(crate) fn css_ext(options: &ProjectOptions) -> &'static str {
    match options.css_processor {
        Some(CssProcessor::Sass) => "scss",
        Some(CssProcessor::Stylus) => "styl",
        Some(CssProcessor::Less) => "less",
        Some(CssProcessor::Tailwindcss) | None => "css",
    }
}

/// Content-type tag for stylesheet tasks: plain css unless a compiling
/// preprocessor was chosen
pub(crate) fn css_content_type(options: &ProjectOptions) -> ContentType {
    match options.css_processor {
        Some(CssProcessor::Sass) => ContentType::Sass,
        Some(CssProcessor::Less) => ContentType::Less,
        Some(CssProcessor::Stylus) => ContentType::Stylus,
        Some(CssProcessor::Tailwindcss) | None => ContentType::Css,
    }
}

/// Content-type tag for the script entry
pub(crate) fn js_content_type(options: &ProjectOptions) -> ContentType {
    if options.use_ts {
        ContentType::Ts
    } else {
        ContentType::Js
    }
}

/// Content-type tag for jsx-style markup
pub(crate) fn jsx_content_type(options: &ProjectOptions) -> ContentType {
    if options.use_ts {
        ContentType::Tsx
    } else {
        ContentType::Jsx
    }
}

/// Materialize a task list for inspection, resolving port probes with a
/// fixed port. Test helper shared by the plugin test modules.
#[cfg(test)]
pub(crate) fn materialize(specs: Vec<TaskSpec>, port: u16) -> Vec<FileTask> {
    specs
        .into_iter()
        .map(|spec| match spec {
            TaskSpec::Ready(task) => task,
            TaskSpec::WithPort { build, .. } => build(port),
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::options::*;

    pub fn spa_options(frame: Frame, build_tool: BuildTool) -> ProjectOptions {
        ProjectOptions {
            name: "demo".to_string(),
            project_type: ProjectType::Spa,
            frame: Some(frame),
            css_processor: None,
            build_tools: vec![build_tool],
            package_tool: PackageTool::Npm,
            use_ts: true,
            use_doc_frame: false,
            doc_frame: None,
            use_unit_test: false,
            unit_test_tool: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_support::spa_options;

    #[test]
    fn selects_a_plugin_for_each_spa_framework() {
        for frame in [Frame::React, Frame::Vue, Frame::Svelte] {
            let options = spa_options(frame, BuildTool::Vite);
            assert!(plugin_for(&options).is_ok());
        }
    }

    #[test]
    fn rejects_unsupported_combinations() {
        let mut options = spa_options(Frame::React, BuildTool::Vite);
        options.project_type = ProjectType::Ssr;
        assert!(matches!(
            plugin_for(&options),
            Err(LaniaError::Unsupported(_))
        ));

        options.project_type = ProjectType::Vanilla;
        options.frame = None;
        assert!(plugin_for(&options).is_err());
    }

    #[test]
    fn stylesheet_extension_follows_the_lookup_table() {
        let mut options = spa_options(Frame::React, BuildTool::Vite);
        assert_eq!(css_ext(&options), "css");

        options.css_processor = Some(CssProcessor::Sass);
        assert_eq!(css_ext(&options), "scss");
        options.css_processor = Some(CssProcessor::Stylus);
        assert_eq!(css_ext(&options), "styl");
        options.css_processor = Some(CssProcessor::Less);
        assert_eq!(css_ext(&options), "less");
        options.css_processor = Some(CssProcessor::Tailwindcss);
        assert_eq!(css_ext(&options), "css");
    }

    #[test]
    fn stylesheet_tag_is_css_for_none_and_tailwind() {
        let mut options = spa_options(Frame::React, BuildTool::Vite);
        assert_eq!(css_content_type(&options), ContentType::Css);

        options.css_processor = Some(CssProcessor::Tailwindcss);
        assert_eq!(css_content_type(&options), ContentType::Css);

        options.css_processor = Some(CssProcessor::Sass);
        assert_eq!(css_content_type(&options), ContentType::Sass);
    }

    #[test]
    fn markup_extensions_track_typescript() {
        let mut options = spa_options(Frame::React, BuildTool::Vite);
        assert_eq!(jsx_ext(&options), "tsx");
        assert_eq!(js_ext(&options), "ts");

        options.use_ts = false;
        assert_eq!(jsx_ext(&options), "jsx");
        assert_eq!(js_ext(&options), "js");
    }
}
