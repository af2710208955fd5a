//! React single-page-app plugin

use crate::core::options::{BuildTool, CssProcessor, ProjectOptions};
use crate::scaffold::{
    css_content_type, css_ext, js_content_type, js_ext, jsx_content_type, jsx_ext, ContentType,
    DependencySpec, FileTask, TaskSpec, TemplatePlugin, DEFAULT_DEV_PORT,
};

const PACKAGE_JSON: &str = include_str!("../../templates/spa/react/package.json.j2");
const APP: &str = include_str!("../../templates/spa/react/App.jsx.j2");
const MAIN: &str = include_str!("../../templates/spa/react/main.jsx.j2");
const INDEX_HTML: &str = include_str!("../../templates/spa/react/index.html.j2");
const WEBPACK_CONFIG: &str = include_str!("../../templates/spa/react/webpack.config.js.j2");
const TSCONFIG: &str = include_str!("../../templates/spa/react/tsconfig.json.j2");

const APP_STYLE: &str = include_str!("../../templates/spa/common/app_style.j2");
const INDEX_STYLE: &str = include_str!("../../templates/spa/common/index_style.j2");
const VITE_ENV: &str = include_str!("../../templates/spa/common/vite-env.d.ts.j2");
const LAN_CONFIG: &str = include_str!("../../templates/spa/common/lan.config.json.j2");
const TAILWIND_CONFIG: &str = include_str!("../../templates/spa/common/tailwind.config.js.j2");
const TAILWIND_CSS: &str = include_str!("../../templates/spa/common/tailwind.css.j2");
const POSTCSS_CONFIG: &str = include_str!("../../templates/spa/common/postcss.config.js.j2");
const ENV_DEV: &str = include_str!("../../templates/spa/common/env.development.j2");
const ENV_PROD: &str = include_str!("../../templates/spa/common/env.production.j2");
const APP_CONFIG: &str = include_str!("../../templates/spa/common/config.j2");

pub struct SpaReact;

impl TemplatePlugin for SpaReact {
    fn compute_dependencies(&self, options: &ProjectOptions) -> DependencySpec {
        let mut spec = DependencySpec::default();
        spec.dependencies
            .extend(["react".to_string(), "react-dom".to_string()]);
        spec.dev_dependencies
            .extend(options.build_tools.iter().map(|t| t.as_str().to_string()));

        if options.use_ts {
            spec.dev_dependencies.extend(
                ["@types/react", "@types/react-dom", "typescript", "@types/node"]
                    .map(String::from),
            );
        }
        if let Some(processor) = options.css_processor {
            spec.dev_dependencies.push(processor.as_str().to_string());
        }
        if options.uses_build_tool(BuildTool::Webpack) {
            spec.dev_dependencies.extend(
                [
                    "webpack-cli",
                    "@babel/plugin-transform-runtime",
                    "@babel/runtime",
                    "@babel/preset-env",
                    "@babel/core",
                    "webpack",
                    "html-webpack-plugin",
                    "mini-css-extract-plugin",
                    "babel-loader",
                    "copy-webpack-plugin",
                    "cross-env",
                    "css-loader",
                    "css-minimizer-webpack-plugin",
                    "style-loader",
                    "webpack-dev-server",
                    "webpackbar",
                    "postcss",
                    "postcss-loader",
                    "postcss-preset-env",
                    "@pmmmwh/react-refresh-webpack-plugin",
                    "@babel/preset-react",
                    "webpack-bundle-analyzer",
                    "react-refresh",
                    "@types/estree",
                    "thread-loader",
                ]
                .map(String::from),
            );
            if options.use_ts {
                spec.dev_dependencies
                    .push("@babel/preset-typescript".to_string());
            }
            // A compiling preprocessor needs its webpack loader; tailwind
            // goes through postcss instead
            if let Some(processor) = options.css_processor {
                if processor != CssProcessor::Tailwindcss {
                    spec.dev_dependencies
                        .push(format!("{}-loader", processor.as_str()));
                }
            }
        }
        if options.uses_build_tool(BuildTool::Vite) {
            spec.dev_dependencies.extend(
                [
                    "@vitejs/plugin-react",
                    "vite-plugin-compression",
                    "terser",
                    "rollup-plugin-visualizer",
                ]
                .map(String::from),
            );
        }
        if options.css_processor == Some(CssProcessor::Tailwindcss) {
            spec.dev_dependencies
                .extend(["tailwindcss", "postcss", "autoprefixer"].map(String::from));
        }
        spec
    }

    fn file_tasks(&self, options: &ProjectOptions) -> Vec<TaskSpec> {
        let jsx = jsx_ext(options);
        let js = js_ext(options);
        let css = css_ext(options);
        let css_tag = css_content_type(options);
        let uses_vite = options.uses_build_tool(BuildTool::Vite);
        let uses_webpack = options.uses_build_tool(BuildTool::Webpack);
        let tailwind = options.css_processor == Some(CssProcessor::Tailwindcss);

        vec![
            TaskSpec::Ready(FileTask::new(PACKAGE_JSON, "package.json", ContentType::Json)),
            TaskSpec::Ready(FileTask::new(
                APP,
                format!("src/App.{}", jsx),
                jsx_content_type(options),
            )),
            TaskSpec::Ready(FileTask::new(
                MAIN,
                format!("src/main.{}", jsx),
                jsx_content_type(options),
            )),
            TaskSpec::Ready(FileTask::new(
                APP_STYLE,
                format!("src/App.{}", css),
                css_tag,
            )),
            TaskSpec::Ready(FileTask::new(
                INDEX_STYLE,
                format!("src/index.{}", css),
                css_tag,
            )),
            TaskSpec::Ready(
                FileTask::new(VITE_ENV, "src/vite-env.d.ts", ContentType::Ts)
                    .hidden(!uses_vite),
            ),
            // The bundler config needs a free port first. Without webpack
            // the slot re-emits the global stylesheet, deliberately
            // overwriting the earlier copy at the same path.
            TaskSpec::with_port(DEFAULT_DEV_PORT, {
                let index_style_path = format!("src/index.{}", css);
                move |port| {
                    if uses_webpack {
                        FileTask::new(WEBPACK_CONFIG, "webpack.config.js", ContentType::Js)
                            .with_extra("port", port)
                    } else {
                        FileTask::new(INDEX_STYLE, index_style_path, css_tag)
                    }
                }
            }),
            TaskSpec::Ready(FileTask::new(LAN_CONFIG, "lan.config.json", ContentType::Json)),
            TaskSpec::Ready(FileTask::new(INDEX_HTML, "index.html", ContentType::Html)),
            TaskSpec::Ready(
                FileTask::new(TSCONFIG, "tsconfig.json", ContentType::Json)
                    .hidden(!options.use_ts),
            ),
            TaskSpec::Ready(
                FileTask::new(TAILWIND_CONFIG, "tailwind.config.js", ContentType::Js)
                    .hidden(!tailwind),
            ),
            TaskSpec::Ready(
                FileTask::new(TAILWIND_CSS, "src/tailwind.css", ContentType::Css)
                    .hidden(!tailwind),
            ),
            TaskSpec::Ready(
                FileTask::new(POSTCSS_CONFIG, "postcss.config.js", ContentType::Js)
                    .hidden(!tailwind),
            ),
            TaskSpec::Ready(
                FileTask::new(ENV_DEV, "env/.env.development", ContentType::Other)
                    .hidden(!uses_vite),
            ),
            TaskSpec::Ready(
                FileTask::new(ENV_PROD, "env/.env.production", ContentType::Other)
                    .hidden(!uses_vite),
            ),
            TaskSpec::Ready(FileTask::new(
                APP_CONFIG,
                format!("src/config/index.{}", js),
                js_content_type(options),
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Frame;
    use crate::scaffold::test_support::spa_options;
    use crate::scaffold::materialize;
    use std::collections::BTreeSet;

    fn dep_sets(spec: &DependencySpec) -> (BTreeSet<&str>, BTreeSet<&str>) {
        (
            spec.dependencies.iter().map(|s| s.as_str()).collect(),
            spec.dev_dependencies.iter().map(|s| s.as_str()).collect(),
        )
    }

    #[test]
    fn dependency_computation_is_deterministic() {
        let options = spa_options(Frame::React, BuildTool::Webpack);
        let first = SpaReact.compute_dependencies(&options);
        let second = SpaReact.compute_dependencies(&options);
        assert_eq!(dep_sets(&first), dep_sets(&second));
    }

    #[test]
    fn webpack_bundle_includes_preprocessor_loader_only_when_compiling() {
        let mut options = spa_options(Frame::React, BuildTool::Webpack);
        options.css_processor = Some(CssProcessor::Sass);
        let spec = SpaReact.compute_dependencies(&options);
        assert!(spec.dev_dependencies.contains(&"sass-loader".to_string()));

        options.css_processor = Some(CssProcessor::Tailwindcss);
        let spec = SpaReact.compute_dependencies(&options);
        assert!(!spec.dev_dependencies.contains(&"tailwindcss-loader".to_string()));
        assert!(spec.dev_dependencies.contains(&"tailwindcss".to_string()));
    }

    #[test]
    fn build_tools_are_always_dev_dependencies() {
        let options = spa_options(Frame::React, BuildTool::Vite);
        let spec = SpaReact.compute_dependencies(&options);
        assert!(spec.dev_dependencies.contains(&"vite".to_string()));
        assert!(spec.dev_dependencies.contains(&"@vitejs/plugin-react".to_string()));
    }

    #[test]
    fn vite_scaffold_emits_the_expected_visible_set() {
        let options = spa_options(Frame::React, BuildTool::Vite);
        let tasks = materialize(SpaReact.file_tasks(&options), 8089);

        let visible: Vec<&str> = tasks
            .iter()
            .filter(|t| !t.hide)
            .map(|t| t.output_path.as_str())
            .collect();
        assert!(visible.contains(&"package.json"));
        assert!(visible.contains(&"src/App.tsx"));
        assert!(visible.contains(&"src/main.tsx"));
        assert!(visible.contains(&"src/App.css"));
        assert!(visible.contains(&"src/index.css"));
        assert!(visible.contains(&"src/vite-env.d.ts"));
        assert!(visible.contains(&"tsconfig.json"));
        assert!(!visible.contains(&"webpack.config.js"));

        // Tailwind-family tasks stay hidden without tailwind
        let hidden: Vec<&str> = tasks
            .iter()
            .filter(|t| t.hide)
            .map(|t| t.output_path.as_str())
            .collect();
        assert!(hidden.contains(&"tailwind.config.js"));
        assert!(hidden.contains(&"src/tailwind.css"));
        assert!(hidden.contains(&"postcss.config.js"));
    }

    #[test]
    fn webpack_scaffold_hides_vite_files_and_embeds_the_port() {
        let options = spa_options(Frame::React, BuildTool::Webpack);
        let tasks = materialize(SpaReact.file_tasks(&options), 8091);

        let webpack = tasks
            .iter()
            .find(|t| t.output_path == "webpack.config.js")
            .expect("webpack config task");
        assert!(!webpack.hide);
        assert_eq!(webpack.extras["port"], 8091);

        for path in ["src/vite-env.d.ts", "env/.env.development", "env/.env.production"] {
            let task = tasks.iter().find(|t| t.output_path == path).unwrap();
            assert!(task.hide, "{} should be hidden without vite", path);
        }
    }

    #[test]
    fn typescript_gives_ts_extensions_everywhere() {
        let options = spa_options(Frame::React, BuildTool::Vite);
        let tasks = materialize(SpaReact.file_tasks(&options), 8089);
        for task in &tasks {
            assert!(!task.output_path.ends_with(".jsx"));
            assert!(
                !task.output_path.ends_with(".js") || task.output_path.ends_with("config.js"),
                "unexpected .js output: {}",
                task.output_path
            );
        }
        let tsconfig = tasks.iter().find(|t| t.output_path == "tsconfig.json").unwrap();
        assert!(!tsconfig.hide);
    }

    #[test]
    fn sass_stylesheets_carry_the_preprocessor_tag_and_extension() {
        let mut options = spa_options(Frame::React, BuildTool::Vite);
        options.css_processor = Some(CssProcessor::Sass);
        let tasks = materialize(SpaReact.file_tasks(&options), 8089);

        let app_style = tasks.iter().find(|t| t.output_path == "src/App.scss").unwrap();
        assert_eq!(app_style.content_type, ContentType::Sass);
    }
}
