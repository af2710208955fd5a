//! Svelte single-page-app plugin

use crate::core::options::{BuildTool, CssProcessor, ProjectOptions};
use crate::scaffold::{
    css_content_type, css_ext, js_content_type, js_ext, ContentType, DependencySpec, FileTask,
    TaskSpec, TemplatePlugin, DEFAULT_DEV_PORT,
};

const PACKAGE_JSON: &str = include_str!("../../templates/spa/svelte/package.json.j2");
const APP: &str = include_str!("../../templates/spa/svelte/App.svelte.j2");
const MAIN: &str = include_str!("../../templates/spa/svelte/main.js.j2");
const INDEX_HTML: &str = include_str!("../../templates/spa/svelte/index.html.j2");
const WEBPACK_CONFIG: &str = include_str!("../../templates/spa/svelte/webpack.config.js.j2");
const VITE_CONFIG: &str = include_str!("../../templates/spa/svelte/vite.config.js.j2");
const TSCONFIG: &str = include_str!("../../templates/spa/svelte/tsconfig.json.j2");

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

pub struct SpaSvelte;

impl TemplatePlugin for SpaSvelte {
    fn compute_dependencies(&self, options: &ProjectOptions) -> DependencySpec {
        let mut spec = DependencySpec::default();
        spec.dependencies.push("svelte".to_string());
        spec.dev_dependencies
            .extend(options.build_tools.iter().map(|t| t.as_str().to_string()));

        if options.use_ts {
            spec.dev_dependencies
                .extend(["typescript", "@types/node"].map(String::from));
        }
        if let Some(processor) = options.css_processor {
            spec.dev_dependencies.push(processor.as_str().to_string());
        }
        if options.uses_build_tool(BuildTool::Webpack) {
            spec.dev_dependencies.extend(
                [
                    "svelte-loader",
                    "svelte-preprocess",
                    "@babel/core",
                    "@babel/preset-env",
                    "babel-loader",
                    "copy-webpack-plugin",
                    "cross-env",
                    "css-loader",
                    "css-minimizer-webpack-plugin",
                    "html-webpack-plugin",
                    "mini-css-extract-plugin",
                    "postcss-preset-env",
                    "webpack",
                    "webpack-cli",
                    "webpack-dev-server",
                    "postcss-loader",
                    "webpack-bundle-analyzer",
                    "style-loader",
                    "thread-loader",
                ]
                .map(String::from),
            );
            if options.use_ts {
                spec.dev_dependencies
                    .extend(["ts-loader", "@babel/preset-typescript"].map(String::from));
            }
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
                    "svelte-check",
                    "@sveltejs/vite-plugin-svelte",
                    "tslib",
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
        let js = js_ext(options);
        let css = css_ext(options);
        let css_tag = css_content_type(options);
        let js_tag = js_content_type(options);
        let uses_vite = options.uses_build_tool(BuildTool::Vite);
        let uses_webpack = options.uses_build_tool(BuildTool::Webpack);
        let tailwind = options.css_processor == Some(CssProcessor::Tailwindcss);

        vec![
            TaskSpec::Ready(FileTask::new(PACKAGE_JSON, "package.json", ContentType::Json)),
            TaskSpec::Ready(FileTask::new(APP, "src/App.svelte", ContentType::Svelte)),
            TaskSpec::Ready(FileTask::new(MAIN, format!("src/main.{}", js), js_tag)),
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
            TaskSpec::with_port(DEFAULT_DEV_PORT, {
                let vite_config_path = format!("vite.config.{}", js);
                move |port| {
                    if uses_webpack {
                        FileTask::new(WEBPACK_CONFIG, "webpack.config.js", ContentType::Js)
                            .with_extra("port", port)
                    } else {
                        FileTask::new(VITE_CONFIG, vite_config_path, js_tag)
                            .with_extra("port", port)
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
                js_tag,
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Frame;
    use crate::scaffold::materialize;
    use crate::scaffold::test_support::spa_options;

    #[test]
    fn vite_bundle_includes_the_svelte_vite_plugin() {
        let options = spa_options(Frame::Svelte, BuildTool::Vite);
        let spec = SpaSvelte.compute_dependencies(&options);
        assert!(spec
            .dev_dependencies
            .contains(&"@sveltejs/vite-plugin-svelte".to_string()));
        assert!(spec.dev_dependencies.contains(&"svelte-check".to_string()));
        assert!(!spec.dev_dependencies.contains(&"svelte-loader".to_string()));
    }

    #[test]
    fn webpack_bundle_includes_loader_and_preprocess() {
        let options = spa_options(Frame::Svelte, BuildTool::Webpack);
        let spec = SpaSvelte.compute_dependencies(&options);
        assert!(spec.dev_dependencies.contains(&"svelte-loader".to_string()));
        assert!(spec.dev_dependencies.contains(&"svelte-preprocess".to_string()));
    }

    #[test]
    fn stylus_gives_styl_extension_and_stylus_tag() {
        let mut options = spa_options(Frame::Svelte, BuildTool::Vite);
        options.css_processor = Some(CssProcessor::Stylus);
        let tasks = materialize(SpaSvelte.file_tasks(&options), 8089);

        let index_style = tasks
            .iter()
            .find(|t| t.output_path == "src/index.styl")
            .expect("stylus stylesheet task");
        assert_eq!(index_style.content_type, ContentType::Stylus);
    }

    #[test]
    fn task_order_ends_with_the_app_config_module() {
        let options = spa_options(Frame::Svelte, BuildTool::Vite);
        let tasks = materialize(SpaSvelte.file_tasks(&options), 8089);
        assert_eq!(tasks.first().unwrap().output_path, "package.json");
        assert_eq!(tasks.last().unwrap().output_path, "src/config/index.ts");
    }
}
