//! Resolved configuration for one scaffold run
//!
//! `ProjectOptions` is produced by the prompt phase and never mutated
//! afterwards; every downstream phase only reads it.

use serde::{Deserialize, Serialize};

use crate::core::{LaniaError, LaniaResult};

/// Supported project types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Single-page application
    Spa,
    /// Server-rendered application
    Ssr,
    /// Tool or library
    Toolkit,
    /// Node.js service
    Nodejs,
    /// Component library
    Components,
    /// Plain project without a UI framework
    Vanilla,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] = &[
        ProjectType::Spa,
        ProjectType::Ssr,
        ProjectType::Toolkit,
        ProjectType::Nodejs,
        ProjectType::Components,
        ProjectType::Vanilla,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Spa => "spa",
            ProjectType::Ssr => "ssr",
            ProjectType::Toolkit => "toolkit",
            ProjectType::Nodejs => "nodejs",
            ProjectType::Components => "components",
            ProjectType::Vanilla => "vanilla",
        }
    }

    /// Frameworks that can be picked for this project type
    pub fn frames(&self) -> &'static [Frame] {
        match self {
            ProjectType::Spa => &[Frame::React, Frame::Vue, Frame::Svelte],
            ProjectType::Ssr => &[Frame::React, Frame::Vue],
            ProjectType::Components => &[Frame::React, Frame::Vue, Frame::Svelte],
            ProjectType::Nodejs | ProjectType::Toolkit | ProjectType::Vanilla => &[],
        }
    }

    /// App-style projects pick exactly one bundler
    pub fn is_app(&self) -> bool {
        matches!(
            self,
            ProjectType::Spa | ProjectType::Ssr | ProjectType::Nodejs | ProjectType::Vanilla
        )
    }

    /// Library-style projects may pick several build tools
    pub fn is_tool(&self) -> bool {
        matches!(self, ProjectType::Toolkit | ProjectType::Components)
    }

    /// Build tools that are valid for this project type
    pub fn allowed_build_tools(&self) -> &'static [BuildTool] {
        if self.is_app() {
            &[BuildTool::Webpack, BuildTool::Vite]
        } else {
            &[BuildTool::Rollup, BuildTool::Gulp]
        }
    }
}

/// Supported UI frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    React,
    Vue,
    Svelte,
}

impl Frame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::React => "react",
            Frame::Vue => "vue",
            Frame::Svelte => "svelte",
        }
    }
}

/// Supported build tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Webpack,
    Vite,
    Rollup,
    Gulp,
}

impl BuildTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTool::Webpack => "webpack",
            BuildTool::Vite => "vite",
            BuildTool::Rollup => "rollup",
            BuildTool::Gulp => "gulp",
        }
    }
}

/// CSS preprocessors offered by the css prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssProcessor {
    Sass,
    Less,
    Stylus,
    Tailwindcss,
}

impl CssProcessor {
    pub const ALL: &'static [CssProcessor] = &[
        CssProcessor::Sass,
        CssProcessor::Less,
        CssProcessor::Stylus,
        CssProcessor::Tailwindcss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CssProcessor::Sass => "sass",
            CssProcessor::Less => "less",
            CssProcessor::Stylus => "stylus",
            CssProcessor::Tailwindcss => "tailwindcss",
        }
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTool {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageTool {
    pub const ALL: &'static [PackageTool] =
        &[PackageTool::Npm, PackageTool::Yarn, PackageTool::Pnpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTool::Npm => "npm",
            PackageTool::Yarn => "yarn",
            PackageTool::Pnpm => "pnpm",
        }
    }
}

/// Documentation site generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocFrame {
    Vitepress,
}

/// Unit test runners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitTestTool {
    Vitest,
}

/// Everything one scaffold run needs to know, collected by the prompt phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub frame: Option<Frame>,
    pub css_processor: Option<CssProcessor>,
    pub build_tools: Vec<BuildTool>,
    pub package_tool: PackageTool,
    pub use_ts: bool,
    pub use_doc_frame: bool,
    pub doc_frame: Option<DocFrame>,
    pub use_unit_test: bool,
    pub unit_test_tool: Option<UnitTestTool>,
}

impl ProjectOptions {
    pub fn uses_build_tool(&self, tool: BuildTool) -> bool {
        self.build_tools.contains(&tool)
    }

    /// Post-prompt normalization, applied once before the options freeze
    pub fn normalize(mut self) -> LaniaResult<Self> {
        if self.project_type.is_tool() {
            self.use_doc_frame = true;
            self.doc_frame = Some(DocFrame::Vitepress);
        }
        if self.use_unit_test {
            self.unit_test_tool = Some(UnitTestTool::Vitest);
        }
        self.use_ts = true;
        if self.build_tools.is_empty() {
            return Err(LaniaError::config("No build tool selected"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ProjectOptions {
        ProjectOptions {
            name: "demo".to_string(),
            project_type: ProjectType::Spa,
            frame: Some(Frame::React),
            css_processor: None,
            build_tools: vec![BuildTool::Vite],
            package_tool: PackageTool::Npm,
            use_ts: false,
            use_doc_frame: false,
            doc_frame: None,
            use_unit_test: false,
            unit_test_tool: None,
        }
    }

    #[test]
    fn normalize_forces_typescript() {
        let normalized = options().normalize().unwrap();
        assert!(normalized.use_ts);
    }

    #[test]
    fn normalize_forces_doc_site_for_tool_projects() {
        let mut opts = options();
        opts.project_type = ProjectType::Toolkit;
        opts.frame = None;
        opts.build_tools = vec![BuildTool::Rollup];
        let normalized = opts.normalize().unwrap();
        assert!(normalized.use_doc_frame);
        assert_eq!(normalized.doc_frame, Some(DocFrame::Vitepress));
    }

    #[test]
    fn normalize_forces_vitest_when_unit_testing() {
        let mut opts = options();
        opts.use_unit_test = true;
        let normalized = opts.normalize().unwrap();
        assert_eq!(normalized.unit_test_tool, Some(UnitTestTool::Vitest));
    }

    #[test]
    fn normalize_rejects_missing_build_tool() {
        let mut opts = options();
        opts.build_tools = vec![];
        assert!(opts.normalize().is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(options()).unwrap();
        assert_eq!(value["type"], "spa");
        assert_eq!(value["buildTools"][0], "vite");
        assert_eq!(value["useTs"], false);
    }
}
