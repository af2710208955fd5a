//! Persisted project configuration
//!
//! `lan create` writes a `lan.config.json` into the project root; `lan dev`
//! and `lan build` load it to decide which external tool to invoke.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::options::{BuildTool, Frame, PackageTool, ProjectType};
use crate::core::{LaniaError, LaniaResult};

pub const CONFIG_FILE: &str = "lan.config.json";

/// The subset of `ProjectOptions` persisted in `lan.config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub frame: Option<Frame>,
    pub build_tools: Vec<BuildTool>,
    pub use_ts: bool,
    pub package_tool: PackageTool,
}

impl ProjectConfig {
    /// Load and validate the config from a project directory
    pub fn load(project_dir: &Path) -> LaniaResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Err(LaniaError::ConfigNotFound);
        }
        let content = std::fs::read_to_string(&path)?;
        let config: ProjectConfig = serde_json::from_str(&content)
            .map_err(|e| LaniaError::config(format!("Invalid {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs whose build tools do not fit the project type
    pub fn validate(&self) -> LaniaResult<()> {
        if self.build_tools.is_empty() {
            return Err(LaniaError::config("No build tool configured"));
        }
        let allowed = self.project_type.allowed_build_tools();
        for tool in &self.build_tools {
            if !allowed.contains(tool) {
                return Err(LaniaError::config(format!(
                    "Build tool '{}' is not valid for '{}' projects",
                    tool.as_str(),
                    self.project_type.as_str()
                )));
            }
        }
        if let Some(frame) = self.frame {
            if !self.project_type.frames().contains(&frame) {
                return Err(LaniaError::config(format!(
                    "Framework '{}' is not valid for '{}' projects",
                    frame.as_str(),
                    self.project_type.as_str()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config() -> ProjectConfig {
        ProjectConfig {
            project_type: ProjectType::Spa,
            frame: Some(Frame::React),
            build_tools: vec![BuildTool::Vite],
            use_ts: true,
            package_tool: PackageTool::Npm,
        }
    }

    #[test]
    fn round_trips_through_lan_config_json() {
        let dir = tempdir().unwrap();
        let written = config();
        let content = serde_json::to_string_pretty(&written).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();

        let loaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, written);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ProjectConfig::load(dir.path()),
            Err(LaniaError::ConfigNotFound)
        ));
    }

    #[test]
    fn malformed_json_is_fatal() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(ProjectConfig::load(dir.path()).is_err());
    }

    #[test]
    fn unknown_build_tool_string_is_rejected() {
        let dir = tempdir().unwrap();
        let content = r#"{
            "type": "spa",
            "frame": "react",
            "buildTools": ["parcel"],
            "useTs": true,
            "packageTool": "npm"
        }"#;
        std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
        assert!(ProjectConfig::load(dir.path()).is_err());
    }

    #[test]
    fn tool_project_with_app_bundler_is_rejected() {
        let mut cfg = config();
        cfg.project_type = ProjectType::Toolkit;
        cfg.frame = None;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn app_project_with_rollup_is_rejected() {
        let mut cfg = config();
        cfg.build_tools = vec![BuildTool::Rollup];
        assert!(cfg.validate().is_err());
    }
}
