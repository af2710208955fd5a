//! Interactive collection of scaffold options

use std::env;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::core::options::{
    BuildTool, CssProcessor, Frame, PackageTool, ProjectOptions, ProjectType,
};
use crate::core::{LaniaError, LaniaResult};

/// Run the prompt sequence and return the raw (un-normalized) options
pub fn collect(name: Option<String>) -> LaniaResult<ProjectOptions> {
    let name = match name {
        Some(name) => name,
        None => {
            let default_name = env::current_dir()?
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "my-app".to_string());
            Input::new()
                .with_prompt("Project name")
                .default(default_name)
                .interact_text()?
        }
    };

    let project_type = {
        let items: Vec<&str> = ProjectType::ALL.iter().map(|t| t.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Project type")
            .items(&items)
            .default(0)
            .interact()?;
        ProjectType::ALL[selection]
    };

    let frame = select_frame(project_type)?;
    let css_processor = select_css_processor(project_type)?;
    let build_tools = select_build_tools(project_type)?;

    let package_tool = {
        let items: Vec<&str> = PackageTool::ALL.iter().map(|t| t.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Package manager")
            .items(&items)
            .default(0)
            .interact()?;
        PackageTool::ALL[selection]
    };

    Ok(ProjectOptions {
        name,
        project_type,
        frame,
        css_processor,
        build_tools,
        package_tool,
        use_ts: true,
        use_doc_frame: false,
        doc_frame: None,
        use_unit_test: false,
        unit_test_tool: None,
    })
}

fn select_frame(project_type: ProjectType) -> LaniaResult<Option<Frame>> {
    let frames = project_type.frames();
    if frames.is_empty() {
        return Ok(None);
    }
    let items: Vec<&str> = frames.iter().map(|f| f.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Framework")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(frames[selection]))
}

fn select_css_processor(project_type: ProjectType) -> LaniaResult<Option<CssProcessor>> {
    // Library and node projects ship no stylesheets
    if matches!(project_type, ProjectType::Toolkit | ProjectType::Nodejs) {
        return Ok(None);
    }
    let wanted = Confirm::new()
        .with_prompt("Use a CSS preprocessor?")
        .default(true)
        .interact()?;
    if !wanted {
        return Ok(None);
    }
    let items: Vec<&str> = CssProcessor::ALL.iter().map(|p| p.as_str()).collect();
    let selection = Select::new()
        .with_prompt("CSS preprocessor")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(CssProcessor::ALL[selection]))
}

fn select_build_tools(project_type: ProjectType) -> LaniaResult<Vec<BuildTool>> {
    let allowed = project_type.allowed_build_tools();
    let items: Vec<&str> = allowed.iter().map(|t| t.as_str()).collect();

    if project_type.is_app() {
        // App projects pick exactly one bundler
        let selection = Select::new()
            .with_prompt("Build tool")
            .items(&items)
            .default(0)
            .interact()?;
        return Ok(vec![allowed[selection]]);
    }

    let selections = MultiSelect::new()
        .with_prompt("Build tools")
        .items(&items)
        .interact()?;
    if selections.is_empty() {
        return Err(LaniaError::config("Select at least one build tool"));
    }
    Ok(selections.into_iter().map(|i| allowed[i]).collect())
}
