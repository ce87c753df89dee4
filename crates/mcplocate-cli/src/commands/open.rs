//! Open command implementation
//!
//! Resolves the requested scope's path and hands it to the OS
//! default-application launcher. Missing files are reported, not created.

use colored::Colorize;
use mcplocate_core::{Environment, ToolRegistry, path_exists, resolve_tool_paths};

use crate::commands::{target_path, unknown_tool_error};
use crate::error::{CliError, Result};
use crate::launcher;

/// Run the open command.
pub fn run_open(
    registry: &ToolRegistry,
    env: &dyn Environment,
    query: &str,
    project: bool,
) -> Result<()> {
    let Some(tool) = registry.find(query) else {
        return Err(unknown_tool_error(registry, query));
    };

    let resolved = resolve_tool_paths(tool, env);
    let (path, scope) = target_path(tool, &resolved, project)?;

    if !path_exists(path.to_str()) {
        return Err(CliError::user(format!(
            "{} config not found: {}. Run `mcplocate edit {}` to create it.",
            scope,
            path.display(),
            tool.key
        )));
    }

    println!(
        "{} Opening {} {} config: {}",
        "=>".blue().bold(),
        tool.name,
        scope.as_str(),
        path.display().to_string().cyan()
    );

    launcher::launch(&path)?;

    println!("{} Opened in default editor.", "OK".green().bold());
    Ok(())
}
