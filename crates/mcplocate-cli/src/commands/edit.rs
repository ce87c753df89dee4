//! Edit command implementation
//!
//! Like open, but a missing config file is created first with an empty
//! MCP server table.

use std::fs;
use std::path::Path;

use colored::Colorize;
use mcplocate_core::{Environment, ToolRegistry, path_exists, resolve_tool_paths};
use serde_json::json;

use crate::commands::{target_path, unknown_tool_error};
use crate::error::{CliError, Result};
use crate::launcher;

/// Run the edit command.
pub fn run_edit(
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

    if path_exists(path.to_str()) {
        println!(
            "{} Editing {} {} config: {}",
            "=>".blue().bold(),
            tool.name,
            scope.as_str(),
            path.display().to_string().cyan()
        );
    } else {
        println!(
            "{} Creating {} {} config: {}",
            "=>".blue().bold(),
            tool.name,
            scope.as_str(),
            path.display().to_string().cyan()
        );
        write_default_config(&path)?;
        println!("{} Created default MCP config.", "OK".green().bold());
    }

    launcher::launch(&path)?;

    println!("{} Opened in default editor.", "OK".green().bold());
    Ok(())
}

/// Write the default MCP template, creating parent directories as needed.
fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::user(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let template = json!({ "mcpServers": {} });
    let content = serde_json::to_string_pretty(&template)?;
    fs::write(path, content)
        .map_err(|e| CliError::user(format!("Failed to create {}: {}", path.display(), e)))?;

    Ok(())
}
