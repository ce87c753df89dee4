//! Show command implementation
//!
//! Prints every scope's resolved path for one tool and whether it exists
//! on disk.

use colored::Colorize;
use mcplocate_core::{Environment, ToolRegistry, path_exists, resolve_tool_paths};
use serde_json::json;

use crate::commands::unknown_tool_error;
use crate::error::Result;

/// Run the show command for one tool.
pub fn run_show(
    registry: &ToolRegistry,
    env: &dyn Environment,
    query: &str,
    json_output: bool,
) -> Result<()> {
    let Some(tool) = registry.find(query) else {
        return Err(unknown_tool_error(registry, query));
    };

    let resolved = resolve_tool_paths(tool, env);

    if json_output {
        let report = json!({ "tool": tool, "paths": resolved });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "{}",
        format!("{} {} MCP Configuration", tool.icon, tool.name)
            .cyan()
            .bold()
    );
    println!();

    if let Some(user) = &resolved.user {
        print_scope("User", user, path_exists(Some(user.as_str())));
    } else if tool.note.is_some() {
        println!("  {:<10} {}", "User:".bold(), "(managed via UI)".dimmed());
    }

    if let Some(project) = &resolved.project {
        let exists = path_exists(resolved.project_absolute.as_deref());
        print_scope("Project", project, exists);
    }

    if let Some(system) = &resolved.system {
        print_scope("System", system, path_exists(Some(system.as_str())));
    }

    println!();

    if let Some(note) = &tool.note {
        println!("{} {}", "note:".yellow().bold(), note);
    }
    if let Some(docs) = &tool.docs {
        println!("{} {}", "docs:".blue().bold(), docs);
    }
    println!(
        "{} Run {} to open the config file.",
        "tip:".dimmed(),
        format!("mcplocate open {}", tool.key).cyan()
    );
    println!();

    Ok(())
}

fn print_scope(label: &str, path: &str, exists: bool) {
    let status = if exists {
        "✓ exists".green()
    } else {
        "○ not found".yellow()
    };
    println!("  {:<10} {}", format!("{}:", label).bold(), path);
    println!("  {:<10} {}", "", status);
}
