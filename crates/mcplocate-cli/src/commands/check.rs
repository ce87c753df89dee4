//! Check command implementation
//!
//! Resolves every applicable scope of every registered tool and reports
//! which config files exist on this system.

use colored::Colorize;
use mcplocate_core::{Environment, Scope, ToolRegistry, path_exists, resolve_tool_paths};
use serde::Serialize;
use serde_json::json;

use crate::error::Result;

/// One probed path in the check sweep.
#[derive(Debug, Serialize)]
struct CheckEntry {
    tool: String,
    scope: Scope,
    path: String,
    exists: bool,
}

/// Run the check command.
pub fn run_check(registry: &ToolRegistry, env: &dyn Environment, json_output: bool) -> Result<()> {
    if !json_output {
        println!();
        println!("{}", "MCP Configuration File Check".bold());
        println!();
        println!(
            "Current directory: {}",
            env.current_dir().display().to_string().dimmed()
        );
    }

    let mut entries: Vec<CheckEntry> = Vec::new();
    let mut found = 0usize;
    let mut missing = 0usize;

    for tool in registry.iter() {
        let resolved = resolve_tool_paths(tool, env);

        if !json_output {
            println!();
            println!("{} {}", tool.icon, tool.name.bold());
        }

        for scope in [Scope::User, Scope::Project, Scope::System] {
            let Some(path) = resolved.get(scope) else {
                continue;
            };
            let exists = path_exists(Some(path));
            if exists {
                found += 1;
            } else {
                missing += 1;
            }

            if !json_output {
                let status = if exists {
                    "✓ found    ".green()
                } else {
                    "○ not found".dimmed()
                };
                println!(
                    "   {} {} {}",
                    status,
                    format!("[{}]", scope).dimmed(),
                    path
                );
            }

            entries.push(CheckEntry {
                tool: tool.key.clone(),
                scope,
                path: path.to_string(),
                exists,
            });
        }

        if !json_output && resolved.user.is_none() {
            if let Some(note) = &tool.note {
                println!("   {} {}", "note:".yellow(), note);
            }
        }
    }

    if json_output {
        let report = json!({
            "entries": entries,
            "found": found,
            "not_found": missing,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!(
            "{} {} found, {} not found",
            "Summary:".bold(),
            found.to_string().green(),
            missing
        );
        println!();
    }

    Ok(())
}
