//! Command implementations for mcplocate-cli

pub mod check;
pub mod edit;
pub mod list;
pub mod open;
pub mod show;

pub use check::run_check;
pub use edit::run_edit;
pub use list::run_list;
pub use open::run_open;
pub use show::run_show;

use std::path::PathBuf;

use colored::Colorize;
use mcplocate_core::{ResolvedPaths, Scope, ToolDescriptor, ToolRegistry};

use crate::error::{CliError, Result};

/// Report an unrecognized tool query and build the error for it.
///
/// The supported-tool list goes to stderr, alongside the error message.
pub(crate) fn unknown_tool_error(registry: &ToolRegistry, query: &str) -> CliError {
    eprintln!();
    eprintln!("Supported tools:");
    for key in registry.keys() {
        eprintln!("  {} {}", "•".cyan(), key.cyan());
    }
    eprintln!();
    eprintln!("Run {} for more details.", "mcplocate list".cyan());
    CliError::user(format!("Unknown tool: \"{}\"", query))
}

/// The path `open`/`edit` operate on, chosen by the `--project` flag.
///
/// Errors when the tool has no path for the requested scope on this
/// platform, echoing the descriptor's note first if it has one - that is
/// where "config is managed in the tool's UI" lives.
pub(crate) fn target_path(
    tool: &ToolDescriptor,
    resolved: &ResolvedPaths,
    project: bool,
) -> Result<(PathBuf, Scope)> {
    let scope = if project { Scope::Project } else { Scope::User };
    match resolved.get(scope) {
        Some(path) => Ok((PathBuf::from(path), scope)),
        None => {
            if let Some(note) = &tool.note {
                eprintln!();
                eprintln!("{} {}", "note:".yellow().bold(), note);
            }
            Err(CliError::user(format!(
                "No {} config path defined for {}",
                scope.as_str(),
                tool.name
            )))
        }
    }
}
