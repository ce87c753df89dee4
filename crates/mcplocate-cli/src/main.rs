//! mcplocate CLI
//!
//! Finds where AI coding tools keep their MCP configuration files.

mod cli;
mod commands;
mod error;
mod launcher;

use clap::Parser;
use colored::Colorize;
use mcplocate_core::{HostEnvironment, ToolRegistry};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let registry = ToolRegistry::with_builtins();
    let env = HostEnvironment;

    match (cli.command, cli.tool) {
        (Some(cmd), _) => execute_command(&registry, &env, cmd),
        (None, Some(tool)) => commands::run_show(&registry, &env, &tool, false),
        (None, None) => {
            // No command and no tool - show a usage hint
            println!(
                "{} MCP Configuration File Locator",
                "mcplocate".green().bold()
            );
            println!();
            println!(
                "Run {} with a tool name (e.g. {}), or {} for available commands.",
                "mcplocate".cyan(),
                "mcplocate cursor".cyan(),
                "mcplocate --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(registry: &ToolRegistry, env: &HostEnvironment, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Show { tool, json } => commands::run_show(registry, env, &tool, json),
        Commands::List { json } => commands::run_list(registry, json),
        Commands::Check { json } => commands::run_check(registry, env, json),
        Commands::Open { tool, project } => commands::run_open(registry, env, &tool, project),
        Commands::Edit { tool, project } => commands::run_edit(registry, env, &tool, project),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_default_argument_parses_as_tool() {
        let cli = Cli::parse_from(["mcplocate", "cursor"]);
        assert_eq!(cli.tool.as_deref(), Some("cursor"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommand_wins_over_positional() {
        let cli = Cli::parse_from(["mcplocate", "list"]);
        assert!(matches!(cli.command, Some(Commands::List { .. })));
        assert!(cli.tool.is_none());
    }
}
