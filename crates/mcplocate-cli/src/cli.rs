//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// mcplocate - Find MCP configuration file locations for AI coding tools
#[derive(Parser, Debug)]
#[command(name = "mcplocate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Tool name or alias to look up (e.g. cursor, claude, gemini)
    pub tool: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show where a tool keeps its MCP configuration
    ///
    /// Examples:
    ///   mcplocate show cursor
    ///   mcplocate cursor        # same thing
    Show {
        /// Tool name or alias
        tool: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List all supported AI tools
    #[command(alias = "ls")]
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check which MCP config files exist on this system
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Open a tool's MCP config file in the default editor
    Open {
        /// Tool name or alias
        tool: String,

        /// Open the project-level config instead of the user config
        #[arg(short, long)]
        project: bool,
    },

    /// Edit a tool's MCP config file (creates it if missing)
    Edit {
        /// Tool name or alias
        tool: String,

        /// Edit the project-level config instead of the user config
        #[arg(short, long)]
        project: bool,
    },
}
