//! Built-in tool descriptors - SINGLE SOURCE OF TRUTH
//!
//! Every supported tool is declared here, in the order commands list them.
//! Lookup, listing, and the check sweep all derive from this function.

use super::types::{PlatformPaths, ToolDescriptor, ToolPaths};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 7;

/// Returns every built-in tool descriptor in definition order.
pub fn builtin_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "claude",
            "Claude Code",
            "Anthropic's Claude AI coding assistant",
            "🤖",
            ToolPaths {
                user: Some(PlatformPaths::same("~/.claude/claude_desktop_config.json")),
                project: Some(".mcp.json".into()),
                system: None,
            },
        )
        .with_aliases(&["claude-code", "claudecode", "anthropic"])
        .with_docs("https://docs.anthropic.com/en/docs/claude-code"),
        ToolDescriptor::new(
            "gemini",
            "Gemini CLI",
            "Google's Gemini AI command-line interface",
            "✨",
            ToolPaths {
                user: Some(PlatformPaths::same("~/.gemini/settings.json")),
                project: Some(".gemini/settings.json".into()),
                system: Some(PlatformPaths::per_os(
                    "C:\\ProgramData\\gemini-cli\\settings.json",
                    "/Library/Application Support/GeminiCli/settings.json",
                    "/etc/gemini-cli/settings.json",
                )),
            },
        )
        .with_aliases(&["gemini-cli", "geminicli", "google-gemini"])
        .with_docs("https://github.com/google-gemini/gemini-cli"),
        ToolDescriptor::new(
            "cursor",
            "Cursor",
            "AI-powered code editor",
            "📝",
            ToolPaths {
                user: Some(PlatformPaths::same("~/.cursor/mcp.json")),
                project: Some(".cursor/mcp.json".into()),
                system: None,
            },
        )
        .with_aliases(&["cursor-ide", "cursoride"])
        .with_docs("https://docs.cursor.com/context/model-context-protocol"),
        ToolDescriptor::new(
            "copilot",
            "GitHub Copilot CLI",
            "GitHub's AI pair programmer CLI",
            "🐙",
            ToolPaths {
                user: Some(PlatformPaths::same("~/.copilot/mcp-config.json")),
                project: Some(".copilot/mcp-config.json".into()),
                system: None,
            },
        )
        .with_aliases(&["github-copilot", "gh-copilot", "copilot-cli"])
        .with_docs("https://docs.github.com/en/copilot"),
        ToolDescriptor::new(
            "vscode",
            "VS Code",
            "Visual Studio Code with MCP support",
            "💻",
            ToolPaths {
                user: Some(PlatformPaths::per_os(
                    "%APPDATA%/Code/User/mcp.json",
                    "~/Library/Application Support/Code/User/mcp.json",
                    "~/.config/Code/User/mcp.json",
                )),
                project: Some(".vscode/mcp.json".into()),
                system: None,
            },
        )
        .with_aliases(&["code", "visual-studio-code", "vsc"])
        .with_docs("https://code.visualstudio.com/docs"),
        ToolDescriptor::new(
            "antigravity",
            "Antigravity",
            "Google's AI-powered coding assistant",
            "🚀",
            ToolPaths {
                // User-level config has no file path on any OS.
                user: Some(PlatformPaths::none()),
                project: Some(".mcp.json".into()),
                system: None,
            },
        )
        .with_aliases(&["anti-gravity", "google-antigravity"])
        .with_note(
            "User-level MCP config is managed through the Antigravity UI. \
             Use the \"...\" menu > \"MCP Servers\" to configure.",
        )
        .with_docs("https://antigravity.google"),
        ToolDescriptor::new(
            "warp",
            "Warp",
            "AI-powered terminal with MCP support",
            "⚡",
            ToolPaths {
                user: Some(PlatformPaths::per_os(
                    "~/.warp/mcp.json",
                    "~/.warp/mcp.json",
                    "~/.local/state/warp-terminal/mcp/mcp.json",
                )),
                project: None,
                system: None,
            },
        )
        .with_aliases(&["warp-terminal", "warpterminal"])
        .with_note("MCP servers can also be managed via Settings > AI > Manage MCP servers in Warp.")
        .with_docs("https://docs.warp.dev"),
    ]
}
