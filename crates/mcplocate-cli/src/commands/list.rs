//! List command implementation

use colored::Colorize;
use mcplocate_core::ToolRegistry;

use crate::error::Result;

/// Run the list command.
pub fn run_list(registry: &ToolRegistry, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(&registry.all())?);
        return Ok(());
    }

    println!();
    println!("{}", "Supported AI Tools".bold());
    println!();

    for tool in registry.iter() {
        println!(
            "{} {} {}",
            tool.icon,
            tool.name.bold(),
            format!("({})", tool.key).dimmed()
        );
        println!("   {}", tool.description.dimmed());
        if !tool.aliases.is_empty() {
            println!(
                "   {}",
                format!("Aliases: {}", tool.aliases.join(", ")).dimmed()
            );
        }
        println!();
    }

    println!(
        "{} {} tools available. Usage: {} (e.g. {})",
        "Total:".bold(),
        registry.len(),
        "mcplocate <tool-name>".cyan(),
        "mcplocate cursor".cyan()
    );
    println!();

    Ok(())
}
