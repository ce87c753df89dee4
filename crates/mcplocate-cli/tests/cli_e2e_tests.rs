//! End-to-end tests for the mcplocate binary

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the mcplocate binary
fn mcplocate_cmd() -> Command {
    Command::cargo_bin("mcplocate").expect("Failed to find mcplocate binary")
}

// ============================================================================
// Default / show Command Tests
// ============================================================================

#[test]
fn test_no_arguments_shows_usage_hint() {
    let mut cmd = mcplocate_cmd();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mcplocate"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_default_argument_shows_tool() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("cursor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor"))
        .stdout(predicate::str::contains("mcp.json"));
}

#[test]
fn test_show_subcommand_matches_default() {
    let mut cmd = mcplocate_cmd();
    cmd.args(["show", "cursor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor"));
}

#[test]
fn test_show_is_case_insensitive() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("CURSOR")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cursor"));
}

#[test]
fn test_show_resolves_aliases() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("claude-code")
        .assert()
        .success()
        .stdout(predicate::str::contains("Claude Code"));
}

#[test]
fn test_show_ui_managed_tool_prints_note() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("antigravity")
        .assert()
        .success()
        .stdout(predicate::str::contains("managed via UI"))
        .stdout(predicate::str::contains("Antigravity UI"));
}

#[test]
fn test_show_json_output() {
    let mut cmd = mcplocate_cmd();
    let output = cmd.args(["show", "warp", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["tool"]["key"], "warp");
    assert!(parsed["paths"]["project"].is_null());
}

#[test]
fn test_unknown_tool_fails_and_lists_keys() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("definitely-not-a-tool")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool"))
        .stderr(predicate::str::contains("claude"))
        .stderr(predicate::str::contains("warp"));
}

// ============================================================================
// list Command Tests
// ============================================================================

#[test]
fn test_list_shows_every_builtin() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported AI Tools"))
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("gemini"))
        .stdout(predicate::str::contains("cursor"))
        .stdout(predicate::str::contains("copilot"))
        .stdout(predicate::str::contains("vscode"))
        .stdout(predicate::str::contains("antigravity"))
        .stdout(predicate::str::contains("warp"));
}

#[test]
fn test_list_shows_aliases_and_total() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aliases: claude-code"))
        .stdout(predicate::str::contains("Total:"))
        .stdout(predicate::str::contains("tools available"));
}

#[test]
fn test_ls_alias() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported AI Tools"));
}

#[test]
fn test_list_json_output() {
    let mut cmd = mcplocate_cmd();
    let output = cmd.args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tools = parsed.as_array().unwrap();
    assert_eq!(tools.len(), 7);
    assert_eq!(tools[0]["key"], "claude");
}

// ============================================================================
// check Command Tests
// ============================================================================

#[test]
fn test_check_prints_summary() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut cmd = mcplocate_cmd();
    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP Configuration File Check"))
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_check_finds_project_config() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join(".cursor")).unwrap();
    std::fs::write(temp.path().join(".cursor/mcp.json"), "{\"mcpServers\": {}}").unwrap();

    let mut cmd = mcplocate_cmd();
    cmd.current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("found"));
}

#[test]
fn test_check_json_output() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut cmd = mcplocate_cmd();
    let output = cmd
        .current_dir(temp.path())
        .args(["check", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed["entries"].is_array());
    assert!(parsed["found"].is_number());
    assert!(parsed["not_found"].is_number());
}

// ============================================================================
// open Command Tests
// ============================================================================

#[test]
fn test_open_missing_project_config_hints_edit() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut cmd = mcplocate_cmd();
    cmd.current_dir(temp.path())
        .args(["open", "cursor", "--project"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("mcplocate edit cursor"));
}

#[test]
fn test_open_ui_managed_user_config_fails_with_note() {
    let mut cmd = mcplocate_cmd();
    cmd.args(["open", "antigravity"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("managed"))
        .stderr(predicate::str::contains("No user config path defined"));
}

#[test]
fn test_open_unknown_tool_fails() {
    let mut cmd = mcplocate_cmd();
    cmd.args(["open", "nope"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown tool"));
}

// ============================================================================
// edit Command Tests
// ============================================================================

#[test]
fn test_edit_creates_default_project_config() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut cmd = mcplocate_cmd();
    cmd.current_dir(temp.path())
        .args(["edit", "cursor", "--project"]);
    // Exit status depends on whether a launcher binary exists in the test
    // environment; the file must be created either way.
    let _ = cmd.assert();

    let config = temp.path().join(".cursor").join("mcp.json");
    assert!(config.exists());

    let content = std::fs::read_to_string(config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed["mcpServers"].as_object().unwrap().is_empty());
}

#[test]
fn test_edit_without_project_path_fails() {
    // warp registers no project-scope template at all.
    let temp = tempfile::TempDir::new().unwrap();
    let mut cmd = mcplocate_cmd();
    cmd.current_dir(temp.path())
        .args(["edit", "warp", "--project"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No project config path defined"));
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help_describes_the_tool() {
    let mut cmd = mcplocate_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP configuration"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("check"));
}
