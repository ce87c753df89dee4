//! Path template expansion and existence checks.
//!
//! Turns a descriptor's path templates into absolute paths for one
//! platform: a leading `~` expands to the home directory, Windows `%VAR%`
//! placeholders expand from the environment with home-relative fallbacks,
//! and project templates are joined to the working directory. Expansion is
//! purely lexical and never touches the filesystem; the only filesystem
//! contact in this module is the advisory [`path_exists`] probe.

use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::debug;

use crate::platform::{Environment, Platform};
use crate::registry::{Scope, ToolDescriptor};

static APPDATA_PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
static USERPROFILE_PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
static LOCALAPPDATA_PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

/// Paths for one tool, expanded for one platform and working directory.
///
/// Computed fresh on every call and never cached. `None` means the scope
/// is not applicable for the tool on this platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    /// Expanded per-user config path.
    pub user: Option<String>,
    /// The unexpanded template `user` came from.
    pub user_raw: Option<String>,
    /// Project template exactly as registered (working-directory relative).
    pub project: Option<String>,
    /// Project template joined to the working directory.
    pub project_absolute: Option<String>,
    /// Expanded machine-wide config path.
    pub system: Option<String>,
    /// The unexpanded template `system` came from.
    pub system_raw: Option<String>,
}

impl ResolvedPaths {
    /// The effective path for a scope (the absolute form, for project).
    pub fn get(&self, scope: Scope) -> Option<&str> {
        match scope {
            Scope::User => self.user.as_deref(),
            Scope::Project => self.project_absolute.as_deref(),
            Scope::System => self.system.as_deref(),
        }
    }
}

/// Expand a path template into an absolute path.
///
/// `None` and empty templates resolve to `None` ("not applicable", not an
/// error). A leading `~` segment (either slash style) becomes the home
/// directory; on Windows, `%APPDATA%`, `%USERPROFILE%`, and
/// `%LOCALAPPDATA%` expand case-insensitively from the environment with
/// home-relative fallbacks when unset. The result is absolutized against
/// the working directory and normalized lexically - `.` and `..` collapse,
/// separators unify to the platform's. Malformed templates pass through
/// best-effort; this function never errors.
pub fn expand_path(template: Option<&str>, env: &dyn Environment) -> Option<String> {
    let template = template?;
    if template.is_empty() {
        return None;
    }

    let platform = env.platform();
    let home = env.home_dir().map(|h| h.to_string_lossy().into_owned());

    let mut expanded = template.to_string();

    if let Some(home) = &home {
        if expanded == "~" {
            expanded = home.clone();
        } else if expanded.starts_with("~/") || expanded.starts_with("~\\") {
            expanded = format!("{}/{}", home, &expanded[2..]);
        }
    }

    if platform == Platform::Windows {
        expanded = expand_windows_vars(&expanded, home.as_deref(), env);
    }

    let cwd = env.current_dir().to_string_lossy().into_owned();
    let resolved = normalize(&expanded, platform, &cwd);
    debug!(template, resolved = %resolved, "expanded path template");
    Some(resolved)
}

/// Replace `%APPDATA%`, `%USERPROFILE%`, and `%LOCALAPPDATA%`.
///
/// The three names are disjoint and never nest, so replacement order does
/// not matter. A placeholder with neither an environment value nor a home
/// directory to fall back on is left literal.
fn expand_windows_vars(path: &str, home: Option<&str>, env: &dyn Environment) -> String {
    let appdata = env
        .var("APPDATA")
        .or_else(|| home.map(|h| format!("{}/AppData/Roaming", h)));
    let localappdata = env
        .var("LOCALAPPDATA")
        .or_else(|| home.map(|h| format!("{}/AppData/Local", h)));

    let mut expanded = path.to_string();
    if let Some(value) = appdata {
        expanded = placeholder(&APPDATA_PLACEHOLDER, "APPDATA")
            .replace_all(&expanded, NoExpand(&value))
            .into_owned();
    }
    if let Some(value) = home {
        expanded = placeholder(&USERPROFILE_PLACEHOLDER, "USERPROFILE")
            .replace_all(&expanded, NoExpand(value))
            .into_owned();
    }
    if let Some(value) = localappdata {
        expanded = placeholder(&LOCALAPPDATA_PLACEHOLDER, "LOCALAPPDATA")
            .replace_all(&expanded, NoExpand(&value))
            .into_owned();
    }
    expanded
}

fn placeholder(cell: &'static OnceLock<Regex>, name: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(&format!("(?i)%{}%", name)).expect("placeholder pattern compiles")
    })
}

/// Resolve every scope of a tool for the current platform.
///
/// User and system templates are chosen by OS and expanded; the project
/// template is kept raw and additionally joined to the working directory -
/// project paths are repo-relative and get no `~`/`%VAR%` expansion.
/// Scopes absent from the descriptor stay `None`. Pure function of the
/// descriptor and environment.
pub fn resolve_tool_paths(descriptor: &ToolDescriptor, env: &dyn Environment) -> ResolvedPaths {
    let platform = env.platform();
    debug!(tool = %descriptor.key, platform = %platform, "resolving tool paths");

    let mut resolved = ResolvedPaths::default();

    if let Some(user) = &descriptor.paths.user {
        let template = user.get(platform);
        resolved.user = expand_path(template, env);
        resolved.user_raw = template.map(str::to_string);
    }

    if let Some(project) = &descriptor.paths.project {
        let cwd = env.current_dir().to_string_lossy().into_owned();
        resolved.project = Some(project.clone());
        resolved.project_absolute = Some(normalize(project, platform, &cwd));
    }

    if let Some(system) = &descriptor.paths.system {
        let template = system.get(platform);
        resolved.system = expand_path(template, env);
        resolved.system_raw = template.map(str::to_string);
    }

    resolved
}

/// Check whether a path exists on disk.
///
/// `None` and empty paths read as absent, and so does any probe failure
/// (permissions, I/O) - the answer is advisory display data only.
pub fn path_exists(path: Option<&str>) -> bool {
    match path {
        Some(p) if !p.is_empty() => Path::new(p).exists(),
        _ => false,
    }
}

/// Lexically absolutize `path` against `cwd` and collapse `.`/`..`
/// segments, rendering with the platform's separator. Accepts either slash
/// style in the input and never consults the filesystem.
fn normalize(path: &str, platform: Platform, cwd: &str) -> String {
    let sep = platform.separator();

    let (mut drive, rooted, rest) = split_root(path);
    let mut segments: Vec<&str> = Vec::new();

    let absolute = drive.is_some() || rooted;
    let (cwd_drive, cwd_rooted, cwd_rest) = split_root(cwd);
    if absolute {
        // A rooted path with no drive letter inherits the working
        // directory's drive on Windows.
        if platform == Platform::Windows && drive.is_none() {
            drive = cwd_drive;
        }
        segments.extend(rest.split(['/', '\\']));
    } else {
        segments.extend(cwd_rest.split(['/', '\\']));
        segments.extend(rest.split(['/', '\\']));
        drive = cwd_drive;
    }
    let rooted = rooted || (!absolute && cwd_rooted);

    let mut stack: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|s| *s != "..") {
                    stack.pop();
                } else if !rooted && drive.is_none() {
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    let mut out = String::new();
    if let Some(drive) = drive {
        out.push_str(drive);
    }
    if rooted {
        out.push(sep);
    }
    out.push_str(&stack.join(&sep.to_string()));
    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Split a leading `X:` drive prefix and/or root separator off a path.
fn split_root(path: &str) -> (Option<&str>, bool, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        let (drive, rest) = path.split_at(2);
        (Some(drive), rest.starts_with(['/', '\\']), rest)
    } else if path.starts_with(['/', '\\']) {
        (None, true, path)
    } else {
        (None, false, path)
    }
}
