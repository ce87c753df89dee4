//! Core types for the tool registry.

use serde::Serialize;

use crate::platform::Platform;

/// Configuration scope a path applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Per-user config, usually under the home directory.
    User,
    /// Per-project config, relative to the working directory.
    Project,
    /// Machine-wide config.
    System,
}

impl Scope {
    /// Machine identifier ("user", "project", "system").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::User => "User",
            Self::Project => "Project",
            Self::System => "System",
        };
        write!(f, "{}", label)
    }
}

/// Per-OS path templates for one configuration scope.
///
/// `None` means the scope has no file-backed path on that system (for
/// example a config managed inside the tool's own UI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlatformPaths {
    pub windows: Option<String>,
    pub macos: Option<String>,
    pub linux: Option<String>,
}

impl PlatformPaths {
    /// The same template on all three systems.
    pub fn same(template: impl Into<String>) -> Self {
        let template = template.into();
        Self {
            windows: Some(template.clone()),
            macos: Some(template.clone()),
            linux: Some(template),
        }
    }

    /// A distinct template per system.
    pub fn per_os(
        windows: impl Into<String>,
        macos: impl Into<String>,
        linux: impl Into<String>,
    ) -> Self {
        Self {
            windows: Some(windows.into()),
            macos: Some(macos.into()),
            linux: Some(linux.into()),
        }
    }

    /// No file-backed path on any system.
    pub fn none() -> Self {
        Self::default()
    }

    /// The template for one system, if any.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Windows => self.windows.as_deref(),
            Platform::MacOs => self.macos.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        }
    }

    /// True if no system has a template.
    pub fn is_empty(&self) -> bool {
        self.windows.is_none() && self.macos.is_none() && self.linux.is_none()
    }
}

/// Path templates for every scope a tool supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolPaths {
    /// Per-user config templates, keyed by OS.
    pub user: Option<PlatformPaths>,
    /// Project config template. OS-independent, working-directory relative.
    pub project: Option<String>,
    /// Machine-wide config templates, keyed by OS. Rarely present.
    pub system: Option<PlatformPaths>,
}

impl ToolPaths {
    /// True if at least one scope carries a template for at least one OS.
    ///
    /// A descriptor failing this is meaningless to register.
    pub fn is_resolvable(&self) -> bool {
        self.user.as_ref().is_some_and(|p| !p.is_empty())
            || self.project.is_some()
            || self.system.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// Static record describing one supported tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Canonical lowercase identifier (e.g. "cursor").
    pub key: String,
    /// Display name (e.g. "Cursor").
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Display glyph. Cosmetic only.
    pub icon: String,
    /// Additional lowercase names that also resolve to this tool.
    pub aliases: Vec<String>,
    /// Explanation of irregular behavior (e.g. UI-managed config).
    pub note: Option<String>,
    /// Documentation URL.
    pub docs: Option<String>,
    /// Path templates per scope.
    pub paths: ToolPaths,
}

impl ToolDescriptor {
    /// Create a descriptor with no aliases, note, or docs link.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        paths: ToolPaths,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            aliases: Vec::new(),
            note: None,
            docs: None,
            paths,
        }
    }

    /// Set the alias list (builder pattern).
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| (*a).to_string()).collect();
        self
    }

    /// Attach an explanatory note (builder pattern).
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attach a documentation URL (builder pattern).
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_paths() -> ToolPaths {
        ToolPaths {
            user: Some(PlatformPaths::same("~/.test/mcp.json")),
            project: Some(".test/mcp.json".into()),
            system: None,
        }
    }

    #[test]
    fn test_scope_labels() {
        assert_eq!(Scope::User.as_str(), "user");
        assert_eq!(Scope::Project.to_string(), "Project");
        assert_eq!(Scope::System.as_str(), "system");
    }

    #[test]
    fn test_platform_paths_same() {
        let paths = PlatformPaths::same("~/.x/mcp.json");
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            assert_eq!(paths.get(platform), Some("~/.x/mcp.json"));
        }
    }

    #[test]
    fn test_platform_paths_per_os() {
        let paths = PlatformPaths::per_os("C:\\x.json", "/Library/x.json", "/etc/x.json");
        assert_eq!(paths.get(Platform::Windows), Some("C:\\x.json"));
        assert_eq!(paths.get(Platform::MacOs), Some("/Library/x.json"));
        assert_eq!(paths.get(Platform::Linux), Some("/etc/x.json"));
    }

    #[test]
    fn test_platform_paths_none() {
        let paths = PlatformPaths::none();
        assert!(paths.is_empty());
        assert_eq!(paths.get(Platform::Linux), None);
    }

    #[test]
    fn test_is_resolvable() {
        assert!(make_paths().is_resolvable());

        // Project-only is enough.
        let project_only = ToolPaths {
            user: Some(PlatformPaths::none()),
            project: Some(".mcp.json".into()),
            system: None,
        };
        assert!(project_only.is_resolvable());

        // All-empty is not.
        let empty = ToolPaths {
            user: Some(PlatformPaths::none()),
            project: None,
            system: None,
        };
        assert!(!empty.is_resolvable());
    }

    #[test]
    fn test_descriptor_builder() {
        let tool = ToolDescriptor::new("test", "Test Tool", "A test tool", "T", make_paths())
            .with_aliases(&["test-tool", "tt"])
            .with_note("Config is managed elsewhere.")
            .with_docs("https://example.com/docs");

        assert_eq!(tool.key, "test");
        assert_eq!(tool.name, "Test Tool");
        assert_eq!(tool.aliases, vec!["test-tool", "tt"]);
        assert_eq!(tool.note.as_deref(), Some("Config is managed elsewhere."));
        assert_eq!(tool.docs.as_deref(), Some("https://example.com/docs"));
    }

    #[test]
    fn test_descriptor_defaults() {
        let tool = ToolDescriptor::new("test", "Test", "Desc", "T", make_paths());
        assert!(tool.aliases.is_empty());
        assert!(tool.note.is_none());
        assert!(tool.docs.is_none());
    }
}
