//! Operating system identity and the environment seam.
//!
//! Everything platform-dependent the resolver reads (OS, home directory,
//! environment variables, working directory) goes through the
//! [`Environment`] trait so tests can simulate each supported system
//! without touching the real host.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// The three operating systems the registry carries path templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the platform of the running process.
    ///
    /// Path templates only distinguish three systems; anything that is not
    /// Windows or macOS is treated as Linux.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }

    /// Machine identifier ("windows", "macos", "linux").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }

    /// Separator used when rendering resolved paths for this platform.
    pub fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::MacOs | Self::Linux => '/',
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
        };
        write!(f, "{}", label)
    }
}

/// Everything the resolver reads from the outside world.
///
/// Production code uses [`HostEnvironment`]; tests use
/// [`FixedEnvironment`] to pin the platform, home directory, environment
/// variables, and working directory.
pub trait Environment {
    /// The operating system paths are resolved for.
    fn platform(&self) -> Platform;

    /// The user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Read an environment variable. Unset and non-unicode values both
    /// read as absent.
    fn var(&self, name: &str) -> Option<String>;

    /// The working directory project-scope paths are resolved against.
    fn current_dir(&self) -> PathBuf;
}

/// [`Environment`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostEnvironment;

impl Environment for HostEnvironment {
    fn platform(&self) -> Platform {
        Platform::detect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn current_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// A fully pinned [`Environment`].
///
/// Lets the test suites exercise Windows and macOS resolution from any
/// host, and control which environment variables are set.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    platform: Platform,
    home: Option<PathBuf>,
    vars: HashMap<String, String>,
    cwd: PathBuf,
}

impl FixedEnvironment {
    /// Create an environment pinned to `platform` with the given home
    /// directory and working directory, and no variables set.
    pub fn new(platform: Platform, home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            home: Some(home.into()),
            vars: HashMap::new(),
            cwd: cwd.into(),
        }
    }

    /// Set an environment variable (builder pattern).
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Remove the home directory, simulating a host where none can be
    /// determined.
    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }
}

impl Environment for FixedEnvironment {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_dir(&self) -> PathBuf {
        self.cwd.clone()
    }
}
