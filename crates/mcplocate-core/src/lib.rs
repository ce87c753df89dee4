//! Core lookup and resolution logic for mcplocate.
//!
//! This crate holds the static catalog of AI coding tools and knows how to
//! expand their MCP config path templates into absolute filesystem paths
//! for the running (or a simulated) operating system.
//!
//! # Architecture
//!
//! Two pieces collaborate:
//!
//! 1. **Registry** - an immutable, definition-ordered catalog of
//!    [`ToolDescriptor`] records, looked up by key or alias.
//!
//! 2. **Resolver** - pure functions that turn a descriptor's path templates
//!    into concrete paths, reading the outside world only through the
//!    [`Environment`] seam so tests can simulate any supported OS.

pub mod platform;
pub mod registry;
pub mod resolver;

pub use platform::{Environment, FixedEnvironment, HostEnvironment, Platform};
pub use registry::{BUILTIN_COUNT, PlatformPaths, Scope, ToolDescriptor, ToolPaths, ToolRegistry};
pub use resolver::{ResolvedPaths, expand_path, path_exists, resolve_tool_paths};
