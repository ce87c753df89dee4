//! Static catalog of supported AI coding tools.
//!
//! Descriptors are declared once in [`builtins`] and served through
//! [`ToolRegistry`], which supports lookup by key or alias and stable
//! definition-order iteration.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_descriptors};
pub use store::ToolRegistry;
pub use types::{PlatformPaths, Scope, ToolDescriptor, ToolPaths};
