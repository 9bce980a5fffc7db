//! I/O layer for driving the external ROOT geometry toolkit.
//! Provides the `root` adapter: macro staging, batch-mode invocation, and
//! reply parsing.
pub mod root;
pub use root::{RootError, RootMacro, RootMacroLookup};
