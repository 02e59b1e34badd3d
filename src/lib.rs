//! Purpose: Library crate injecting `tsconfig.json` path mappings into a bundler alias table.
//! Exports: `core` (tsconfig loading, alias extraction, merge, reports, errors).
//! Role: Host-agnostic plugin body; the host bundler calls `apply` once per build.
//! Invariants: The crate never writes to the filesystem and never aborts a host build.
//! Invariants: Construction is the only fallible entry point; invocation reports, not throws.
pub mod core;

pub use crate::core::alias::{AliasMap, Extraction, extract_aliases, merge_aliases};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::plugin::{PluginOptions, ResolveConfig, TsconfigAliasPlugin, init_diagnostics};
pub use crate::core::report::{EntrySkip, InjectReport, InjectStatus};
pub use crate::core::tsconfig::{CompilerOptions, TsConfig, tsconfig_path};
