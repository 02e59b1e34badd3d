//! Purpose: Plugin construction and the once-per-build alias injection entry point.
//! Exports: `TsconfigAliasPlugin`, `PluginOptions`, `ResolveConfig`, `init_diagnostics`.
//! Role: Orchestrates load, extraction, and merge; the host calls `apply` at its resolver hook.
//! Invariants: Construction is the only failure that propagates; `apply` never panics or errors.
//! Invariants: A failed or no-op invocation leaves the host's resolve config untouched.
//! Invariants: `apply` is the sole writer of `ResolveConfig` during its invocation window.

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::core::alias::{self, AliasMap};
use crate::core::error::{Error, ErrorKind};
use crate::core::report::InjectReport;
use crate::core::tsconfig;

/// Construction-time options. `tsconfig_root` has no default.
#[derive(Clone, Debug)]
pub struct PluginOptions {
    pub tsconfig_root: PathBuf,
}

/// The slice of host resolver state this plugin mutates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveConfig {
    pub alias: AliasMap,
}

impl ResolveConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct TsconfigAliasPlugin {
    tsconfig_root: PathBuf,
}

impl TsconfigAliasPlugin {
    /// Fails with `ErrorKind::Usage` when the root option is empty; this is
    /// the only error callers ever have to handle.
    pub fn new(options: PluginOptions) -> Result<Self, Error> {
        if options.tsconfig_root.as_os_str().is_empty() {
            return Err(Error::new(ErrorKind::Usage).with_message(
                "tsconfig_root is required and must name the directory containing tsconfig.json",
            ));
        }
        Ok(Self {
            tsconfig_root: options.tsconfig_root,
        })
    }

    pub fn tsconfig_root(&self) -> &Path {
        &self.tsconfig_root
    }

    /// Run the single per-build invocation: load `<root>/tsconfig.json`,
    /// extract `compilerOptions.paths`, and overlay the result onto
    /// `resolve.alias`. Load failures skip the merge and are reported, not
    /// raised; unusable entries are skipped individually.
    pub fn apply(&self, resolve: &mut ResolveConfig) -> InjectReport {
        let tsconfig_path = tsconfig::tsconfig_path(&self.tsconfig_root);
        tracing::debug!(path = %tsconfig_path.display(), "loading tsconfig");

        let config = match tsconfig::load(&self.tsconfig_root) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(error = %err, "alias injection skipped");
                return InjectReport::skipped(tsconfig_path, &err);
            }
        };

        let options = config.compiler_options.unwrap_or_default();
        let Some(paths) = options.paths else {
            tracing::warn!(
                path = %tsconfig_path.display(),
                "tsconfig has no compilerOptions.paths; nothing to inject"
            );
            return InjectReport::no_mappings(tsconfig_path);
        };

        // Candidates resolve against baseUrl when set, mirroring tsc.
        let base_dir = match options.base_url.as_deref() {
            Some(base) => alias::resolve_candidate(&self.tsconfig_root, base),
            None => self.tsconfig_root.clone(),
        };

        let extraction = alias::extract_aliases(&paths, &base_dir);
        for skip in &extraction.skipped {
            tracing::warn!(alias = %skip.alias, "{}", skip.message);
        }

        let applied = extraction.aliases.len();
        alias::merge_aliases(&mut resolve.alias, extraction.aliases);
        tracing::info!(
            path = %tsconfig_path.display(),
            count = applied,
            "alias injection complete"
        );
        InjectReport::applied(tsconfig_path, applied, extraction.skipped)
    }
}

/// Opt-in stderr diagnostics for hosts without their own subscriber.
pub fn init_diagnostics() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
