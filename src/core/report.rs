//! Purpose: Provide a stable, serializable invocation-outcome model.
//! Exports: `InjectReport`, `InjectStatus`, `EntrySkip`.
//! Role: Shared contract for host diagnostics and tests; the log stream stays human-only.
//! Invariants: Reports are additive-only; no tsconfig payloads are embedded.
//! Invariants: A `Skipped` report always carries a failure summary.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::error::Error;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectStatus {
    /// Extraction ran and the merge was applied (possibly with zero entries).
    Applied,
    /// `compilerOptions.paths` was absent; nothing to inject.
    NoMappings,
    /// The configuration could not be loaded; the merge did not run.
    Skipped,
}

/// One path-mapping entry that could not be turned into an alias.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntrySkip {
    pub alias: String,
    pub message: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InjectReport {
    pub tsconfig_path: PathBuf,
    pub status: InjectStatus,
    pub applied: usize,
    pub skipped: Vec<EntrySkip>,
    pub failure: Option<String>,
}

impl InjectReport {
    pub fn applied(tsconfig_path: PathBuf, applied: usize, skipped: Vec<EntrySkip>) -> Self {
        Self {
            tsconfig_path,
            status: InjectStatus::Applied,
            applied,
            skipped,
            failure: None,
        }
    }

    pub fn no_mappings(tsconfig_path: PathBuf) -> Self {
        Self {
            tsconfig_path,
            status: InjectStatus::NoMappings,
            applied: 0,
            skipped: Vec::new(),
            failure: None,
        }
    }

    pub fn skipped(tsconfig_path: PathBuf, error: &Error) -> Self {
        Self {
            tsconfig_path,
            status: InjectStatus::Skipped,
            applied: 0,
            skipped: Vec::new(),
            failure: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EntrySkip, InjectReport, InjectStatus};
    use crate::core::error::{Error, ErrorKind};
    use std::path::PathBuf;

    #[test]
    fn skipped_report_carries_failure_summary() {
        let err = Error::new(ErrorKind::NotFound)
            .with_message("tsconfig.json not found under the configured root");
        let report = InjectReport::skipped(PathBuf::from("/proj/tsconfig.json"), &err);
        assert_eq!(report.status, InjectStatus::Skipped);
        assert_eq!(report.applied, 0);
        let failure = report.failure.expect("failure summary");
        assert!(failure.starts_with("NotFound"));
    }

    #[test]
    fn report_serializes_with_stable_field_names() {
        let report = InjectReport::applied(
            PathBuf::from("/proj/tsconfig.json"),
            1,
            vec![EntrySkip {
                alias: "@x/*".to_owned(),
                message: "no candidate paths configured".to_owned(),
            }],
        );
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value.get("status").and_then(|v| v.as_str()), Some("applied"));
        assert_eq!(value.get("applied").and_then(|v| v.as_u64()), Some(1));
        let skipped = value
            .get("skipped")
            .and_then(|v| v.as_array())
            .expect("skipped array");
        assert_eq!(
            skipped[0].get("alias").and_then(|v| v.as_str()),
            Some("@x/*")
        );
        assert!(value.get("failure").expect("failure field").is_null());
    }
}
