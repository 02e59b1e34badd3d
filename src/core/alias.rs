//! Purpose: Derive a flat alias table from a tsconfig path-mapping table.
//! Exports: `AliasMap`, `Extraction`, `extract_aliases`, `merge_aliases`.
//! Role: Pure extraction and merge logic; no filesystem access, no logging.
//! Invariants: Every produced key is non-empty with its trailing wildcard stripped.
//! Invariants: Every produced value is an absolute, lexically normalized path.
//! Invariants: Only the first candidate of each mapping entry is considered.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};
use crate::core::report::EntrySkip;

/// Alias key to absolute target path, as consumed by a host resolver.
pub type AliasMap = BTreeMap<String, PathBuf>;

/// Outcome of one extraction pass over a path-mapping table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub aliases: AliasMap,
    pub skipped: Vec<EntrySkip>,
}

impl Extraction {
    fn skip(&mut self, error: &Error) {
        self.skipped.push(EntrySkip {
            alias: error.alias().unwrap_or_default().to_owned(),
            message: error.message().unwrap_or_default().to_owned(),
        });
    }
}

fn invalid_entry(alias: &str, message: &str) -> Error {
    Error::new(ErrorKind::InvalidEntry)
        .with_alias(alias)
        .with_message(message)
}

/// Build an alias table from `compilerOptions.paths`, resolving candidate
/// paths against `base_dir`. Unusable entries are recorded, not fatal.
pub fn extract_aliases(paths: &Map<String, Value>, base_dir: &Path) -> Extraction {
    let mut extraction = Extraction::default();
    for (key, candidates) in paths {
        let first = match candidates.as_array().and_then(|list| list.first()) {
            Some(value) => value,
            None => {
                extraction.skip(&invalid_entry(key, "no candidate paths configured"));
                continue;
            }
        };
        let target = match first.as_str() {
            Some(text) if !text.is_empty() => text,
            _ => {
                extraction.skip(&invalid_entry(key, "first candidate path is empty or not a string"));
                continue;
            }
        };
        let cleaned_key = strip_wildcard(key);
        if cleaned_key.is_empty() {
            extraction.skip(&invalid_entry(key, "alias key reduces to an empty string"));
            continue;
        }
        let resolved = resolve_candidate(base_dir, strip_wildcard(target));
        // Duplicate cleaned keys: last one processed wins, as in the source map.
        extraction.aliases.insert(cleaned_key.to_owned(), resolved);
    }
    extraction
}

/// Overlay `extracted` onto the host's alias map. Extracted entries win on
/// key collision; all other host entries are retained unchanged.
pub fn merge_aliases(existing: &mut AliasMap, extracted: AliasMap) {
    existing.extend(extracted);
}

fn strip_wildcard(text: &str) -> &str {
    if let Some(prefix) = text.strip_suffix("/*") {
        prefix
    } else {
        text.strip_suffix('*').unwrap_or(text)
    }
}

/// Absolute candidates pass through; relative ones join `base_dir`. Either
/// way `.` and `..` components are resolved lexically, without touching disk.
pub(crate) fn resolve_candidate(base_dir: &Path, candidate: &str) -> PathBuf {
    let raw = Path::new(candidate);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        base_dir.join(raw)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{AliasMap, extract_aliases, invalid_entry, merge_aliases, resolve_candidate};
    use crate::core::error::ErrorKind;
    use serde_json::{Map, Value, json};
    use std::path::{Path, PathBuf};

    fn paths_table(entries: &[(&str, Value)]) -> Map<String, Value> {
        let mut table = Map::new();
        for (key, value) in entries {
            table.insert((*key).to_owned(), value.clone());
        }
        table
    }

    #[test]
    fn wildcard_entry_resolves_under_root() {
        let table = paths_table(&[("@app/*", json!(["src/app/*"]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert!(extraction.skipped.is_empty());
        assert_eq!(extraction.aliases.len(), 1);
        assert_eq!(
            extraction.aliases.get("@app"),
            Some(&PathBuf::from("/proj/src/app"))
        );
    }

    #[test]
    fn empty_candidate_list_is_skipped() {
        let table = paths_table(&[("@x/*", json!([]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert!(extraction.aliases.is_empty());
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].alias, "@x/*");
    }

    #[test]
    fn invalid_entries_do_not_block_valid_ones() {
        let table = paths_table(&[
            ("@bad/*", json!([42])),
            ("@empty/*", json!([""])),
            ("@good/*", json!(["src/good/*"])),
        ]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert_eq!(extraction.aliases.len(), 1);
        assert_eq!(
            extraction.aliases.get("@good"),
            Some(&PathBuf::from("/proj/src/good"))
        );
        assert_eq!(extraction.skipped.len(), 2);
    }

    #[test]
    fn only_first_candidate_is_used() {
        let table = paths_table(&[("@ui/*", json!(["src/ui/*", "fallback/ui/*"]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert_eq!(
            extraction.aliases.get("@ui"),
            Some(&PathBuf::from("/proj/src/ui"))
        );
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn exact_mapping_without_wildcard_is_kept() {
        let table = paths_table(&[("config", json!(["src/config.ts"]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert_eq!(
            extraction.aliases.get("config"),
            Some(&PathBuf::from("/proj/src/config.ts"))
        );
    }

    #[test]
    fn duplicate_cleaned_keys_last_entry_wins() {
        let table = paths_table(&[
            ("@app/*", json!(["src/app/*"])),
            ("@app", json!(["src/app-exact"])),
        ]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert!(extraction.skipped.is_empty());
        assert_eq!(extraction.aliases.len(), 1);
        assert_eq!(
            extraction.aliases.get("@app"),
            Some(&PathBuf::from("/proj/src/app-exact"))
        );
    }

    #[test]
    fn entry_failures_are_modeled_as_invalid_entry_errors() {
        let err = invalid_entry("@x/*", "no candidate paths configured");
        assert_eq!(err.kind(), ErrorKind::InvalidEntry);

        let table = paths_table(&[("@x/*", json!([]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert_eq!(extraction.skipped[0].alias, "@x/*");
        assert_eq!(extraction.skipped[0].message, "no candidate paths configured");
    }

    #[test]
    fn wildcard_only_key_is_skipped() {
        let table = paths_table(&[("*", json!(["src/*"]))]);
        let extraction = extract_aliases(&table, Path::new("/proj"));
        assert!(extraction.aliases.is_empty());
        assert_eq!(extraction.skipped.len(), 1);
    }

    #[test]
    fn candidate_parent_components_resolve_lexically() {
        assert_eq!(
            resolve_candidate(Path::new("/proj/pkg"), "../shared/lib"),
            PathBuf::from("/proj/shared/lib")
        );
        assert_eq!(
            resolve_candidate(Path::new("/proj"), "./src/./app"),
            PathBuf::from("/proj/src/app")
        );
        assert_eq!(
            resolve_candidate(Path::new("/proj"), "/abs/dir"),
            PathBuf::from("/abs/dir")
        );
    }

    #[test]
    fn merge_preserves_existing_entries_and_overwrites_collisions() {
        let mut existing = AliasMap::new();
        existing.insert("@old".to_owned(), PathBuf::from("/proj/old"));
        existing.insert("@app".to_owned(), PathBuf::from("/proj/stale"));

        let mut extracted = AliasMap::new();
        extracted.insert("@new".to_owned(), PathBuf::from("/proj/new"));
        extracted.insert("@app".to_owned(), PathBuf::from("/proj/src/app"));

        merge_aliases(&mut existing, extracted);
        assert_eq!(existing.get("@old"), Some(&PathBuf::from("/proj/old")));
        assert_eq!(existing.get("@new"), Some(&PathBuf::from("/proj/new")));
        assert_eq!(existing.get("@app"), Some(&PathBuf::from("/proj/src/app")));
    }
}
