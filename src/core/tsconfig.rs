//! Purpose: Locate, read, and decode `tsconfig.json` for alias extraction.
//! Exports: `TsConfig`, `CompilerOptions`, `tsconfig_path`, `load`.
//! Role: Single parse boundary; callers never touch raw JSON outside this module.
//! Invariants: Malformed JSON syntax is a `Parse` error; wrong-shaped fields decode to `None`.
//! Invariants: `//` and `/* */` comments are stripped before parsing; string contents are untouched.
//! Notes: Key order of the `paths` table is preserved (serde_json `preserve_order`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};

const TSCONFIG_FILE: &str = "tsconfig.json";

/// Decoded subset of a tsconfig relevant to alias injection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TsConfig {
    pub compiler_options: Option<CompilerOptions>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilerOptions {
    pub base_url: Option<String>,
    pub paths: Option<Map<String, Value>>,
}

impl TsConfig {
    fn from_value(value: &Value) -> Self {
        let compiler_options =
            value
                .get("compilerOptions")
                .and_then(Value::as_object)
                .map(|options| CompilerOptions {
                    base_url: options
                        .get("baseUrl")
                        .and_then(Value::as_str)
                        .map(str::to_owned),
                    paths: options.get("paths").and_then(Value::as_object).cloned(),
                });
        Self { compiler_options }
    }
}

/// Expected configuration file location under a project root.
pub fn tsconfig_path(root: &Path) -> PathBuf {
    root.join(TSCONFIG_FILE)
}

/// Read and decode `<root>/tsconfig.json`.
pub fn load(root: &Path) -> Result<TsConfig, Error> {
    let path = tsconfig_path(root);
    if !path.exists() {
        return Err(Error::new(ErrorKind::NotFound)
            .with_message("tsconfig.json not found under the configured root")
            .with_path(&path));
    }
    let text = fs::read_to_string(&path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read tsconfig.json")
            .with_path(&path)
            .with_source(err)
    })?;
    decode(&text).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message("tsconfig.json is not valid JSON")
            .with_path(&path)
            .with_source(err)
    })
}

pub(crate) fn decode(text: &str) -> Result<TsConfig, serde_json::Error> {
    let value: Value = serde_json::from_str(&strip_jsonc_comments(text))?;
    Ok(TsConfig::from_value(&value))
}

// tsconfig.json is JSONC in the wild; strip comments while leaving string
// literals (including escapes) intact.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                while let Some(c) = chars.next() {
                    out.push(c);
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    while let Some(c) = chars.next() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                }
                _ => out.push('/'),
            },
            other => out.push(other),
        }
    }
    out
}
