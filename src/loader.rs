//! Loads the documentation JSON from a file or stdin.
//!
//! Accepted shapes:
//!
//! - `{ "src/draw/shapes.typ": [ {record}, ... ], ... }`
//! - `[ { "src/draw/shapes.typ": [...] } ]` (only the first element is used)

use crate::model::{Docs, FunctionRecord, SourceFile};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the documentation set from `path`, or from stdin when `None`.
pub fn load(path: Option<&Path>) -> Result<Docs> {
    match path {
        Some(path) => {
            if !path.is_file() {
                bail!("{} not found", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse(&content).with_context(|| format!("failed to parse {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            parse(&input).context("please provide docs.json as argument or via stdin")
        }
    }
}

/// Parse a documentation JSON document.
pub fn parse(input: &str) -> Result<Docs> {
    let value: Value = serde_json::from_str(input).context("invalid JSON")?;

    let value = match value {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => first,
            None => return Ok(Docs::default()),
        },
        other => other,
    };

    let Value::Object(map) = value else {
        bail!("expected an object mapping source files to function lists");
    };

    let mut files = Vec::with_capacity(map.len());
    for (path, functions) in map {
        let Value::Array(records) = functions else {
            bail!("expected a list of functions for {}", path);
        };
        let functions = parse_records(&path, records);
        files.push(SourceFile { path, functions });
    }
    Ok(Docs { files })
}

/// Deserialize each record on its own; malformed ones are logged and skipped.
fn parse_records(path: &str, records: Vec<Value>) -> Vec<FunctionRecord> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value::<FunctionRecord>(record) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("skipping malformed function #{} in {}: {}", i, path, e);
                None
            }
        })
        .collect()
}
