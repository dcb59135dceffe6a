use indexmap::IndexSet;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{AuditError, ReadFailure, Result};
use crate::license::PackageLicense;

pub const DEFAULT_POLICY_FILE: &str = "allowed-licenses.json";

/// The allow-list a run is judged against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    /// Licenses acceptable for any package
    pub whitelist: IndexSet<String>,
    /// Exact (package, license) pairs permitted despite the whitelist
    pub exceptions: Vec<PackageLicense>,
}

#[derive(Deserialize)]
struct ExceptionEntry {
    package: String,
    license: String,
}

impl Policy {
    /// Read and validate a policy document.
    ///
    /// The file itself must exist and be valid JSON. Inside it parsing is
    /// permissive: a missing or mistyped field becomes empty, and malformed
    /// exception entries are dropped one by one.
    pub fn load(path: &Path) -> Result<Self> {
        let policy = std::fs::read_to_string(path)
            .map_err(ReadFailure::from)
            .and_then(|content| Self::from_json_str(&content))
            .map_err(|source| AuditError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            whitelist = policy.whitelist.len(),
            exceptions = policy.exceptions.len(),
            "loaded license policy"
        );
        Ok(policy)
    }

    pub fn from_json_str(content: &str) -> std::result::Result<Self, ReadFailure> {
        let doc: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&doc))
    }

    pub fn from_value(doc: &Value) -> Self {
        Self {
            whitelist: whitelist_field(doc),
            exceptions: exceptions_field(doc),
        }
    }
}

fn whitelist_field(doc: &Value) -> IndexSet<String> {
    let Some(entries) = doc.get("whitelist").and_then(Value::as_array) else {
        return IndexSet::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.as_str().map(str::to_string))
        .collect()
}

fn exceptions_field(doc: &Value) -> Vec<PackageLicense> {
    let Some(entries) = doc.get("exceptions").and_then(Value::as_array) else {
        return Vec::new();
    };

    let exceptions: Vec<PackageLicense> = entries.iter().filter_map(exception_entry).collect();

    let dropped = entries.len() - exceptions.len();
    if dropped > 0 {
        debug!(dropped, "ignored malformed exception entries");
    }
    exceptions
}

/// Both fields present, string-typed and non-empty, or the entry is skipped.
fn exception_entry(entry: &Value) -> Option<PackageLicense> {
    let ExceptionEntry { package, license } = ExceptionEntry::deserialize(entry).ok()?;
    if package.is_empty() || license.is_empty() {
        return None;
    }
    Some(PackageLicense { package, license })
}
