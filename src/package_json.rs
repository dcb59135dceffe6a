use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::ReadFailure;

pub const MANIFEST_FILE: &str = "package.json";

/// The parts of a project `package.json` the auditor cares about.
///
/// Dependency names keep their declaration order so shallow-mode output is
/// reproducible and mirrors the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageJson {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl PackageJson {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ReadFailure> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Only a JSON syntax error fails. A dependency table that is missing or
    /// is not an object counts as empty.
    pub fn parse(content: &str) -> Result<Self, ReadFailure> {
        let doc: Value = serde_json::from_str(content)?;
        Ok(Self {
            dependencies: table_keys(&doc, "dependencies"),
            dev_dependencies: table_keys(&doc, "devDependencies"),
        })
    }

    /// Production dependency names in declaration order
    pub fn production_names(&self) -> Vec<String> {
        self.dependencies.clone()
    }

    /// Development dependency names in declaration order
    pub fn development_names(&self) -> Vec<String> {
        self.dev_dependencies.clone()
    }
}

fn table_keys(doc: &Value, field: &str) -> Vec<String> {
    doc.get(field)
        .and_then(Value::as_object)
        .map(|deps| deps.keys().cloned().collect())
        .unwrap_or_default()
}

/// `license` as it may appear in an installed package's manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DeclaredLicense {
    Id(String),
    /// Legacy `{ "type": "MIT", "url": "..." }` form
    Legacy {
        #[serde(rename = "type")]
        kind: String,
    },
    Other(IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct LicenseManifest {
    #[serde(default)]
    license: Option<DeclaredLicense>,
}

/// Read the declared license of an installed package.
///
/// `Ok(None)` means the manifest parsed but declares nothing usable. Other
/// fields are ignored entirely, so a package with an odd `dependencies` table
/// still yields its license.
pub fn read_declared_license<P: AsRef<Path>>(path: P) -> Result<Option<String>, ReadFailure> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_declared_license(&content)
}

pub fn parse_declared_license(content: &str) -> Result<Option<String>, ReadFailure> {
    let manifest: LicenseManifest = serde_json::from_str(content)?;

    let license = match manifest.license {
        Some(DeclaredLicense::Id(id)) => Some(id),
        Some(DeclaredLicense::Legacy { kind }) => Some(kind),
        Some(DeclaredLicense::Other(_)) | None => None,
    };

    Ok(license.filter(|l| !l.is_empty()))
}
