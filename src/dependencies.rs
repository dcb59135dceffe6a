use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{AuditError, Result};
use crate::package_json::{PackageJson, MANIFEST_FILE};

pub const MODULES_DIR: &str = "node_modules";

const HIDDEN_MARKER: char = '.';
const SCOPE_MARKER: char = '@';

/// Which packages get audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyMode {
    /// Only what the project manifest declares
    Shallow { include_dev: bool },
    /// Everything physically installed under `node_modules`, transitive
    /// dependencies and scoped packages included
    Deep,
}

/// Produce the package names to audit for `project_dir`.
///
/// Every mode needs a readable `package.json` and fails otherwise, even deep
/// mode which then ignores its declarations. A missing `node_modules` in deep
/// mode simply yields nothing.
pub fn enumerate_packages(project_dir: &Path, mode: DependencyMode) -> Result<Vec<String>> {
    let manifest = read_manifest(project_dir)?;

    let packages = match mode {
        DependencyMode::Shallow { include_dev } => {
            let mut packages = manifest.production_names();
            if include_dev {
                packages.extend(manifest.development_names());
            }
            packages
        }
        DependencyMode::Deep => installed_packages(&project_dir.join(MODULES_DIR)),
    };

    info!(?mode, count = packages.len(), "enumerated packages");
    Ok(packages)
}

pub fn read_manifest(project_dir: &Path) -> Result<PackageJson> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    PackageJson::read(&manifest_path).map_err(|source| AuditError::ManifestRead {
        path: manifest_path.clone(),
        source,
    })
}

/// Walk an installed-packages root.
///
/// Unscoped names come first, then every `@scope` directory expanded into
/// `@scope/name` entries. Hidden entries (`.bin`, `.package-lock.json`) are
/// skipped at both levels.
pub fn installed_packages(modules_root: &Path) -> Vec<String> {
    let mut unscoped = Vec::new();
    let mut scopes = Vec::new();

    for entry in list_entries(modules_root) {
        if entry.starts_with(HIDDEN_MARKER) {
            continue;
        }
        if entry.starts_with(SCOPE_MARKER) {
            scopes.push(entry);
        } else {
            unscoped.push(entry);
        }
    }

    let mut packages = unscoped;
    for scope in scopes {
        let members = list_entries(&modules_root.join(&scope));
        packages.extend(
            members
                .into_iter()
                .filter(|name| !name.starts_with(HIDDEN_MARKER))
                .map(|name| format!("{}/{}", scope, name)),
        );
    }
    packages
}

/// Immediate entries of `dir`, sorted. Absent or unreadable directories are
/// treated as empty.
pub fn list_entries(dir: &Path) -> Vec<String> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "directory not listable, treating as empty");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
