use std::path::{Path, PathBuf};
use tracing::warn;

use crate::dependencies::{DependencyMode, MODULES_DIR};
use crate::license::DEFAULT_JOBS;
use crate::output::ReportFormat;
use crate::policy::DEFAULT_POLICY_FILE;

/// Everything a run needs, fixed before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Project root holding `package.json` and `node_modules`
    pub project_dir: PathBuf,

    /// Policy document to judge against
    pub policy_path: PathBuf,

    pub mode: DependencyMode,

    /// Report counts only; violations never fail the run
    pub count_only: bool,

    pub format: ReportFormat,

    /// Concurrency ceiling for manifest reads
    pub jobs: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let project_dir = PathBuf::from(".");
        Self {
            policy_path: project_dir.join(DEFAULT_POLICY_FILE),
            project_dir,
            mode: DependencyMode::Shallow { include_dev: true },
            count_only: false,
            format: ReportFormat::Text,
            jobs: DEFAULT_JOBS,
        }
    }
}

impl AuditConfig {
    pub fn modules_root(&self) -> PathBuf {
        self.project_dir.join(MODULES_DIR)
    }
}

/// `--deep` wins over `--only-prod`, which only narrows shallow mode.
pub fn resolve_mode(deep: bool, only_prod: bool) -> DependencyMode {
    if deep {
        DependencyMode::Deep
    } else {
        DependencyMode::Shallow { include_dev: !only_prod }
    }
}

/// Pick the policy file: an override is honoured only when it names a
/// `.json` file, otherwise the project's `allowed-licenses.json` is used.
pub fn resolve_policy_path(project_dir: &Path, requested: Option<&Path>) -> PathBuf {
    match requested {
        Some(path) if path.to_string_lossy().ends_with(".json") => path.to_path_buf(),
        Some(path) => {
            warn!(
                path = %path.display(),
                "ignoring --config value that does not end in .json, using {}",
                DEFAULT_POLICY_FILE
            );
            project_dir.join(DEFAULT_POLICY_FILE)
        }
        None => project_dir.join(DEFAULT_POLICY_FILE),
    }
}
