use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::Result;

pub mod extractor;

pub use extractor::resolve_license;

/// Stands in for a license when a package declares none (or its manifest
/// cannot be read). It is audited like any other license string.
pub const NO_LICENSE: &str = "No license declared";

/// Default ceiling on concurrent manifest reads
pub const DEFAULT_JOBS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageLicense {
    pub package: String,
    pub license: String,
}

impl PackageLicense {
    pub fn new(package: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            license: license.into(),
        }
    }

    pub fn is_undeclared(&self) -> bool {
        self.license == NO_LICENSE
    }
}

/// Resolve every package's license under `modules_root`.
///
/// Reads run on a dedicated pool of `jobs` threads so huge trees cannot
/// exhaust file descriptors. The result is in input order.
pub fn resolve_licenses(
    modules_root: &Path,
    packages: &[String],
    jobs: usize,
) -> Result<Vec<PackageLicense>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .thread_name(|i| format!("license-resolver-{}", i))
        .build()?;

    let resolved: Vec<PackageLicense> = pool.install(|| {
        packages
            .par_iter()
            .map(|package| resolve_license(modules_root, package))
            .collect()
    });

    let undeclared = resolved.iter().filter(|p| p.is_undeclared()).count();
    info!(total = resolved.len(), undeclared, jobs, "resolved licenses");

    Ok(resolved)
}
