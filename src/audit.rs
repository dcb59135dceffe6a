use crate::config::AuditConfig;
use crate::dependencies::enumerate_packages;
use crate::error::Result;
use crate::license::resolve_licenses;
use crate::policy::{ComplianceReport, Policy};

/// Run the whole pipeline for one project and produce its report.
///
/// The policy and the package list are loaded concurrently. Licenses are
/// then resolved in full before the policy is applied, so counts always
/// cover every package.
pub fn audit(config: &AuditConfig) -> Result<ComplianceReport> {
    let (policy, packages) = rayon::join(
        || Policy::load(&config.policy_path),
        || enumerate_packages(&config.project_dir, config.mode),
    );
    let policy = policy?;
    let packages = packages?;

    let resolved = resolve_licenses(&config.modules_root(), &packages, config.jobs)?;

    Ok(policy.evaluate(&resolved))
}
