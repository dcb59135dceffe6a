use indexmap::IndexMap;
use tracing::debug;

use super::config::Policy;
use super::matcher::Classification;
use crate::license::PackageLicense;

/// Outcome of judging a resolved dependency set against a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    /// Occurrences per license, in first-seen order
    pub license_counts: IndexMap<String, usize>,
    /// Packages neither whitelisted nor excepted, in resolution order
    pub violations: Vec<PackageLicense>,
}

impl ComplianceReport {
    pub fn total_packages(&self) -> usize {
        self.license_counts.values().sum()
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

impl Policy {
    /// Count licenses and collect violations over the complete resolved set.
    pub fn evaluate(&self, packages: &[PackageLicense]) -> ComplianceReport {
        let mut license_counts: IndexMap<String, usize> = IndexMap::new();
        let mut violations = Vec::new();

        for package in packages {
            *license_counts.entry(package.license.clone()).or_insert(0) += 1;

            match self.classify(package) {
                Classification::Whitelisted => {}
                Classification::Excepted => {
                    debug!(
                        package = %package.package,
                        license = %package.license,
                        "covered by exception"
                    );
                }
                Classification::Violation => violations.push(package.clone()),
            }
        }

        ComplianceReport {
            license_counts,
            violations,
        }
    }
}
