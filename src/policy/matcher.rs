use super::config::Policy;
use crate::license::PackageLicense;

/// How a single resolved package fares against the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Whitelisted,
    Excepted,
    Violation,
}

impl Policy {
    pub fn is_whitelisted(&self, license: &str) -> bool {
        self.whitelist.contains(license)
    }

    /// Exceptions match on both fields: `(foo, GPL-3.0)` does not cover
    /// `(bar, GPL-3.0)`.
    pub fn find_exception(&self, package: &PackageLicense) -> Option<&PackageLicense> {
        self.exceptions.iter().find(|exception| {
            exception.package == package.package && exception.license == package.license
        })
    }

    pub fn classify(&self, package: &PackageLicense) -> Classification {
        if self.is_whitelisted(&package.license) {
            Classification::Whitelisted
        } else if self.find_exception(package).is_some() {
            Classification::Excepted
        } else {
            Classification::Violation
        }
    }
}
