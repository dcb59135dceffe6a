use std::path::Path;
use tracing::debug;

use super::{PackageLicense, NO_LICENSE};
use crate::package_json::{read_declared_license, MANIFEST_FILE};

/// Resolve the declared license of one installed package.
///
/// Never fails: a missing manifest, a parse error or an absent `license`
/// field all produce [`NO_LICENSE`].
pub fn resolve_license(modules_root: &Path, package: &str) -> PackageLicense {
    let manifest_path = modules_root.join(package).join(MANIFEST_FILE);

    let license = match read_declared_license(&manifest_path) {
        Ok(Some(license)) => license,
        Ok(None) => {
            debug!(package, "manifest declares no license");
            NO_LICENSE.to_string()
        }
        Err(e) => {
            debug!(package, path = %manifest_path.display(), error = %e, "manifest unreadable");
            NO_LICENSE.to_string()
        }
    };

    PackageLicense::new(package, license)
}
