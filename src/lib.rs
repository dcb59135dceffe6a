pub mod audit;
pub mod config;
pub mod dependencies;
pub mod error;
pub mod license;
pub mod output;
pub mod package_json;
pub mod policy;

// Re-export main types for easy access
pub use audit::audit;
pub use config::AuditConfig;
pub use dependencies::DependencyMode;
pub use error::AuditError;
pub use license::{PackageLicense, NO_LICENSE};
pub use output::{AuditOutcome, ReportFormat};
pub use policy::{ComplianceReport, Policy};
