pub mod checker;
pub mod config;
pub mod matcher;

// Re-export main types
pub use checker::ComplianceReport;
pub use config::{Policy, DEFAULT_POLICY_FILE};
pub use matcher::Classification;
