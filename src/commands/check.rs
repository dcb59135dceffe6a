use anyhow::{Context, Result};

use crate::cli::Cli;
use node_license_auditor::audit;
use node_license_auditor::config::{resolve_mode, resolve_policy_path, AuditConfig};
use node_license_auditor::output::{determine_outcome, render};
use node_license_auditor::AuditOutcome;

pub fn handle_check(cli: &Cli) -> Result<AuditOutcome> {
    let config = build_config(cli);

    let report = audit(&config).with_context(|| {
        format!("License audit of {} aborted", config.project_dir.display())
    })?;

    let output_content = render(&report, config.format, config.count_only)
        .context("Failed to render license report")?;
    println!("{}", output_content);

    Ok(determine_outcome(&report, config.count_only))
}

fn build_config(cli: &Cli) -> AuditConfig {
    AuditConfig {
        project_dir: cli.project_dir.clone(),
        policy_path: resolve_policy_path(&cli.project_dir, cli.config.as_deref()),
        mode: resolve_mode(cli.deep, cli.only_prod),
        count_only: cli.count,
        format: cli.format.into(),
        jobs: cli.jobs,
    }
}
