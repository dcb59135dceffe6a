use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use node_license_auditor::license::DEFAULT_JOBS;
use node_license_auditor::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "node-license-auditor")]
#[command(about = "Audit the licenses of npm dependencies against an allow-list")]
#[command(version)]
pub struct Cli {
    /// Audit every installed package, not just declared dependencies
    #[arg(long)]
    pub deep: bool,

    /// Skip devDependencies (ignored with --deep)
    #[arg(long)]
    pub only_prod: bool,

    /// Print license counts only and always exit successfully
    #[arg(long)]
    pub count: bool,

    /// Policy file; ignored unless it ends in .json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root containing package.json and node_modules
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum number of package manifests read concurrently
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_JOBS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub jobs: usize,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
