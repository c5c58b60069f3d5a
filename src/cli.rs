use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "provcheck")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Inventory generation and remote health report for a provisioned host", long_about = None)]
pub struct Cli {
    /// Project root holding terraform/, ansible/ and reports/
    #[arg(long, global = true, env = "PROVCHECK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Inventory file (default: <root>/ansible/inventory/generated.ini)
    #[arg(long, global = true, env = "PROVCHECK_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Report file (default: <root>/reports/report.json)
    #[arg(long, global = true, env = "PROVCHECK_REPORT")]
    pub report: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the inventory file from infrastructure outputs
    Inventory {
        /// Read outputs JSON from a file ('-' for stdin) instead of running terraform
        #[arg(long)]
        outputs: Option<PathBuf>,

        /// Terraform working directory (default: <root>/terraform)
        #[arg(long)]
        terraform_dir: Option<PathBuf>,
    },

    /// Run the remote checks and write the report
    Report {
        /// Number of checks run concurrently
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Per-check timeout in seconds (0 disables)
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        /// ssh ConnectTimeout in seconds
        #[arg(long)]
        connect_timeout: Option<u64>,

        /// ssh client to invoke
        #[arg(long, default_value = "ssh")]
        ssh_program: String,

        /// Output format (json or text)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}
