pub mod builder;
pub mod catalog;
pub mod output;
pub mod remote;
pub mod report;

use std::time::Duration;
use crate::config::Paths;
use crate::inventory::reader::InventoryReader;
use crate::utils::{interrupt, ProvcheckError, Result};
use builder::ReportBuilder;
use output::OutputFormat;
use remote::{RemoteExecutor, SshExecutor};

pub struct ReportOptions {
    pub jobs: usize,
    pub timeout_secs: u64,
    pub connect_timeout_secs: Option<u64>,
    pub ssh_program: String,
    pub format: String,
}

/// Stage 2: inventory → remote checks → report file.
pub fn run_report(paths: &Paths, opts: &ReportOptions) -> Result<()> {
    let format = OutputFormat::parse(&opts.format)?;
    if opts.jobs == 0 {
        return Err(ProvcheckError::Config("--jobs must be at least 1".to_string()));
    }

    let executor = SshExecutor {
        program: opts.ssh_program.clone(),
        connect_timeout: opts.connect_timeout_secs.map(Duration::from_secs),
        command_timeout: match opts.timeout_secs {
            0 => None,
            n => Some(Duration::from_secs(n)),
        },
    };

    generate_report(paths, &executor, opts.jobs, format)
}

pub fn generate_report<E: RemoteExecutor>(
    paths: &Paths,
    executor: &E,
    jobs: usize,
    format: OutputFormat,
) -> Result<()> {
    eprintln!("Reading inventory...");
    let record = InventoryReader::new(&paths.inventory).read()?;
    let target = record.target();
    tracing::info!(host = %record.host_alias, %target, "inventory loaded");

    let report = ReportBuilder::new(executor).jobs(jobs).build(&target)?;

    interrupt::STATE.critical(|| output::write_report(&paths.report, &report))?;
    output::display(&report, &paths.report, format)
}
