mod check;
mod cli;
mod config;
mod inventory;
mod utils;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Paths;
use utils::ProvcheckError;

fn main() {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        if let Some(ProvcheckError::Interrupted) = e.downcast_ref::<ProvcheckError>() {
            eprintln!("\ninterrupted");
            std::process::exit(utils::interrupt::EXIT_CODE);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = Paths::from_root(cli.root)
        .with_inventory(cli.inventory)
        .with_report(cli.report);
    tracing::debug!(root = %paths.root().display(), "resolved paths");

    match cli.command {
        Commands::Inventory { outputs, terraform_dir } => {
            let paths = paths.with_terraform_dir(terraform_dir);
            inventory::run_inventory(&paths, outputs)?;
        }
        Commands::Report { jobs, timeout, connect_timeout, ssh_program, format } => {
            // 报告只在全部检查完成后写入；写入期间的中断等写完再退出
            utils::interrupt::install().context("installing Ctrl+C handler")?;

            let opts = check::ReportOptions {
                jobs,
                timeout_secs: timeout,
                connect_timeout_secs: connect_timeout,
                ssh_program,
                format,
            };
            check::run_report(&paths, &opts)?;
        }
    }
    Ok(())
}
