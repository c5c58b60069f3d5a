pub mod outputs;
pub mod reader;
pub mod writer;

use std::path::PathBuf;
use crate::config::Paths;
use crate::utils::Result;
use outputs::{JsonFile, OutputSource, TerraformCli};
use writer::InventoryWriter;

/// Stage 1: infrastructure outputs → inventory file.
pub fn run_inventory(paths: &Paths, outputs_file: Option<PathBuf>) -> Result<()> {
    let source: Box<dyn OutputSource> = match outputs_file {
        Some(path) => Box::new(JsonFile { path }),
        None => Box::new(TerraformCli { dir: paths.terraform_dir.clone() }),
    };

    eprintln!("Reading infrastructure outputs...");
    let outputs = source.fetch()?;

    let writer = InventoryWriter::new(&paths.inventory);
    let record = writer.generate(&outputs)?;

    println!("Wrote inventory: {}", writer.path().display());
    print!("{}", writer::render(&record));
    Ok(())
}
