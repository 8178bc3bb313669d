//! The `check` subcommand: validate a register file before use.

use std::path::Path;

use fundlens_core::contributions::{load_contributions, LoadError};

pub fn run(file: &Path) -> anyhow::Result<()> {
    match load_contributions(file) {
        Ok(table) => {
            println!(
                "{}: {} contribution rows from {} shareholders.",
                file.display(),
                table.len(),
                table.shareholder_count()
            );
            Ok(())
        }
        Err(err) => {
            print_guidance(&err);
            Err(err.into())
        }
    }
}

fn print_guidance(err: &LoadError) {
    match err {
        LoadError::NotFound(path) => {
            eprintln!("Register file '{path}' was not found.");
            eprintln!("Place the data file next to the application or pass --file.");
        }
        LoadError::Empty => {
            eprintln!("The register file has no data rows.");
        }
        LoadError::InsufficientColumns { found } => {
            eprintln!("The register file has {found} columns; at least 9 are required.");
        }
        LoadError::NoValidRows => {
            eprintln!("No primary transaction rows were found.");
            eprintln!("Rows need a date, an amount, and both shareholder identity cells.");
        }
        _ => {}
    }
}
