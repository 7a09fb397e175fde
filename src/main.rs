use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    check::{check, Problem},
    datasets::Dataset,
    emit::emit,
};

mod check;
mod datasets;
mod emit;

#[derive(Debug, Parser)]
#[command(about = "Writes company lists as CSV files ready for Google My Maps import")]
struct Cli {
    /// Directory the CSV files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Write the CSV files (default: every list)
    Emit {
        #[arg(value_enum)]
        datasets: Vec<Dataset>,
    },
    /// Report data-quality problems in the lists
    Check,
    /// Print each list with its output file and row count
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Emit {
        datasets: Vec::new(),
    });

    match command {
        Command::Emit { mut datasets } => {
            if datasets.is_empty() {
                datasets = Dataset::all();
            }
            datasets.sort();
            datasets.dedup();
            emit_all(&datasets, &cli.out_dir)?;
        }
        Command::Check => {
            report_problems(Dataset::all().into_iter().map(|x| (x, check(x))))?;
        }
        Command::List => {
            list(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn report_problems(results: impl IntoIterator<Item = (Dataset, Vec<Problem>)>) -> Result<()> {
    let mut total = 0;
    for (dataset, problems) in results {
        for problem in &problems {
            warn!("{dataset}: {problem}");
        }
        if problems.is_empty() {
            info!("{dataset}: {} rows ok", dataset.records().len());
        }
        total += problems.len();
    }

    if total > 0 {
        bail!("found {total} problems");
    }

    Ok(())
}

fn list(out: &mut impl Write) -> Result<()> {
    for dataset in Dataset::all() {
        writeln!(
            out,
            "{dataset}\t{}\t{} rows",
            dataset.file_name(),
            dataset.records().len()
        )?;
    }
    Ok(())
}

/// Attempts every file even if an earlier one fails, then reports all the
/// paths that could not be written.
fn emit_all(datasets: &[Dataset], out_dir: &Path) -> Result<()> {
    let mut failed = Vec::new();
    for dataset in datasets {
        let path = out_dir.join(dataset.file_name());
        let records = dataset.records();
        match emit(records, &path) {
            Ok(()) => info!("Wrote {} ({} rows)", path.display(), records.len()),
            Err(e) => {
                error!("{dataset}: {:#}", anyhow::Error::from(e));
                failed.push(path);
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "could not write {}",
            failed.iter().map(|x| x.display()).join(", ")
        );
    }

    Ok(())
}
