use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tally_importer::{DomainEntry, Importer, ImporterConfig};

#[derive(Parser)]
#[command(name = "domain-tally")]
#[command(about = "Tally email domains from a customer CSV file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the customer CSV file
    file: PathBuf,

    /// Number of parallel extractor workers (0 = default)
    #[arg(short, long, default_value_t = 0)]
    concurrency: usize,

    /// Read window size in bytes (0 = default)
    #[arg(long, default_value_t = 0)]
    chunk_size: usize,

    /// Expected number of fields per record
    #[arg(long, default_value_t = 5)]
    fields: usize,

    /// 0-indexed position of the email field
    #[arg(long, default_value_t = 2)]
    email_field: usize,

    /// Emit the table as JSON instead of domain,count lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    // stdout is reserved for the table
    builder.target(env_logger::Target::Stderr).init();
}

fn print_entries(entries: &[DomainEntry], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, entries)?;
        writeln!(out)?;
    } else {
        for entry in entries {
            writeln!(out, "{},{}", entry.domain, entry.occurrences)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = ImporterConfig {
        concurrency: cli.concurrency,
        chunk_size: cli.chunk_size,
        expected_fields: cli.fields,
        email_field: cli.email_field,
    };
    let mut importer = Importer::with_config(config).context("invalid options")?;
    log::debug!("importing with configuration: {:?}", importer.config());
    let entries = importer
        .import(&cli.file)
        .with_context(|| format!("failed to import {}", cli.file.display()))?;

    print_entries(&entries, cli.json)?;
    Ok(())
}
