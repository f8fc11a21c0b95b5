//! Shotel checker CLI entry point.

mod cli;

use std::io::Read;
use std::process::Command;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use cli::Cli;
use shotel::parser::parse_tokens;
use shotel::token::decode_records;
use shotel::types::Checker;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let records = read_records(&cli)?;
    let tokens = decode_records(&records).context("failed to decode token records")?;
    debug!(tokens = tokens.len(), "decoded token records");

    let mut program = parse_tokens(tokens).map_err(|err| anyhow!("{}: {err}", err.kind()))?;
    info!(definitions = program.len(), "parsed program");

    if cli.print_ast {
        println!("{program}");
        println!();
    }

    let mut checker = Checker::new(cli.options());
    if let Err(errors) = checker.check(&mut program) {
        for error in &errors {
            eprintln!("{}: {error}", error.kind());
        }
        bail!("type checking failed with {} error(s)", errors.len());
    }

    for signature in checker.signatures(&program) {
        println!("{signature}");
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Token records from stdin, a record file, or the scanner's stdout.
fn read_records(cli: &Cli) -> anyhow::Result<String> {
    if let Some(scanner) = &cli.scanner {
        debug!(scanner = %scanner.display(), input = %cli.input.display(), "running scanner");
        let output = Command::new(scanner)
            .arg(&cli.input)
            .output()
            .with_context(|| format!("failed to run scanner {}", scanner.display()))?;

        if !output.status.success() {
            bail!(
                "scanner {} exited with {}: {}",
                scanner.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        return String::from_utf8(output.stdout).context("scanner output is not valid UTF-8");
    }

    if cli.reads_stdin() {
        let mut records = String::new();
        std::io::stdin()
            .read_to_string(&mut records)
            .context("failed to read token records from stdin")?;
        return Ok(records);
    }

    std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))
}
