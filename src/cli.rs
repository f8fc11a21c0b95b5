//! Command-line interface for the Shotel checker.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use shotel::types::CheckOptions;

#[derive(Debug, Parser)]
#[command(name = "shotel")]
#[command(about = "Parse and type check Shotel programs", long_about = None)]
pub struct Cli {
    /// Token record file (`-` for stdin), or a source file when `--scanner` is given
    pub input: PathBuf,

    /// External scanner executable, run as `<PATH> <INPUT>`
    #[arg(long, value_name = "PATH")]
    pub scanner: Option<PathBuf>,

    /// Reject types that would contain themselves
    #[arg(long)]
    pub occurs_check: bool,

    /// Keep checking after a definition fails and report every error
    #[arg(long)]
    pub keep_going: bool,

    /// Print the parsed program before checking it
    #[arg(long)]
    pub print_ast: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            occurs_check: self.occurs_check,
            keep_going: self.keep_going,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.scanner.is_none() && self.input.as_os_str() == "-"
    }
}
