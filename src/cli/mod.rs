// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command};

use crate::types::exit_code;
use clap::{CommandFactory, Parser};

/// Parse command-line arguments using clap
///
/// On `--help`/`--version` clap's output is printed and the process exits with
/// 0. Any other parse failure prints clap's message and exits with the usage
/// exit code (64), keeping 2 free for banking session failures.
pub fn parse_args() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Print the usage text to stdout
pub fn print_usage() -> std::io::Result<()> {
    CliArgs::command().print_help()
}
