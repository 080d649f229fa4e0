//! datadir CLI entry point
//!
//! Parses arguments, runs the selected command against the data directory and
//! renders failures with [`user_friendly_error`].

use clap::Parser;
use datadir::cli;
use datadir::core::error::user_friendly_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            user_friendly_error(e).display();
            ExitCode::FAILURE
        }
    }
}
