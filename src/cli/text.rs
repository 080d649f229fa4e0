//! Text file commands.

use crate::data_dir::{DataDirectory, WriteMode};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Print a text file line by line.
#[derive(Args, Debug)]
pub struct CatCommand {
    /// Path relative to the base directory
    path: PathBuf,

    /// Prefix each line with its number
    #[arg(short = 'n', long)]
    number: bool,
}

impl CatCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        for (i, line) in dir.read_lines(&self.path)?.iter().enumerate() {
            if self.number {
                println!("{:>6}  {line}", i + 1);
            } else {
                println!("{line}");
            }
        }
        Ok(())
    }
}

/// Write text to a file, one argument per line.
#[derive(Args, Debug)]
pub struct WriteCommand {
    /// Path relative to the base directory
    path: PathBuf,

    /// Lines to write; each gets a trailing newline
    #[arg(required = true)]
    lines: Vec<String>,

    /// `w` to overwrite, `a` to append
    #[arg(short, long, default_value = "w")]
    mode: String,
}

impl WriteCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        let mode: WriteMode = self.mode.parse()?;
        let lines: Vec<String> = self.lines.into_iter().map(|line| line + "\n").collect();
        let count = lines.len();

        dir.write_text(&self.path, lines, mode)?;
        tracing::info!("Wrote {count} line(s) to {}", self.path.display());
        Ok(())
    }
}
