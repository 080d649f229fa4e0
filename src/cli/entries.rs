//! Directory and file management commands.

use crate::data_dir::DataDirectory;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// List the contents of the data directory.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Emit the tree as JSON instead of one path per line
    #[arg(long)]
    json: bool,
}

impl TreeCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        let tree = dir.enumerate_tree()?;

        if self.json {
            let json = serde_json::to_string_pretty(&tree).context("Failed to serialize tree")?;
            println!("{json}");
            return Ok(());
        }

        let mut entries: Vec<(String, bool)> = tree
            .relative_dirs()
            .into_iter()
            .map(|d| (d, true))
            .chain(tree.relative_files().into_iter().map(|f| (f, false)))
            .collect();
        entries.sort();

        for (path, is_dir) in entries {
            if is_dir {
                println!("{}", format!("{path}/").blue().bold());
            } else {
                println!("{path}");
            }
        }
        Ok(())
    }
}

/// Create a subdirectory.
#[derive(Args, Debug)]
pub struct MkdirCommand {
    /// Path relative to the base directory
    path: PathBuf,

    /// Fail if the directory already exists
    #[arg(long)]
    strict: bool,
}

impl MkdirCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        dir.create_subdir(&self.path, !self.strict)?;
        tracing::info!("Created {}", self.path.display());
        Ok(())
    }
}

/// Check whether a path exists.
#[derive(Args, Debug)]
pub struct ExistsCommand {
    /// Path relative to the base directory
    path: PathBuf,

    /// Only accept a directory
    #[arg(long = "dir", conflicts_with = "only_file")]
    only_dir: bool,

    /// Only accept a regular file
    #[arg(long = "file")]
    only_file: bool,
}

impl ExistsCommand {
    /// Prints `true` or `false` and returns the same answer.
    pub fn execute(self, dir: &DataDirectory) -> bool {
        let exists = if self.only_dir {
            dir.subdir_exists(&self.path)
        } else if self.only_file {
            dir.file_exists(&self.path)
        } else {
            dir.subdir_exists(&self.path) || dir.file_exists(&self.path)
        };
        println!("{exists}");
        exists
    }
}

/// Remove a subdirectory.
#[derive(Args, Debug)]
pub struct RmdirCommand {
    /// Path relative to the base directory
    path: PathBuf,

    /// Remove the directory even if it is not empty
    #[arg(short, long)]
    force: bool,
}

impl RmdirCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        dir.remove_subdir(&self.path, self.force)?;
        tracing::info!("Removed {}", self.path.display());
        Ok(())
    }
}

/// Remove a file.
#[derive(Args, Debug)]
pub struct RmCommand {
    /// Path relative to the base directory
    path: PathBuf,
}

impl RmCommand {
    pub fn execute(self, dir: &DataDirectory) -> Result<()> {
        dir.remove_file(&self.path)?;
        tracing::info!("Removed {}", self.path.display());
        Ok(())
    }
}
