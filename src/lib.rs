//! datadir - a managed data directory
//!
//! A [`DataDirectory`] is a base directory that owns every path resolved under
//! it. Callers hand it relative paths and it performs filesystem management and
//! content I/O on their behalf:
//!
//! - **Layout**: existence checks, recursive enumeration, subdirectory
//!   creation, directory and file removal
//! - **Text**: whole-file line reads, overwrite and append writes
//! - **Tables**: reads and writes dispatched on the file extension
//!   (`.csv`/`.txt`, `.xlsx`, `.parquet`; none means `.csv`)
//! - **Objects**: any `borsh`-serializable value saved and loaded as bytes
//!
//! Everything is synchronous and stateless beyond the base path, so a
//! [`DataDirectory`] can be cloned and shared across threads.
//!
//! # Core Modules
//!
//! - [`data_dir`] - [`DataDirectory`] and its operations
//! - [`tabular`] - [`Table`], [`Cell`] and the format codecs
//! - [`core`] - [`DataDirError`] and user-facing error reporting
//! - [`config`] - `datadir.toml` loading and saving
//! - [`cli`] - The `datadir` command-line interface
//! - [`utils`] - Path normalization helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use datadir::{Cell, DataDirectory, Table, WriteMode};
//!
//! # fn example() -> datadir::Result<()> {
//! let dir = DataDirectory::new("/tmp/datadir-example")?;
//!
//! dir.create_subdir("runs/1", true)?;
//! dir.write_text("runs/1/log.txt", "started\n", WriteMode::Overwrite)?;
//!
//! let mut metrics = Table::new(["step", "loss"]);
//! metrics.push_row([Cell::Int(0), Cell::Float(0.93)])?;
//! dir.write_table("runs/1/metrics.parquet", &metrics)?;
//!
//! dir.write_object("runs/1/seed.bin", &42_u64)?;
//! let seed: u64 = dir.read_object("runs/1/seed.bin")?;
//! assert_eq!(seed, 42);
//!
//! for file in dir.enumerate_tree()?.relative_files() {
//!     println!("{file}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod data_dir;
pub mod tabular;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::config::DataDirConfig;
pub use crate::core::{DataDirError, Result};
pub use crate::data_dir::{DataDirOptions, DataDirectory, DirectoryTree, TextContent, WriteMode};
pub use crate::tabular::{Cell, Table, TabularFormat, WriteOptions};
