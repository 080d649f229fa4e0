//! Integration test suite for datadir
//!
//! These tests drive the public API and the `datadir` binary against real
//! temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **directory**: construction, existence checks, creation and removal
//! - **tree**: recursive enumeration
//! - **text**: line reads, overwrite and append writes
//! - **tabular**: every format, extension dispatch, write options
//! - **objects**: object persistence
//! - **config**: `datadir.toml` handling
//! - **cli**: the `datadir` binary end to end

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod config;
mod directory;
mod objects;
mod tabular;
mod text;
mod tree;
