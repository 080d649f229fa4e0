//! Test utilities for datadir
//!
//! Shared helpers for unit and integration tests: one-time logging setup and
//! table fixtures covering every [`Cell`] variant.
//!
//! # Example
//!
//! ```rust,no_run
//! use datadir::test_utils::{init_test_logging, mixed_table};
//!
//! init_test_logging(None);
//! let table = mixed_table();
//! assert_eq!(table.width(), 4);
//! ```

use crate::tabular::{Cell, Table};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set, that level is used;
/// otherwise `RUST_LOG` is honoured, and without it nothing is logged.
///
/// ```bash
/// RUST_LOG=datadir=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Three rows over `id`, `name`, `score`, `active`, with one missing score.
///
/// Every column holds a single cell type so the table survives all tabular
/// formats unchanged.
#[must_use]
pub fn mixed_table() -> Table {
    let rows = [
        [Cell::Int(1), Cell::from("ada"), Cell::Float(91.5), Cell::Bool(true)],
        [Cell::Int(2), Cell::from("grace"), Cell::Null, Cell::Bool(false)],
        [Cell::Int(3), Cell::from("alan, jr."), Cell::Float(78.25), Cell::Bool(true)],
    ];

    Table::new(["id", "name", "score", "active"])
        .with_rows(rows)
        .expect("mixed_table rows match the header width")
}

/// A `rows` x 2 table of `(n, n * 0.5)`.
#[must_use]
pub fn numeric_table(rows: usize) -> Table {
    #[allow(clippy::cast_precision_loss)]
    let rows = (0..rows).map(|n| {
        let n = i64::try_from(n).unwrap_or(i64::MAX);
        [Cell::Int(n), Cell::Float(n as f64 * 0.5)]
    });
    Table::new(["n", "half"]).with_rows(rows).expect("numeric_table rows match the header width")
}
