//! Cross-platform utilities and helpers
//!
//! - [`paths`] - Logical path normalization, base-directory containment checks,
//!   and forward-slash normalization for platform-independent path strings

pub mod paths;

pub use paths::{escapes_base, normalize_path, normalize_path_for_storage};
