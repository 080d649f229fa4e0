//! Path utilities for normalization and containment checks.
//!
//! Relative paths handed to a [`DataDirectory`](crate::data_dir::DataDirectory)
//! are normalized logically (no filesystem access) and can be checked for
//! escapes out of the base directory.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// This function performs logical path resolution without accessing the
/// filesystem. It does not resolve symbolic links or verify that the path
/// exists. A `..` that would climb above the start of a relative path is kept,
/// so escapes stay detectable by [`escapes_base`].
///
/// # Examples
///
/// ```rust
/// use datadir::utils::paths::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Returns `true` when joining `relative` onto a base directory would leave it.
///
/// Absolute paths (and, on Windows, paths with a drive prefix) always escape,
/// since [`Path::join`] discards the base for them. Relative paths escape when
/// their normalized form starts with `..`.
///
/// # Examples
///
/// ```rust
/// use datadir::utils::paths::escapes_base;
/// use std::path::Path;
///
/// assert!(!escapes_base(Path::new("reports/2024/q1.csv")));
/// assert!(!escapes_base(Path::new("a/../b.txt")));
/// assert!(escapes_base(Path::new("../../etc/passwd")));
/// assert!(escapes_base(Path::new("/etc/passwd")));
/// ```
#[must_use]
pub fn escapes_base(relative: &Path) -> bool {
    if relative.has_root() || relative.is_absolute() {
        return true;
    }
    matches!(normalize_path(relative).components().next(), Some(Component::ParentDir | Component::Prefix(_)))
}

/// Normalizes a path for platform-independent comparison and storage by
/// converting all separators to forward slashes.
///
/// Windows extended-length prefixes (`\\?\`) are stripped first.
///
/// # Examples
///
/// ```rust
/// use datadir::utils::paths::normalize_path_for_storage;
/// use std::path::Path;
///
/// assert_eq!(normalize_path_for_storage(Path::new("a\\b\\c.txt")), "a/b/c.txt");
/// assert_eq!(normalize_path_for_storage(Path::new("a/b/c.txt")), "a/b/c.txt");
/// ```
#[must_use]
pub fn normalize_path_for_storage<P: AsRef<Path>>(path: P) -> String {
    let path_str = path.as_ref().to_string_lossy();

    let cleaned = if let Some(stripped) = path_str.strip_prefix(r"\\?\UNC\") {
        format!("//{stripped}")
    } else if let Some(stripped) = path_str.strip_prefix(r"\\?\") {
        stripped.to_string()
    } else {
        path_str.to_string()
    };

    cleaned.replace('\\', "/")
}
