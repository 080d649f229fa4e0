//! Line-oriented text files.

use super::DataDirectory;
use crate::core::file_error::{FileOperation, FileOperationContext};
use crate::core::{DataDirError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// How [`DataDirectory::write_text`] treats an existing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate, or create if missing (`"w"`)
    #[default]
    Overwrite,
    /// Append, or create if missing (`"a"`)
    Append,
}

impl FromStr for WriteMode {
    type Err = DataDirError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" | "overwrite" => Ok(Self::Overwrite),
            "a" | "append" => Ok(Self::Append),
            other => Err(DataDirError::invalid_argument(format!(
                "unknown write mode '{other}', expected 'w' or 'a'"
            ))),
        }
    }
}

/// Content for [`DataDirectory::write_text`]: one string, or a sequence
/// written back-to-back.
///
/// No separator is inserted between sequence items; callers supply their own
/// line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    Text(String),
    Lines(Vec<String>),
}

impl TextContent {
    fn chunks(&self) -> impl Iterator<Item = &str> {
        let (single, many) = match self {
            Self::Text(text) => (Some(text.as_str()), &[][..]),
            Self::Lines(lines) => (None, lines.as_slice()),
        };
        single.into_iter().chain(many.iter().map(String::as_str))
    }
}

impl From<&str> for TextContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for TextContent {
    fn from(value: Vec<String>) -> Self {
        Self::Lines(value)
    }
}

impl From<&[&str]> for TextContent {
    fn from(value: &[&str]) -> Self {
        Self::Lines(value.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextContent {
    fn from(value: [&str; N]) -> Self {
        Self::Lines(value.iter().map(ToString::to_string).collect())
    }
}

impl DataDirectory {
    /// Read a text file and split it into lines.
    ///
    /// Line terminators (`\n`, `\r\n` or a lone `\r`) are stripped. An empty
    /// file yields no lines and a trailing terminator does not produce an
    /// extra empty line.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::NotFound`] if the file does not exist.
    pub fn read_lines(&self, relative: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = self.resolve(relative)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            DataDirError::from_io(
                e,
                FileOperationContext::new(
                    FileOperation::Read,
                    &path,
                    "reading text file",
                    "DataDirectory::read_lines",
                ),
            )
        })?;
        Ok(split_lines(&content))
    }

    /// Write text to a file, truncating or appending per `mode`.
    ///
    /// The file is created if missing; its parent directory is not.
    ///
    /// # Errors
    ///
    /// Returns [`DataDirError::NotFound`] if the parent directory does not exist.
    pub fn write_text(
        &self,
        relative: impl AsRef<Path>,
        content: impl Into<TextContent>,
        mode: WriteMode,
    ) -> Result<()> {
        let path = self.resolve(relative)?;
        let content = content.into();
        let context = || {
            FileOperationContext::new(
                FileOperation::Write,
                &path,
                "writing text file",
                "DataDirectory::write_text",
            )
        };

        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let mut file =
            options.create(true).open(&path).map_err(|e| DataDirError::from_io(e, context()))?;

        for chunk in content.chunks() {
            file.write_all(chunk.as_bytes()).map_err(|e| DataDirError::from_io(e, context()))?;
        }

        tracing::debug!(target: "datadir", "Wrote text to {} ({mode:?})", path.display());
        Ok(())
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, dropping the terminators.
fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}
