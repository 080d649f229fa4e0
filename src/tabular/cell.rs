use std::fmt;

/// A single typed value in a [`Table`](super::Table).
///
/// Delimited text carries no type information, so values read from `.csv`
/// and `.txt` files are inferred through [`Cell::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Infer a typed cell from raw delimited text.
    ///
    /// The empty string is [`Cell::Null`]; otherwise integers, floats and
    /// booleans (`true`/`false`, any case) are tried in that order before
    /// falling back to [`Cell::Text`].
    ///
    /// Text is therefore not preserved through delimited files when it reads
    /// like another type: `Text("007")` comes back as `Int(7)` and
    /// `Text("true")` as `Bool(true)`. The spreadsheet and columnar formats
    /// store the cell type and keep such values as text.
    ///
    /// ```rust
    /// use datadir::tabular::Cell;
    ///
    /// assert_eq!(Cell::parse(""), Cell::Null);
    /// assert_eq!(Cell::parse("42"), Cell::Int(42));
    /// assert_eq!(Cell::parse("3.0"), Cell::Float(3.0));
    /// assert_eq!(Cell::parse("True"), Cell::Bool(true));
    /// assert_eq!(Cell::parse("ada"), Cell::Text("ada".into()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Null;
        }
        if let Ok(value) = raw.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = raw.parse::<f64>() {
            return Self::Float(value);
        }
        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        Self::Text(raw.to_string())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Renders the cell the way delimited text stores it.
///
/// Floats always keep a fractional part or exponent (`3.0`, not `3`) so they
/// are not re-inferred as integers.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
