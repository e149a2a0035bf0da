use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::TableError;

/// How a column's declared width is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthKind {
    /// Absolute width in terminal cells.
    Pixels,
    /// Share of the space left after fixed columns.
    FlexRatio,
}

impl WidthKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthKind::Pixels => "px",
            WidthKind::FlexRatio => "flex-ratio",
        }
    }
}

impl FromStr for WidthKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "px" => Ok(WidthKind::Pixels),
            "flex-ratio" => Ok(WidthKind::FlexRatio),
            other => Err(TableError::InvalidWidthKind(other.to_string())),
        }
    }
}

impl fmt::Display for WidthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction. Handy for callers cycling sort on repeated clicks.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Main-axis size of an element, as consumed by a flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Auto,
    Fill,
    Fixed(u16),
    Flex(u16),
}

/// Which row of the table something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowPosition {
    Header,
    Body(usize),
}

impl RowPosition {
    /// Index into the body, `None` for the header row.
    pub fn body_index(&self) -> Option<usize> {
        match self {
            RowPosition::Header => None,
            RowPosition::Body(index) => Some(*index),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, RowPosition::Header)
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowPosition::Header => f.write_str("header"),
            RowPosition::Body(index) => write!(f, "{index}"),
        }
    }
}

/// Address of a single cell, passed to every computed cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: RowPosition,
    pub column: usize,
}

impl CellIndex {
    pub const fn new(row: RowPosition, column: usize) -> Self {
        Self { row, column }
    }

    pub const fn body(row: usize, column: usize) -> Self {
        Self::new(RowPosition::Body(row), column)
    }

    pub const fn header(column: usize) -> Self {
        Self::new(RowPosition::Header, column)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Opaque identifier a column is sortable by.
///
/// Keys are compared by exact string equality, no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey(Arc<str>);

impl SortKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_kind_parse() {
        assert_eq!("px".parse::<WidthKind>().unwrap(), WidthKind::Pixels);
        assert_eq!(
            "flex-ratio".parse::<WidthKind>().unwrap(),
            WidthKind::FlexRatio
        );
        assert!(matches!(
            "percent".parse::<WidthKind>(),
            Err(TableError::InvalidWidthKind(kind)) if kind == "percent"
        ));
    }

    #[test]
    fn test_sort_key_exact_equality() {
        assert_eq!(SortKey::from("name"), SortKey::new("name"));
        assert_ne!(SortKey::from("name"), SortKey::from("Name"));
        assert_ne!(SortKey::from("name"), SortKey::from("name "));
    }

    #[test]
    fn test_row_position_body_index() {
        assert_eq!(RowPosition::Header.body_index(), None);
        assert_eq!(RowPosition::Body(4).body_index(), Some(4));
        assert_eq!(CellIndex::body(2, 1).to_string(), "(2, 1)");
        assert_eq!(CellIndex::header(0).to_string(), "(header, 0)");
    }
}
