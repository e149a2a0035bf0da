//! Table layouts loaded from JSON.
//!
//! A layout declares the column structure and options; body content is
//! attached in code afterwards since it depends on the caller's data.
//!
//! ```json
//! {
//!   "options": { "row_height": 1, "header_class_name": "bold" },
//!   "children": [
//!     { "type": "column", "id": "name", "width": 20, "width_kind": "px",
//!       "header": "Name", "sort_key": "name" },
//!     { "type": "column", "id": "notes", "width": 1, "width_kind": "flex-ratio",
//!       "header": "Notes", "align": "right" }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::column::ColumnSpec;
use crate::error::TableError;
use crate::table::TableOptions;
use crate::types::{Align, WidthKind};

const COLUMN_TYPE: &str = "column";

#[derive(Debug, Clone, Deserialize)]
pub struct TableLayout {
    #[serde(default)]
    pub options: TableOptions,
    pub children: Vec<LayoutChild>,
}

/// One declared child. Only `"type": "column"` is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutChild {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub width: Option<u16>,
    pub width_kind: Option<String>,
    pub header: Option<String>,
    pub class_name: Option<String>,
    pub sort_key: Option<String>,
    pub tooltip: Option<String>,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub hide_right_border: bool,
}

impl TableLayout {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the children and turn them into column specs, in order.
    pub fn columns(&self) -> Result<Vec<ColumnSpec>, TableError> {
        self.children
            .iter()
            .enumerate()
            .map(|(index, child)| child.to_column(index))
            .collect()
    }
}

impl LayoutChild {
    fn to_column(&self, index: usize) -> Result<ColumnSpec, TableError> {
        if self.kind != COLUMN_TYPE {
            return Err(TableError::NotAColumn {
                index,
                kind: self.kind.clone(),
            });
        }

        let missing = |field| TableError::MissingField { index, field };
        let id = self.id.clone().ok_or_else(|| missing("id"))?;
        let width = self.width.ok_or_else(|| missing("width"))?;
        let width_kind: WidthKind = self
            .width_kind
            .as_deref()
            .ok_or_else(|| missing("width_kind"))?
            .parse()?;

        let mut column = ColumnSpec::new(id, width, width_kind).align(self.align);
        if let Some(header) = &self.header {
            column = column.header(header.as_str());
        }
        if let Some(class_name) = &self.class_name {
            column = column.class_name(class_name.as_str());
        }
        if let Some(key) = &self.sort_key {
            column = column.sort_key(key.as_str());
        }
        if let Some(tooltip) = &self.tooltip {
            column = column.tooltip(tooltip.as_str());
        }
        if self.hide_right_border {
            column = column.hide_right_border();
        }
        Ok(column)
    }
}
