//! Cell construction and the per-row cell cache.

use std::ops::Range;

use crate::column::{Content, Icon};
use crate::descriptor::ColumnDescriptor;
use crate::error::{ResolveError, TableError};
use crate::handler::{CellEvent, EventHandlers};
use crate::interactivity::Interactive;
use crate::sizing::SizingDirective;
use crate::types::{Align, CellIndex, RowPosition};

/// A fully resolved cell, ready to become an element.
#[derive(Debug, Clone)]
pub struct CellDescriptor {
    pub index: CellIndex,
    pub class_name: String,
    pub content: Content,
    pub icons: Vec<Icon>,
    pub tooltip: Option<String>,
    pub sizing: SizingDirective,
    pub align: Align,
    pub hide_right_border: bool,
    pub handlers: EventHandlers<CellEvent>,
}

impl CellDescriptor {
    /// Resolve every dynamic field of `column` for the cell at `index`.
    pub fn build(column: &ColumnDescriptor, index: CellIndex) -> Result<Self, TableError> {
        let field_error = |field: &'static str| {
            move |source: ResolveError| TableError::Resolve {
                row: index.row,
                column: index.column,
                field,
                source,
            }
        };

        let class_name = column
            .class_name
            .resolve(index)
            .map_err(field_error("class name"))?;
        let content = column
            .content
            .resolve(index)
            .map_err(field_error("content"))?;
        let icons = column.icons.resolve(index).map_err(field_error("icons"))?;
        let tooltip = column
            .tooltip
            .as_ref()
            .map(|tooltip| tooltip.resolve(index))
            .transpose()
            .map_err(field_error("tooltip"))?;

        Ok(Self {
            index,
            class_name,
            content,
            icons,
            tooltip,
            sizing: column.sizing,
            align: column.align,
            hide_right_border: column.hide_right_border,
            handlers: column.handlers.clone(),
        })
    }

    /// Stable element id for this cell.
    pub fn key(&self) -> String {
        match self.index.row {
            RowPosition::Header => format!("cell-h-{}", self.index.column),
            RowPosition::Body(row) => format!("cell-{}-{}", row, self.index.column),
        }
    }
}

impl Interactive for CellDescriptor {
    type Event = CellEvent;

    fn handlers(&self) -> &EventHandlers<CellEvent> {
        &self.handlers
    }
}

/// The cells of one row, indexed densely by column position.
///
/// The cache is only ever rebuilt as a whole. A failed rebuild keeps the
/// previous cells but marks the row stale until a rebuild succeeds.
#[derive(Debug, Default)]
pub struct RowCells {
    cells: Vec<CellDescriptor>,
    row: Option<RowPosition>,
    stale: bool,
}

impl RowCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild every cell of `row` from `columns`, left to right.
    pub fn refresh(
        &mut self,
        row: RowPosition,
        columns: &[ColumnDescriptor],
    ) -> Result<(), TableError> {
        log::trace!("[table] refreshing {} cells of row {}", columns.len(), row);

        let built = columns
            .iter()
            .enumerate()
            .map(|(column, descriptor)| {
                CellDescriptor::build(descriptor, CellIndex::new(row, column))
            })
            .collect::<Result<Vec<_>, _>>();

        match built {
            Ok(cells) => {
                self.cells = cells;
                self.row = Some(row);
                self.stale = false;
                Ok(())
            }
            Err(err) => {
                log::warn!("[table] row {} left stale: {}", row, err);
                self.stale = true;
                Err(err)
            }
        }
    }

    /// Row the cells were last successfully built for.
    pub fn row(&self) -> Option<RowPosition> {
        self.row
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Keep the current cells but flag them as out of date.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn get(&self, column: usize) -> Option<&CellDescriptor> {
        self.cells.get(column)
    }

    pub fn cells(&self) -> &[CellDescriptor] {
        &self.cells
    }

    /// Column positions present in the cache, always `0..len`.
    pub fn keys(&self) -> Range<usize> {
        0..self.cells.len()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellDescriptor> {
        self.cells.iter()
    }
}
