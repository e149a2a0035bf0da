//! Table composition: columns and a row count in, element tree out.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::cell::{CellDescriptor, RowCells};
use crate::column::{ColumnSpec, Content};
use crate::descriptor::{ColumnContext, normalize};
use crate::element::{Element, ElementKind};
use crate::error::TableError;
use crate::handler::{CellEvent, EventHandlers, EventKind, RowEvent};
use crate::header::{SortHandler, SortState, compose_header};
use crate::input::Dispatched;
use crate::interactivity::{Interactive, is_clickable};
use crate::types::{RowPosition, Size, SortKey};
use crate::value::Resolvable;

/// Rows reserved below the header for its top and bottom border.
pub const HEADER_BORDER_THICKNESS: u16 = 2;

/// Table-wide presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Height of every body row, in terminal rows.
    pub row_height: u16,
    /// Height of the header row, excluding its borders.
    pub header_height: u16,
    /// Drop the header (and with it any sort affordance).
    pub disable_header: bool,
    pub class_name: String,
    pub header_class_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            row_height: 1,
            header_height: 1,
            disable_header: false,
            class_name: String::new(),
            header_class_name: String::new(),
        }
    }
}

impl TableOptions {
    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = height;
        self
    }

    pub fn header_height(mut self, height: u16) -> Self {
        self.header_height = height;
        self
    }

    pub fn disable_header(mut self) -> Self {
        self.disable_header = true;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn header_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.header_class_name = class_name.into();
        self
    }
}

/// Declarative table: what to draw, not the data behind it.
///
/// A `Table` is cheap to rebuild every frame. Use [`TableView`] to keep the
/// per-row cell caches between frames, or [`Table::build`] for a one-off tree.
#[derive(Clone)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    row_count: usize,
    options: TableOptions,
    sort: SortState,
    on_sort: SortHandler,
    row_handlers: EventHandlers<RowEvent>,
    row_class_name: Resolvable<String, usize>,
    empty_content: Option<Resolvable<Content, ()>>,
}

impl Table {
    pub fn new(row_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            row_count,
            options: TableOptions::default(),
            sort: SortState::default(),
            on_sort: Arc::new(|_: &SortKey| {}),
            row_handlers: EventHandlers::new(),
            row_class_name: Resolvable::default(),
            empty_content: None,
        }
    }

    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// The caller's current sort. Only read, never updated by the table.
    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Receive sort requests from header clicks.
    pub fn on_sort<F>(mut self, f: F) -> Self
    where
        F: Fn(&SortKey) + Send + Sync + 'static,
    {
        self.on_sort = Arc::new(f);
        self
    }

    /// Attach a row handler for `kind`. Handlers accumulate.
    pub fn on_row<F>(mut self, kind: EventKind, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.row_handlers.on(kind, f);
        self
    }

    pub fn on_row_click<F>(self, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.on_row(EventKind::Click, f)
    }

    pub fn on_row_double_click<F>(self, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.on_row(EventKind::DoubleClick, f)
    }

    pub fn on_row_mouse_over<F>(self, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.on_row(EventKind::MouseOver, f)
    }

    pub fn on_row_mouse_out<F>(self, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.on_row(EventKind::MouseOut, f)
    }

    pub fn on_row_right_click<F>(self, f: F) -> Self
    where
        F: Fn(&RowEvent) + Send + Sync + 'static,
    {
        self.on_row(EventKind::RightClick, f)
    }

    /// Extra class for each body row, literal or computed from the row index.
    pub fn row_class_name(mut self, class_name: impl Into<Resolvable<String, usize>>) -> Self {
        self.row_class_name = class_name.into();
        self
    }

    /// Shown in the body when `row_count` is zero. Computed content is
    /// resolved on every render that shows it.
    pub fn empty_content(mut self, content: impl Into<Resolvable<Content, ()>>) -> Self {
        self.empty_content = Some(content.into());
        self
    }

    pub fn column_specs(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn table_options(&self) -> &TableOptions {
        &self.options
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn row_handlers(&self) -> &EventHandlers<RowEvent> {
        &self.row_handlers
    }

    /// Compose the element tree without keeping any caches.
    pub fn build(&self) -> Result<Element, TableError> {
        TableView::new().render(self)
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("row_count", &self.row_count)
            .field("options", &self.options)
            .field("sort", &self.sort)
            .field("row_handlers", &self.row_handlers)
            .field("row_class_name", &self.row_class_name)
            .field("empty_content", &self.empty_content)
            .finish_non_exhaustive()
    }
}

/// Mounted table: owns one cell cache per row across renders.
///
/// Rows beyond the current row count are dropped together with their cache.
#[derive(Debug, Default)]
pub struct TableView {
    header: RowCells,
    rows: Vec<RowCells>,
    highlighted: HashSet<usize>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the caches from `table` and compose the element tree.
    ///
    /// Every mounted row is refreshed even when an earlier one fails. A row
    /// that could not be rebuilt is left stale, and the first error is
    /// returned once all rows have been visited.
    pub fn render(&mut self, table: &Table) -> Result<Element, TableError> {
        log::debug!(
            "[table] render: {} rows x {} columns, header {}",
            table.row_count,
            table.columns.len(),
            if table.options.disable_header { "off" } else { "on" }
        );

        let header = if table.options.disable_header {
            Ok(None)
        } else {
            self.render_header(table).map(Some)
        };
        let body = self.render_body(table);
        let (header, body) = (header?, body?);

        Ok(Element::new(ElementKind::Table, "table")
            .class("flextable")
            .class(table.options.class_name.as_str())
            .height(Size::Fill)
            .children(header)
            .child(body))
    }

    fn render_header(&mut self, table: &Table) -> Result<Element, TableError> {
        let options = &table.options;
        let columns = normalize(&table.columns, ColumnContext::Header)?;
        let columns = compose_header(&columns, &table.sort, &table.on_sort);
        self.header.refresh(RowPosition::Header, &columns)?;

        let row = Element::new(ElementKind::Row, "header-row")
            .class("flextable-row")
            .class("flextable-row--header")
            .class(options.header_class_name.as_str())
            .height(Size::Fixed(options.header_height))
            .at(RowPosition::Header, None)
            .children(self.header.iter().map(cell_element));

        let spacer = Element::new(ElementKind::HeaderSpacer, "header-space").height(Size::Fixed(
            options
                .header_height
                .saturating_add(HEADER_BORDER_THICKNESS),
        ));

        Ok(Element::new(ElementKind::Header, "header")
            .child(row)
            .child(spacer))
    }

    fn render_body(&mut self, table: &Table) -> Result<Element, TableError> {
        let row_count = table.row_count;

        if self.rows.len() > row_count {
            log::trace!(
                "[table] unmounting rows {}..{}",
                row_count,
                self.rows.len()
            );
        }
        self.rows.truncate(row_count);
        self.rows.resize_with(row_count, RowCells::new);
        self.highlighted.retain(|row| *row < row_count);

        let columns = match normalize(&table.columns, ColumnContext::Body) {
            Ok(columns) => columns,
            Err(err) => {
                self.rows.iter_mut().for_each(RowCells::mark_stale);
                return Err(err);
            }
        };

        let mut body = Element::new(ElementKind::Body, "body").height(Size::Fill);

        if row_count == 0 {
            if let Some(content) = &table.empty_content {
                let content = content.resolve(()).map_err(TableError::EmptyContent)?;
                body = body.child(
                    Element::new(ElementKind::Empty, "empty")
                        .class("flextable-empty")
                        .content(content),
                );
            }
            return Ok(body);
        }

        let clickable = is_clickable(&table.row_handlers);
        let mut rows = Vec::with_capacity(row_count);
        let mut first_error = None;

        for (index, cells) in self.rows.iter_mut().enumerate() {
            let class_name = match table.row_class_name.resolve(index) {
                Ok(class_name) => class_name,
                Err(source) => {
                    log::warn!("[table] row {} left stale: no class name", index);
                    cells.mark_stale();
                    first_error.get_or_insert(TableError::RowClass { row: index, source });
                    continue;
                }
            };
            if let Err(err) = cells.refresh(RowPosition::Body(index), &columns) {
                first_error.get_or_insert(err);
                continue;
            }
            if first_error.is_some() {
                continue;
            }

            let mut row = Element::new(ElementKind::Row, format!("row-{index}"))
                .class("flextable-row")
                .class(class_name)
                .class_if("flextable-row--clickable", clickable)
                .class_if(
                    "flextable-row--highlight-disabled",
                    self.highlighted.contains(&index),
                )
                .height(Size::Fixed(table.options.row_height))
                .at(RowPosition::Body(index), None)
                .listeners(table.row_handlers.bind(move |kind| RowEvent {
                    kind,
                    row_index: index,
                }))
                .children(cells.iter().map(cell_element));
            row.clickable = clickable;
            rows.push(row);
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(body.children(rows)),
        }
    }

    /// Cells of body row `row` as of the last render.
    pub fn row_cells(&self, row: usize) -> Option<&RowCells> {
        self.rows.get(row)
    }

    pub fn header_cells(&self) -> &RowCells {
        &self.header
    }

    /// Number of body rows currently holding a cache.
    pub fn mounted_rows(&self) -> usize {
        self.rows.len()
    }

    /// Record that a cell of `row` is (or is no longer) highlighted.
    ///
    /// While a cell is highlighted its row renders without its own highlight.
    pub fn set_cell_highlight(&mut self, row: usize, highlighted: bool) {
        if highlighted {
            self.highlighted.insert(row);
        } else {
            self.highlighted.remove(&row);
        }
    }

    pub fn is_cell_highlighted(&self, row: usize) -> bool {
        self.highlighted.contains(&row)
    }

    /// Track hover transitions reported by a [`crate::PointerTracker`].
    ///
    /// Hovering a body cell highlights it, which switches its row's own
    /// highlight off until the pointer leaves. Returns whether anything
    /// changed, i.e. whether the table needs to be rendered again.
    pub fn apply_hover(&mut self, dispatched: &[Dispatched]) -> bool {
        let mut changed = false;
        for event in dispatched {
            let Some(row) = event.target.row.body_index() else {
                continue;
            };
            changed |= match event.kind {
                EventKind::MouseOver => self.highlighted.insert(row),
                EventKind::MouseOut => self.highlighted.remove(&row),
                _ => false,
            };
        }
        if changed {
            log::trace!("[table] highlighted rows now {:?}", self.highlighted);
        }
        changed
    }
}

fn cell_element(cell: &CellDescriptor) -> Element {
    let index = cell.index;
    let clickable = cell.is_clickable();

    let mut element = Element::new(ElementKind::Cell, cell.key())
        .class("flextable-cell")
        .class(cell.class_name.as_str())
        .class_if("flextable-cell--clickable", clickable)
        .class_if("flextable-cell--hide-right-border", cell.hide_right_border)
        .sizing(cell.sizing)
        .height(Size::Fill)
        .at(index.row, Some(index.column))
        .content(cell.content.clone())
        .listeners(cell.handlers.bind(move |kind| CellEvent {
            kind,
            row: index.row,
            column_index: index.column,
        }));

    element.icons = cell.icons.clone();
    element.tooltip = cell.tooltip.clone();
    element.align = cell.align;
    element.clickable = clickable;
    element
}
