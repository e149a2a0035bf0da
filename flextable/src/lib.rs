//! Flexible, sortable table composition for terminal UIs.
//!
//! A [`Table`] is declared from an ordered list of [`ColumnSpec`]s and a row
//! count. Rendering it produces an [`Element`] tree (header row, spacer, body
//! rows, cells) with every dynamic value already resolved and every event
//! handler wired. Cell content is never stored by the table itself: it comes
//! from callbacks indexed by row and column.
//!
//! ```ignore
//! let table = Table::new(3)
//!     .column(
//!         ColumnSpec::fixed("name", 20)
//!             .header("Name")
//!             .body(Resolvable::computed(|cell: CellIndex| {
//!                 Content::text(format!("row {}", cell.row))
//!             }))
//!             .sort_key("name"),
//!     )
//!     .column(ColumnSpec::flex("notes", 1).header("Notes").body(""))
//!     .sort(SortState::new("name", SortDirection::Asc))
//!     .on_sort(|key: &SortKey| log::info!("sort by {key}"));
//!
//! let root = table.build()?;
//! ```

pub mod cell;
pub mod column;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod handler;
pub mod header;
pub mod input;
pub mod interactivity;
pub mod layout;
pub mod render;
pub mod sizing;
pub mod table;
pub mod types;
pub mod value;

pub use cell::{CellDescriptor, RowCells};
pub use column::{ColumnSpec, Content, Icon};
pub use descriptor::{ColumnContext, ColumnDescriptor, normalize};
pub use element::{Element, ElementKind};
pub use error::{ResolveError, TableError};
pub use handler::{CellEvent, EventHandlers, EventKind, Handler, HandlerChain, RowEvent};
pub use header::{SortHandler, SortState, compose_header};
pub use input::{Dispatched, PointerTracker};
pub use interactivity::{Interactive, is_clickable};
pub use layout::TableLayout;
pub use render::{Hit, TableGeometry, render_lines};
pub use sizing::{SizingDirective, distribute, resolve_sizing};
pub use table::{HEADER_BORDER_THICKNESS, Table, TableOptions, TableView};
pub use types::{Align, CellIndex, RowPosition, Size, SortDirection, SortKey, WidthKind};
pub use value::Resolvable;
