//! Column declarations.

use crate::handler::{CellEvent, EventHandlers, EventKind};
use crate::types::{Align, SortDirection, SortKey, WidthKind};
use crate::value::Resolvable;

/// Renderable content of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn as_text(&self) -> &str {
        match self {
            Content::Empty => "",
            Content::Text(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// Small glyph shown next to cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Marks the column the table is currently sorted by.
    SortIndicator(Option<SortDirection>),
    Glyph(String),
}

impl Icon {
    pub fn glyph(&self) -> &str {
        match self {
            Icon::SortIndicator(Some(SortDirection::Asc)) => "▲",
            Icon::SortIndicator(Some(SortDirection::Desc)) => "▼",
            Icon::SortIndicator(None) => "↕",
            Icon::Glyph(glyph) => glyph,
        }
    }
}

/// A caller-declared column.
///
/// Width and width kind are required; everything else defaults to "nothing":
/// no class, no icons, no tooltip, no handlers.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnSpec::fixed("id", 8).header("ID").body(id_cell),
///     ColumnSpec::flex("name", 2).header("Name").body(name_cell).sort_key("name"),
///     ColumnSpec::flex("status", 1).header("Status").body(status_cell).align(Align::Center),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Unique identifier within the table.
    pub id: String,
    pub width: u16,
    pub width_kind: WidthKind,
    pub class_name: Resolvable<String>,
    pub header_content: Option<Resolvable<Content>>,
    pub body_content: Option<Resolvable<Content>>,
    /// Present on sortable columns only.
    pub sort_key: Option<SortKey>,
    pub handlers: EventHandlers<CellEvent>,
    pub icons: Resolvable<Vec<Icon>>,
    pub tooltip: Option<Resolvable<String>>,
    pub align: Align,
    pub hide_right_border: bool,
}

impl ColumnSpec {
    pub fn new(id: impl Into<String>, width: u16, width_kind: WidthKind) -> Self {
        Self {
            id: id.into(),
            width,
            width_kind,
            class_name: Resolvable::default(),
            header_content: None,
            body_content: None,
            sort_key: None,
            handlers: EventHandlers::new(),
            icons: Resolvable::default(),
            tooltip: None,
            align: Align::Left,
            hide_right_border: false,
        }
    }

    /// A column `width` cells wide.
    pub fn fixed(id: impl Into<String>, width: u16) -> Self {
        Self::new(id, width, WidthKind::Pixels)
    }

    /// A column growing with weight `ratio`.
    pub fn flex(id: impl Into<String>, ratio: u16) -> Self {
        Self::new(id, ratio, WidthKind::FlexRatio)
    }

    pub fn class_name(mut self, class_name: impl Into<Resolvable<String>>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Content shown in the header cell.
    pub fn header(mut self, content: impl Into<Resolvable<Content>>) -> Self {
        self.header_content = Some(content.into());
        self
    }

    /// Content shown in each body cell.
    pub fn body(mut self, content: impl Into<Resolvable<Content>>) -> Self {
        self.body_content = Some(content.into());
        self
    }

    /// Make the column sortable by `key`.
    pub fn sort_key(mut self, key: impl Into<SortKey>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    pub fn icons(mut self, icons: impl Into<Resolvable<Vec<Icon>>>) -> Self {
        self.icons = icons.into();
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<Resolvable<String>>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn hide_right_border(mut self) -> Self {
        self.hide_right_border = true;
        self
    }

    /// Attach a cell handler for `kind`. Handlers accumulate.
    pub fn on<F>(mut self, kind: EventKind, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.handlers.on(kind, f);
        self
    }

    pub fn on_click<F>(self, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.on(EventKind::Click, f)
    }

    pub fn on_double_click<F>(self, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.on(EventKind::DoubleClick, f)
    }

    pub fn on_mouse_over<F>(self, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.on(EventKind::MouseOver, f)
    }

    pub fn on_mouse_out<F>(self, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.on(EventKind::MouseOut, f)
    }

    pub fn on_right_click<F>(self, f: F) -> Self
    where
        F: Fn(&CellEvent) + Send + Sync + 'static,
    {
        self.on(EventKind::RightClick, f)
    }
}
