//! The composed table tree handed to a renderer.

use crate::column::{Content, Icon};
use crate::handler::{EventHandlers, EventKind};
use crate::sizing::SizingDirective;
use crate::types::{Align, RowPosition, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Table,
    /// Wraps the header row and its spacer.
    Header,
    /// Reserves the header's height plus its top and bottom border.
    HeaderSpacer,
    Body,
    Row,
    Cell,
    /// Shown in place of rows when the table has none.
    Empty,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,
    pub class_names: Vec<String>,

    // Layout
    pub width: Size,
    pub height: Size,
    pub flex_grow: u16,
    pub flex_shrink: u16,

    // Content
    pub content: Content,
    pub icons: Vec<Icon>,
    pub tooltip: Option<String>,
    pub align: Align,
    pub children: Vec<Element>,

    // Position in the table
    pub row: Option<RowPosition>,
    pub column: Option<usize>,

    // Interaction
    /// Cosmetic only, see [`crate::interactivity`].
    pub clickable: bool,
    pub listeners: EventHandlers<()>,
}

impl Element {
    pub fn new(kind: ElementKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            class_names: Vec::new(),
            width: Size::Fill,
            height: Size::Auto,
            flex_grow: 0,
            flex_shrink: 1,
            content: Content::Empty,
            icons: Vec::new(),
            tooltip: None,
            align: Align::Left,
            children: Vec::new(),
            row: None,
            column: None,
            clickable: false,
            listeners: EventHandlers::new(),
        }
    }

    /// Add a class name. Empty names are skipped.
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        if !class_name.is_empty() {
            self.class_names.push(class_name);
        }
        self
    }

    /// Add `class_name` only when `enabled`.
    pub fn class_if(self, class_name: &str, enabled: bool) -> Self {
        if enabled { self.class(class_name) } else { self }
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Apply a column sizing directive to the main axis.
    pub fn sizing(mut self, sizing: SizingDirective) -> Self {
        self.width = sizing.size();
        self.flex_grow = sizing.flex_grow();
        self.flex_shrink = sizing.flex_shrink();
        self
    }

    /// Record where in the table this element sits.
    pub fn at(mut self, row: RowPosition, column: Option<usize>) -> Self {
        self.row = Some(row);
        self.column = column;
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn listeners(mut self, listeners: EventHandlers<()>) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_names.iter().any(|c| c == class_name)
    }

    /// Fire this element's handlers for `kind`, returning how many ran.
    ///
    /// Runs regardless of [`Element::clickable`].
    pub fn dispatch(&self, kind: EventKind) -> usize {
        self.listeners.dispatch(kind, &())
    }

    /// Find an element by id, depth first.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn find_kind(&self, kind: ElementKind) -> Option<&Element> {
        self.children.iter().find(|child| child.kind == kind)
    }

    pub fn header(&self) -> Option<&Element> {
        self.find_kind(ElementKind::Header)
    }

    pub fn body(&self) -> Option<&Element> {
        self.find_kind(ElementKind::Body)
    }

    /// The header row (not the spacer).
    pub fn header_row(&self) -> Option<&Element> {
        self.header()?.find_kind(ElementKind::Row)
    }

    pub fn header_spacer(&self) -> Option<&Element> {
        self.header()?.find_kind(ElementKind::HeaderSpacer)
    }

    /// Body rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Element> {
        self.body()
            .into_iter()
            .flat_map(|body| body.children.iter())
            .filter(|child| child.kind == ElementKind::Row)
    }

    /// The row element at `row`, header included.
    pub fn row_at(&self, row: RowPosition) -> Option<&Element> {
        match row {
            RowPosition::Header => self.header_row(),
            RowPosition::Body(index) => self.rows().nth(index),
        }
    }

    /// The cell element at (`row`, `column`).
    pub fn cell_at(&self, row: RowPosition, column: usize) -> Option<&Element> {
        self.row_at(row)?.children.get(column)
    }
}
