//! Plain-text rendering and geometry for a composed table.
//!
//! Header layout, top to bottom: a border line, `header_height` rows of
//! header cells, a border line. Together they fill exactly the header
//! spacer's height, and body rows start right below.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::element::{Element, ElementKind};
use crate::sizing::{SizingDirective, distribute};
use crate::types::{Align, RowPosition, Size};

/// The cell under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub row: RowPosition,
    pub column: usize,
}

/// Resolved positions of a table's columns and rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableGeometry {
    /// `(x, width)` per column.
    pub columns: Vec<(u16, u16)>,
    /// `(y, height)` of the header row, if the header is shown.
    pub header: Option<(u16, u16)>,
    pub body_top: u16,
    pub row_height: u16,
    pub row_count: usize,
}

impl TableGeometry {
    /// Lay out `root` (a table element) within `width` cells.
    pub fn compute(root: &Element, width: u16) -> Self {
        let template = root.header_row().or_else(|| root.rows().next());
        let directives: Vec<SizingDirective> = template
            .map(|row| {
                row.children
                    .iter()
                    .filter_map(|cell| SizingDirective::from_size(cell.width))
                    .collect()
            })
            .unwrap_or_default();

        let mut x = 0u16;
        let columns = distribute(&directives, width)
            .into_iter()
            .map(|w| {
                let span = (x, w);
                x = x.saturating_add(w);
                span
            })
            .collect();

        let (header, body_top) = match (root.header_row(), root.header_spacer()) {
            (Some(row), Some(spacer)) => {
                let height = fixed_height(row.height, 1);
                (Some((1, height)), fixed_height(spacer.height, height + 2))
            }
            _ => (None, 0),
        };

        let row_height = root
            .rows()
            .next()
            .map(|row| fixed_height(row.height, 1))
            .unwrap_or(1);

        Self {
            columns,
            header,
            body_top,
            row_height,
            row_count: root.rows().count(),
        }
    }

    /// Total width taken by all columns.
    pub fn total_width(&self) -> u16 {
        self.columns
            .last()
            .map(|(x, w)| x.saturating_add(*w))
            .unwrap_or(0)
    }

    /// Find the cell containing (`x`, `y`).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        let column = self
            .columns
            .iter()
            .position(|(start, width)| x >= *start && x < start.saturating_add(*width))?;

        if let Some((top, height)) = self.header
            && y >= top
            && y < top.saturating_add(height)
        {
            return Some(Hit {
                row: RowPosition::Header,
                column,
            });
        }

        if y < self.body_top || self.row_height == 0 {
            return None;
        }
        let index = usize::from((y - self.body_top) / self.row_height);
        (index < self.row_count).then_some(Hit {
            row: RowPosition::Body(index),
            column,
        })
    }
}

fn fixed_height(size: Size, fallback: u16) -> u16 {
    match size {
        Size::Fixed(height) => height,
        _ => fallback,
    }
}

/// Render `root` to lines of text, `width` cells wide at most.
///
/// Fixed columns that do not fit are clipped with an ellipsis at the
/// right edge, so every line has the same display width.
pub fn render_lines(root: &Element, width: u16) -> Vec<String> {
    let geometry = TableGeometry::compute(root, width);
    let line_width = usize::from(match geometry.total_width() {
        0 => width,
        total => total.min(width),
    });
    let mut lines = Vec::new();

    if let (Some(row), Some((_, height))) = (root.header_row(), geometry.header) {
        lines.push("─".repeat(line_width));
        push_row(&mut lines, row, &geometry, height, line_width);
        lines.push("─".repeat(line_width));
    }

    if let Some(body) = root.body() {
        for child in &body.children {
            match child.kind {
                ElementKind::Row => {
                    push_row(&mut lines, child, &geometry, geometry.row_height, line_width)
                }
                ElementKind::Empty => lines.push(fit(child.content.as_text(), line_width, Align::Center)),
                _ => {}
            }
        }
    }

    lines
}

fn push_row(
    lines: &mut Vec<String>,
    row: &Element,
    geometry: &TableGeometry,
    height: u16,
    line_width: usize,
) {
    if height == 0 {
        return;
    }

    let mut line = String::new();
    for (cell, (_, width)) in row.children.iter().zip(&geometry.columns) {
        line.push_str(&fit(&cell_text(cell), usize::from(*width), cell.align));
    }
    lines.push(truncate_to_width(&line, line_width));

    let blank = " ".repeat(line_width);
    for _ in 1..height {
        lines.push(blank.clone());
    }
}

fn cell_text(cell: &Element) -> String {
    let mut text = cell.content.as_text().to_string();
    for icon in &cell.icons {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(icon.glyph());
    }
    text
}

/// Truncate with an ellipsis, then pad to exactly `width` display cells.
fn fit(text: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(text, width);
    let padding = width.saturating_sub(text.width());

    let (left, right) = match align {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => (padding / 2, padding - padding / 2),
    };

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}
