//! Column descriptors: declared columns normalized for the header or the body.

use std::collections::HashSet;
use std::fmt;

use crate::column::{ColumnSpec, Content, Icon};
use crate::error::TableError;
use crate::handler::{CellEvent, EventHandlers};
use crate::interactivity::Interactive;
use crate::sizing::{SizingDirective, resolve_sizing};
use crate::types::{Align, SortKey};
use crate::value::Resolvable;

/// Which row a descriptor list is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnContext {
    Header,
    Body,
}

impl fmt::Display for ColumnContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnContext::Header => f.write_str("header"),
            ColumnContext::Body => f.write_str("body"),
        }
    }
}

/// A column as seen by one row type.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub id: String,
    pub class_name: Resolvable<String>,
    /// Header or body content, depending on the context.
    pub content: Resolvable<Content>,
    pub sizing: SizingDirective,
    pub icons: Resolvable<Vec<Icon>>,
    pub tooltip: Option<Resolvable<String>>,
    pub align: Align,
    pub hide_right_border: bool,
    pub handlers: EventHandlers<CellEvent>,
    /// Only carried in the header context.
    pub sort_key: Option<SortKey>,
}

impl Interactive for ColumnDescriptor {
    type Event = CellEvent;

    fn handlers(&self) -> &EventHandlers<CellEvent> {
        &self.handlers
    }
}

/// Normalize declared columns for `context`, keeping declaration order.
///
/// Fails on duplicate ids and on columns without content for `context`.
pub fn normalize(
    columns: &[ColumnSpec],
    context: ColumnContext,
) -> Result<Vec<ColumnDescriptor>, TableError> {
    let mut seen = HashSet::with_capacity(columns.len());

    columns
        .iter()
        .map(|column| {
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }

            let content = match context {
                ColumnContext::Header => column.header_content.clone(),
                ColumnContext::Body => column.body_content.clone(),
            }
            .ok_or_else(|| TableError::MissingContent {
                column: column.id.clone(),
                context,
            })?;

            Ok(ColumnDescriptor {
                id: column.id.clone(),
                class_name: column.class_name.clone(),
                content,
                sizing: resolve_sizing(column.width, column.width_kind),
                icons: column.icons.clone(),
                tooltip: column.tooltip.clone(),
                align: column.align,
                hide_right_border: column.hide_right_border,
                handlers: column.handlers.clone(),
                sort_key: match context {
                    ColumnContext::Header => column.sort_key.clone(),
                    ColumnContext::Body => None,
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::fixed("name", 100)
                .header("Name")
                .body("n")
                .sort_key("name"),
            ColumnSpec::flex("notes", 1).header("Notes").body("-"),
        ]
    }

    #[test]
    fn test_contexts_pick_their_content() {
        let header = normalize(&columns(), ColumnContext::Header).unwrap();
        let body = normalize(&columns(), ColumnContext::Body).unwrap();

        assert_eq!(header.len(), body.len());
        assert!(matches!(&header[0].content, Resolvable::Literal(Content::Text(t)) if t == "Name"));
        assert!(matches!(&body[0].content, Resolvable::Literal(Content::Text(t)) if t == "n"));
        assert_eq!(header[0].sort_key, Some(SortKey::from("name")));
        assert_eq!(body[0].sort_key, None);
    }

    #[test]
    fn test_order_and_sizing_preserved() {
        let body = normalize(&columns(), ColumnContext::Body).unwrap();
        let ids: Vec<_> = body.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["name", "notes"]);
        assert_eq!(body[0].sizing, SizingDirective::Fixed { basis: 100 });
        assert_eq!(body[1].sizing, SizingDirective::Proportional { grow: 1 });
    }

    #[test]
    fn test_missing_content_is_reported() {
        let columns = vec![ColumnSpec::flex("bare", 1).body("x")];
        let err = normalize(&columns, ColumnContext::Header).unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingContent { ref column, context: ColumnContext::Header } if column == "bare"
        ));
        assert!(normalize(&columns, ColumnContext::Body).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let columns = vec![
            ColumnSpec::flex("a", 1).body("x"),
            ColumnSpec::flex("a", 1).body("y"),
        ];
        assert!(matches!(
            normalize(&columns, ColumnContext::Body),
            Err(TableError::DuplicateColumn(id)) if id == "a"
        ));
    }
}
