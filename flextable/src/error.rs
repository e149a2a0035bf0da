//! Error types for table composition.

use thiserror::Error;

use crate::descriptor::ColumnContext;
use crate::types::RowPosition;

/// Failure raised by a computed cell value.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ResolveError {
    /// Error message
    pub message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ResolveError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ResolveError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors produced while declaring, loading or rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A declared child is something other than a column.
    #[error("table children must be columns, child {index} is '{kind}'")]
    NotAColumn {
        /// Position of the offending child.
        index: usize,
        /// The declared child type.
        kind: String,
    },

    /// A declared child lacks a required field.
    #[error("column {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// Two columns share the same id.
    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// A column has no content source for a context that is rendered.
    #[error("column '{column}' declares no {context} content")]
    MissingContent {
        column: String,
        context: ColumnContext,
    },

    /// Width kind outside of `px` / `flex-ratio`.
    #[error("invalid width kind '{0}', expected 'px' or 'flex-ratio'")]
    InvalidWidthKind(String),

    /// A computed cell value failed.
    #[error("failed to resolve {field} for row {row}, column {column}: {source}")]
    Resolve {
        row: RowPosition,
        column: usize,
        field: &'static str,
        #[source]
        source: ResolveError,
    },

    /// A computed row class name failed.
    #[error("failed to resolve class name for row {row}: {source}")]
    RowClass {
        row: usize,
        #[source]
        source: ResolveError,
    },

    /// Computed empty-state content failed.
    #[error("failed to resolve empty-state content: {0}")]
    EmptyContent(#[source] ResolveError),

    /// The layout document could not be parsed.
    #[error("invalid table layout: {0}")]
    Layout(#[from] serde_json::Error),
}
