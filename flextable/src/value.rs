//! Values that are either given up front or computed per cell.

use std::fmt;
use std::sync::Arc;

use crate::column::Content;
use crate::error::ResolveError;
use crate::types::CellIndex;

type ComputeFn<T, I> = Arc<dyn Fn(I) -> Result<T, ResolveError> + Send + Sync>;

/// A literal value, or a function of the cell (or row) it is rendered into.
///
/// Every dynamic column field (class name, content, icons, tooltip) goes
/// through [`Resolvable::resolve`], so a cell never stores an unevaluated
/// function.
pub enum Resolvable<T, I = CellIndex> {
    Literal(T),
    Computed(ComputeFn<T, I>),
}

impl<T: Clone + 'static, I: 'static> Resolvable<T, I> {
    pub fn literal(value: impl Into<T>) -> Self {
        Resolvable::Literal(value.into())
    }

    /// Compute the value from the index on every resolve.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(I) -> T + Send + Sync + 'static,
    {
        Resolvable::Computed(Arc::new(move |index| Ok(f(index))))
    }

    /// Like [`Resolvable::computed`], for functions that can fail.
    pub fn try_computed<F, E>(f: F) -> Self
    where
        F: Fn(I) -> Result<T, E> + Send + Sync + 'static,
        E: Into<ResolveError> + 'static,
    {
        Resolvable::Computed(Arc::new(move |index| f(index).map_err(Into::into)))
    }

    pub fn resolve(&self, index: I) -> Result<T, ResolveError> {
        match self {
            Resolvable::Literal(value) => Ok(value.clone()),
            Resolvable::Computed(f) => f(index),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Resolvable::Computed(_))
    }
}

impl<T: Clone, I> Clone for Resolvable<T, I> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(value.clone()),
            Resolvable::Computed(f) => Resolvable::Computed(Arc::clone(f)),
        }
    }
}

impl<T: Default, I> Default for Resolvable<T, I> {
    fn default() -> Self {
        Resolvable::Literal(T::default())
    }
}

impl<T: fmt::Debug, I> fmt::Debug for Resolvable<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Resolvable::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<T, I> From<T> for Resolvable<T, I> {
    fn from(value: T) -> Self {
        Resolvable::Literal(value)
    }
}

impl<I> From<&str> for Resolvable<String, I> {
    fn from(value: &str) -> Self {
        Resolvable::Literal(value.to_string())
    }
}

impl<I> From<&str> for Resolvable<Content, I> {
    fn from(value: &str) -> Self {
        Resolvable::Literal(Content::from(value))
    }
}

impl<I> From<String> for Resolvable<Content, I> {
    fn from(value: String) -> Self {
        Resolvable::Literal(Content::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RowPosition;

    #[test]
    fn test_literal_ignores_index() {
        let value: Resolvable<String> = "fixed".into();
        assert_eq!(value.resolve(CellIndex::body(0, 0)).unwrap(), "fixed");
        assert_eq!(value.resolve(CellIndex::body(9, 3)).unwrap(), "fixed");
        assert!(!value.is_computed());
    }

    #[test]
    fn test_computed_receives_index() {
        let value: Resolvable<String> =
            Resolvable::computed(|cell: CellIndex| format!("{}:{}", cell.row, cell.column));
        assert_eq!(value.resolve(CellIndex::body(2, 1)).unwrap(), "2:1");
        assert_eq!(
            value.resolve(CellIndex::new(RowPosition::Header, 0)).unwrap(),
            "header:0"
        );
    }

    #[test]
    fn test_try_computed_propagates_error() {
        let value: Resolvable<String> = Resolvable::try_computed(|cell: CellIndex| {
            if cell.column == 1 {
                Err("no data")
            } else {
                Ok("ok".to_string())
            }
        });
        assert!(value.resolve(CellIndex::body(0, 0)).is_ok());
        let err = value.resolve(CellIndex::body(0, 1)).unwrap_err();
        assert_eq!(err.message, "no data");
    }

    #[test]
    fn test_row_indexed_value() {
        let value: Resolvable<String, usize> =
            Resolvable::computed(|row: usize| if row % 2 == 0 { "even" } else { "odd" }.into());
        assert_eq!(value.resolve(0).unwrap(), "even");
        assert_eq!(value.resolve(3).unwrap(), "odd");
    }
}
