use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use flextable::{
    CellIndex, ColumnContext, ColumnSpec, Content, Icon, Resolvable, RowCells, RowPosition,
    SizingDirective, TableError, normalize,
};

fn body_columns(columns: &[ColumnSpec]) -> Vec<flextable::ColumnDescriptor> {
    normalize(columns, ColumnContext::Body).unwrap()
}

fn dynamic_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::fixed("coords", 10)
            .body(Resolvable::computed(|cell: CellIndex| {
                Content::text(format!("{}x{}", cell.row, cell.column))
            }))
            .class_name(Resolvable::computed(|cell: CellIndex| {
                format!("col-{}", cell.column)
            }))
            .icons(Resolvable::computed(|cell: CellIndex| {
                if cell.row.body_index() == Some(1) {
                    vec![Icon::Glyph("*".into())]
                } else {
                    Vec::new()
                }
            }))
            .tooltip(Resolvable::computed(|cell: CellIndex| format!("tip {}", cell.row))),
        ColumnSpec::flex("static", 2)
            .body("plain")
            .class_name("fixed-class")
            .icons(vec![Icon::Glyph("!".into())]),
    ]
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_cells_resolve_against_their_index() {
    let columns = body_columns(&dynamic_columns());

    for row in 0..3 {
        let mut cells = RowCells::new();
        cells.refresh(RowPosition::Body(row), &columns).unwrap();

        let first = cells.get(0).unwrap();
        assert_eq!(first.index, CellIndex::body(row, 0));
        assert_eq!(first.content, Content::text(format!("{row}x0")));
        assert_eq!(first.class_name, "col-0");
        assert_eq!(first.tooltip.as_deref(), Some(format!("tip {row}").as_str()));
        assert_eq!(first.icons.len(), usize::from(row == 1));
        assert_eq!(first.sizing, SizingDirective::Fixed { basis: 10 });

        let second = cells.get(1).unwrap();
        assert_eq!(second.content, Content::text("plain"));
        assert_eq!(second.class_name, "fixed-class");
        assert_eq!(second.icons, vec![Icon::Glyph("!".into())]);
        assert_eq!(second.tooltip, None);
        assert_eq!(second.sizing, SizingDirective::Proportional { grow: 2 });
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let columns = body_columns(&dynamic_columns());
    let mut cells = RowCells::new();

    cells.refresh(RowPosition::Body(2), &columns).unwrap();
    let first: Vec<_> = cells
        .iter()
        .map(|c| (c.content.clone(), c.class_name.clone(), c.icons.clone(), c.tooltip.clone()))
        .collect();

    cells.refresh(RowPosition::Body(2), &columns).unwrap();
    let second: Vec<_> = cells
        .iter()
        .map(|c| (c.content.clone(), c.class_name.clone(), c.icons.clone(), c.tooltip.clone()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_resolution_happens_once_per_rebuild() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let columns = body_columns(&[ColumnSpec::flex("count", 1).body(Resolvable::computed(
        move |_: CellIndex| {
            counter.fetch_add(1, Ordering::SeqCst);
            Content::text("x")
        },
    ))]);

    let mut cells = RowCells::new();
    cells.refresh(RowPosition::Body(0), &columns).unwrap();
    for _ in 0..5 {
        assert_eq!(cells.get(0).unwrap().content, Content::text("x"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    cells.refresh(RowPosition::Body(0), &columns).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Cache shape
// ============================================================================

#[test]
fn test_cache_keys_are_dense() {
    let specs: Vec<_> = (0..7)
        .map(|i| ColumnSpec::flex(format!("c{i}"), 1).body("v"))
        .collect();
    let columns = body_columns(&specs);

    let mut cells = RowCells::new();
    cells.refresh(RowPosition::Body(0), &columns).unwrap();
    assert_eq!(cells.keys(), 0..7);
    for (position, cell) in cells.iter().enumerate() {
        assert_eq!(cell.index.column, position, "iteration order is column order");
    }

    // Shrinking the column set drops the extra keys.
    cells.refresh(RowPosition::Body(0), &columns[..3]).unwrap();
    assert_eq!(cells.keys(), 0..3);
    assert!(cells.get(3).is_none());
}

#[test]
fn test_cell_keys_name_row_and_column() {
    let columns = body_columns(&[ColumnSpec::flex("a", 1).body("v").header("A")]);
    let mut cells = RowCells::new();
    cells.refresh(RowPosition::Body(4), &columns).unwrap();
    assert_eq!(cells.get(0).unwrap().key(), "cell-4-0");

    cells.refresh(RowPosition::Header, &columns).unwrap();
    assert_eq!(cells.get(0).unwrap().key(), "cell-h-0");
    assert_eq!(cells.row(), Some(RowPosition::Header));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_failed_rebuild_marks_row_stale() {
    let good = body_columns(&[ColumnSpec::flex("a", 1).body("ok")]);
    let bad = body_columns(&[
        ColumnSpec::flex("a", 1).body("ok"),
        ColumnSpec::flex("b", 1).body(Resolvable::try_computed(|_: CellIndex| {
            Err::<Content, _>("backend down")
        })),
    ]);

    let mut cells = RowCells::new();
    cells.refresh(RowPosition::Body(3), &good).unwrap();
    assert!(!cells.is_stale());

    let err = cells.refresh(RowPosition::Body(3), &bad).unwrap_err();
    match err {
        TableError::Resolve {
            row, column, field, ..
        } => {
            assert_eq!(row, RowPosition::Body(3));
            assert_eq!(column, 1);
            assert_eq!(field, "content");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(cells.is_stale());
    assert_eq!(cells.len(), 1, "previous cells are not partially overwritten");

    cells.refresh(RowPosition::Body(3), &good).unwrap();
    assert!(!cells.is_stale());
}

#[test]
fn test_tooltip_failure_names_field() {
    let columns = body_columns(&[ColumnSpec::flex("a", 1)
        .body("ok")
        .tooltip(Resolvable::try_computed(|_: CellIndex| {
            Err::<String, _>("no tooltip")
        }))]);

    let mut cells = RowCells::new();
    let err = cells.refresh(RowPosition::Body(0), &columns).unwrap_err();
    assert!(matches!(err, TableError::Resolve { field: "tooltip", .. }));
    assert!(err.to_string().contains("no tooltip"));
}
