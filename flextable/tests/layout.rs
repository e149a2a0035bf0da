use flextable::{Align, SortKey, Table, TableError, TableLayout, WidthKind};

const LAYOUT: &str = r#"{
    "options": { "header_height": 2, "class_name": "users" },
    "children": [
        { "type": "column", "id": "name", "width": 20, "width_kind": "px",
          "header": "Name", "sort_key": "name", "tooltip": "Full name" },
        { "type": "column", "id": "notes", "width": 2, "width_kind": "flex-ratio",
          "header": "Notes", "align": "right", "hide_right_border": true }
    ]
}"#;

#[test]
fn test_load_layout() {
    let layout = TableLayout::from_json(LAYOUT).unwrap();
    assert_eq!(layout.options.header_height, 2);
    assert_eq!(layout.options.row_height, 1, "unset options keep defaults");
    assert_eq!(layout.options.class_name, "users");

    let columns = layout.columns().unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].id, "name");
    assert_eq!(columns[0].width_kind, WidthKind::Pixels);
    assert_eq!(columns[0].sort_key, Some(SortKey::from("name")));
    assert!(columns[0].tooltip.is_some());
    assert_eq!(columns[1].width, 2);
    assert_eq!(columns[1].width_kind, WidthKind::FlexRatio);
    assert_eq!(columns[1].align, Align::Right);
    assert!(columns[1].hide_right_border);
}

#[test]
fn test_layout_columns_build_a_table() {
    let layout = TableLayout::from_json(LAYOUT).unwrap();
    let columns = layout
        .columns()
        .unwrap()
        .into_iter()
        .map(|column| column.body("-"));
    let table = Table::new(2).columns(columns).options(layout.options.clone());

    let root = table.build().unwrap();
    assert!(root.has_class("users"));
    assert_eq!(root.rows().count(), 2);
    assert_eq!(
        root.header_row().unwrap().children[0].tooltip.as_deref(),
        Some("Full name")
    );
}

#[test]
fn test_non_column_child_rejected() {
    let layout = TableLayout::from_json(
        r#"{ "children": [
            { "type": "column", "id": "a", "width": 1, "width_kind": "flex-ratio" },
            { "type": "row", "id": "b" }
        ] }"#,
    )
    .unwrap();

    match layout.columns() {
        Err(TableError::NotAColumn { index, kind }) => {
            assert_eq!(index, 1);
            assert_eq!(kind, "row");
        }
        other => panic!("expected NotAColumn, got {other:?}"),
    }
}

#[test]
fn test_invalid_width_kind_rejected() {
    let layout = TableLayout::from_json(
        r#"{ "children": [
            { "type": "column", "id": "a", "width": 50, "width_kind": "percent" }
        ] }"#,
    )
    .unwrap();

    assert!(matches!(
        layout.columns(),
        Err(TableError::InvalidWidthKind(kind)) if kind == "percent"
    ));
}

#[test]
fn test_missing_width_rejected() {
    let layout = TableLayout::from_json(
        r#"{ "children": [ { "type": "column", "id": "a", "width_kind": "px" } ] }"#,
    )
    .unwrap();

    assert!(matches!(
        layout.columns(),
        Err(TableError::MissingField { index: 0, field: "width" })
    ));
}

#[test]
fn test_malformed_json_reported() {
    assert!(matches!(
        TableLayout::from_json("{ not json"),
        Err(TableError::Layout(_))
    ));
}
