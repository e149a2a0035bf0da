use std::error::Error;
use std::fs::File;
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use flextable::{
    Align, CellIndex, ColumnSpec, Content, PointerTracker, Resolvable, SortDirection, SortKey,
    SortState, Table, TableGeometry, TableView, render_lines,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const WIDTH: u16 = 48;

struct Person {
    name: &'static str,
    age: u32,
    city: &'static str,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "Ada", age: 36, city: "London" },
        Person { name: "Grace", age: 85, city: "Arlington" },
        Person { name: "Linus", age: 28, city: "Helsinki" },
        Person { name: "Barbara", age: 71, city: "Boston" },
    ]
}

/// The caller owns sorting: reorder the data, then hand the state to the table.
fn sorted(mut rows: Vec<Person>, sort: &SortState) -> Vec<Person> {
    match sort.criterion.as_ref().map(SortKey::as_str) {
        Some("name") => rows.sort_by_key(|p| p.name),
        Some("age") => rows.sort_by_key(|p| p.age),
        _ => {}
    }
    if sort.direction == Some(SortDirection::Desc) {
        rows.reverse();
    }
    rows
}

fn cell(rows: Arc<Vec<Person>>, f: fn(&Person) -> String) -> Resolvable<Content> {
    Resolvable::computed(move |cell: CellIndex| {
        cell.row
            .body_index()
            .and_then(|index| rows.get(index))
            .map(|person| Content::text(f(person)))
            .unwrap_or_default()
    })
}

fn build(rows: Arc<Vec<Person>>, sort: &SortState, requests: Arc<Mutex<Option<SortKey>>>) -> Table {
    let names = Arc::clone(&rows);
    let ages = Arc::clone(&rows);
    let cities = Arc::clone(&rows);
    Table::new(rows.len())
        .column(
            ColumnSpec::flex("name", 2)
                .header("Name")
                .body(cell(names, |p| p.name.to_string()))
                .sort_key("name"),
        )
        .column(
            ColumnSpec::fixed("age", 8)
                .header("Age")
                .body(cell(ages, |p| p.age.to_string()))
                .align(Align::Right)
                .sort_key("age"),
        )
        .column(
            ColumnSpec::flex("city", 1)
                .header("City")
                .body(cell(cities, |p| p.city.to_string())),
        )
        .sort(sort.clone())
        .on_sort(move |key: &SortKey| {
            if let Ok(mut pending) = requests.lock() {
                *pending = Some(key.clone());
            }
        })
        .on_row_click(|event| log::info!("row {} clicked", event.row_index))
        .empty_content("no people")
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("flextable-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let requests = Arc::new(Mutex::new(None));
    let mut sort = SortState::new("name", SortDirection::Asc);
    let mut view = TableView::new();
    let mut tracker = PointerTracker::new();

    let table = build(Arc::new(sorted(people(), &sort)), &sort, Arc::clone(&requests));
    let root = view.render(&table)?;
    for line in render_lines(&root, WIDTH) {
        println!("{line}");
    }

    let geometry = TableGeometry::compute(&root, WIDTH);

    // Hover the first body row, then click the "Age" header cell.
    let hover = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 1,
        row: geometry.body_top,
        modifiers: KeyModifiers::NONE,
    };
    if view.apply_hover(&tracker.handle(&hover, &geometry, &root)) {
        log::debug!("[demo] row highlight changed, re-render pending");
    }

    let (age_x, _) = geometry.columns[1];
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: age_x,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    tracker.handle(&click, &geometry, &root);

    let requested = requests.lock().map(|mut pending| pending.take()).unwrap_or_default();
    if let Some(key) = requested {
        let direction = match (&sort.criterion, sort.direction) {
            (Some(current), Some(direction)) if *current == key => direction.toggled(),
            _ => SortDirection::Asc,
        };
        sort = SortState::new(key, direction);
    }

    println!();
    let table = build(Arc::new(sorted(people(), &sort)), &sort, requests);
    let root = view.render(&table)?;
    for line in render_lines(&root, WIDTH) {
        println!("{line}");
    }

    Ok(())
}
