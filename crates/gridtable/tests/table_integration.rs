//! Integration tests for the table component.
//!
//! A recording grid stands in for the virtualization engine: it counts
//! re-layout signals and reads widths and cells back through the public
//! callbacks, the way a real grid would after each signal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gridtable::{
    extract_value, render_preview, CellContext, CellProps, ClickKind, Col, Grid,
    PaginationConfig, PreviewOptions, SortDirection, TableConfig, TableError, VirtualTable,
};
use serde_json::{json, Value};

fn tasks() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Write docs", "owner": {"name": "Ada"}, "done": false}),
        json!({"id": 2, "title": "Fix resize", "owner": {"name": "Grace"}, "done": true}),
        json!({"id": 3, "title": "Ship", "owner": null, "done": false}),
    ]
}

struct RecordingGrid {
    layouts: Rc<Cell<usize>>,
}

impl Grid for RecordingGrid {
    fn recompute_grid_size(&mut self) {
        self.layouts.set(self.layouts.get() + 1);
    }
}

fn recording_grid() -> (Rc<Cell<usize>>, RecordingGrid) {
    let layouts = Rc::new(Cell::new(0));
    (Rc::clone(&layouts), RecordingGrid { layouts })
}

// ============================================================================
// Sizing strategies
// ============================================================================

#[test]
fn resolved_widths_fill_table() {
    let table = VirtualTable::builder(800.0)
        .columns([
            Col::px("id", 80.0),
            Col::percent("title", 40.0),
            Col::variable("owner"),
            Col::variable("done").min_width(60.0),
        ])
        .build();

    let widths = table.column_widths();
    assert_eq!(widths.widths, vec![80.0, 320.0, 200.0, 200.0]);
    assert_eq!(widths.total(), 800.0);
}

#[test]
fn resizable_table_seeds_fractions_and_drags() {
    let (layouts, grid) = recording_grid();
    let mut table = VirtualTable::builder(1000.0)
        .columns([Col::px("id", 80.0), Col::variable("title"), Col::variable("owner")])
        .resizable(true)
        .grid(grid)
        .build();

    assert!((table.column_width(0) - 100.0).abs() < 1e-9);
    assert!((table.column_width(1) - 450.0).abs() < 1e-9);

    table.drag("title", 100.0).unwrap();
    table.drag("title", -50.0).unwrap();
    assert!((table.column_width(1) - 500.0).abs() < 1e-9);
    assert!((table.column_width(2) - 400.0).abs() < 1e-9);
    assert_eq!(layouts.get(), 2);

    let err = table.drag("owner", 10.0).unwrap_err();
    assert!(matches!(err, TableError::NoAdjacentColumn(ref name) if name == "owner"));
    assert_eq!(layouts.get(), 2);
}

#[test]
fn width_follows_table_resize() {
    let mut table = VirtualTable::builder(400.0)
        .columns([Col::variable("a"), Col::variable("b")])
        .resizable(true)
        .build();
    table.drag("a", 40.0).unwrap();

    table.set_width(800.0);
    assert!((table.column_width(0) - 480.0).abs() < 1e-9);
    assert!((table.column_width(1) - 320.0).abs() < 1e-9);
}

#[test]
fn same_column_names_keep_adjusted_fractions() {
    let mut table = VirtualTable::builder(400.0)
        .columns([Col::variable("a"), Col::variable("b")])
        .resizable(true)
        .build();
    table.drag("a", 40.0).unwrap();

    table.set_columns(vec![Col::variable("a").header("A"), Col::variable("b")]);
    assert!((table.column_width(0) - 240.0).abs() < 1e-9);
}

// ============================================================================
// Re-layout signals
// ============================================================================

#[test]
fn every_sizing_change_signals_the_grid() {
    let (layouts, grid) = recording_grid();
    let mut table = VirtualTable::builder(600.0)
        .columns([Col::variable("title"), Col::variable("owner")])
        .data(tasks())
        .include_headers(true)
        .build();
    table.attach_grid(grid);

    table.set_hovered(0, 1);
    table.set_hovered(1, 1);
    table.clear_hovered();
    table.set_data(tasks());
    table.set_width(700.0);
    table.set_height(None);
    table.set_columns(vec![Col::variable("title")]);
    assert_eq!(layouts.get(), 7);
}

// ============================================================================
// Cells
// ============================================================================

#[test]
fn grid_walks_every_cell() {
    let table = VirtualTable::builder(600.0)
        .columns([
            Col::px("id", 60.0).header("#"),
            Col::variable("title"),
            Col::variable("owner").cell(|row| extract_value(row, "owner.name")),
        ])
        .data(tasks())
        .include_headers(true)
        .build();

    let props = table.grid_props();
    let mut rows = Vec::new();
    for row in 0..props.row_count {
        let cells: Vec<String> = (0..props.column_count)
            .filter_map(|col| table.render_cell(row, col))
            .map(|cell| cell.content)
            .collect();
        rows.push(cells.join("|"));
    }

    assert_eq!(
        rows,
        vec!["#|title|owner", "1|Write docs|Ada", "2|Fix resize|Grace", "3|Ship|"]
    );
}

#[test]
fn selection_disabled_and_props_follow_row_data() {
    let table = VirtualTable::builder(600.0)
        .columns([
            Col::variable("title"),
            Col::variable("done").cell_props(|ctx: &CellContext<'_>| {
                let state = if ctx.row["done"] == json!(true) { "done" } else { "open" };
                CellProps::new().attr("data-state", state)
            }),
        ])
        .data(tasks())
        .is_cell_selected(|ctx| ctx.row["id"] == json!(1))
        .is_cell_disabled(|ctx| ctx.row["done"] == json!(true))
        .build();

    let first = table.render_cell(0, 1).unwrap();
    assert!(first.state.selected);
    assert!(!first.state.disabled);
    assert_eq!(first.props.attributes["data-state"], "open");

    let second = table.render_cell(1, 1).unwrap();
    assert!(!second.state.selected);
    assert!(second.state.disabled);
    assert_eq!(second.props.attributes["data-state"], "done");
}

#[test]
fn hovering_a_row_highlights_it() {
    let mut table = VirtualTable::builder(600.0)
        .columns([Col::variable("title"), Col::variable("owner")])
        .data(tasks())
        .include_headers(true)
        .is_cell_hovered(|ctx| match (ctx.hovered_row, ctx.hovered_column) {
            (Some(row), Some(_)) => row["id"] == ctx.row["id"],
            _ => false,
        })
        .build();

    table.set_hovered(1, 2);
    assert!(table.render_cell(2, 0).unwrap().state.hovered);
    assert!(table.render_cell(2, 1).unwrap().state.hovered);
    assert!(!table.render_cell(1, 0).unwrap().state.hovered);
    assert_eq!(
        table.hovered().map(|h| (h.column_index, h.row_index)),
        Some((1, 2))
    );
}

#[test]
fn cell_descriptions_serialize() {
    let table = VirtualTable::builder(300.0)
        .columns([Col::variable("title")])
        .data(tasks())
        .build();

    let cell = serde_json::to_value(table.render_cell(0, 0).unwrap()).unwrap();
    assert_eq!(cell["content"], "Write docs");
    assert_eq!(cell["state"]["last_column"], true);
    assert!(cell.get("sort_label").is_none());
}

// ============================================================================
// Sorting and clicks
// ============================================================================

#[test]
fn header_click_toggles_sort_through_host() {
    let requested: Rc<RefCell<Option<(String, SortDirection)>>> = Rc::default();
    let sink = Rc::clone(&requested);

    let mut table = VirtualTable::builder(600.0)
        .columns([Col::variable("title"), Col::variable("owner").order_by("owner.name")])
        .data(tasks())
        .include_headers(true)
        .order_by("title", SortDirection::Asc)
        .on_header_click(move |click| {
            *sink.borrow_mut() = Some((click.column.name.clone(), SortDirection::Desc));
        })
        .build();

    assert!(table.click(0, 1, ClickKind::Click));
    let (column, direction) = requested.borrow_mut().take().unwrap();
    assert_eq!(column, "owner");

    let key = table.columns()[1].order_by.clone();
    table.set_order(key, direction);

    let owner = table.render_cell(0, 1).unwrap().sort_label.unwrap();
    assert!(owner.active);
    assert_eq!(owner.direction, SortDirection::Desc);
    assert!(!table.render_cell(0, 0).unwrap().sort_label.unwrap().active);
}

#[test]
fn data_clicks_receive_row_and_all_rows() {
    let seen: Rc<RefCell<Vec<(ClickKind, String, usize)>>> = Rc::default();
    let click_sink = Rc::clone(&seen);
    let menu_sink = Rc::clone(&seen);

    let table = VirtualTable::builder(600.0)
        .columns([Col::variable("title")])
        .data(tasks())
        .on_cell_click(move |click| {
            let title = extract_value(click.row_data.unwrap(), "title");
            click_sink.borrow_mut().push((click.kind, title, click.data.len()));
        })
        .on_cell_context_menu(move |click| {
            let title = extract_value(click.row_data.unwrap(), "title");
            menu_sink.borrow_mut().push((click.kind, title, click.data.len()));
        })
        .build();

    assert!(table.click(0, 0, ClickKind::Click));
    assert!(table.click(2, 0, ClickKind::ContextMenu));
    assert!(!table.click(1, 0, ClickKind::DoubleClick));

    assert_eq!(
        *seen.borrow(),
        vec![
            (ClickKind::Click, "Write docs".to_string(), 3),
            (ClickKind::ContextMenu, "Ship".to_string(), 3),
        ]
    );
}

// ============================================================================
// Configuration and grid props
// ============================================================================

#[test]
fn table_from_yaml_config() {
    let config = TableConfig::from_yaml(
        r#"
width: 900
include_headers: true
resizable: true
fixed_row_count: 1
pagination:
  rows_per_page: 5
  count: 3
  rows_per_page_options: [5, 10, 25]
"#,
    )
    .unwrap();

    let table = VirtualTable::from_config(config)
        .columns([Col::variable("title"), Col::variable("owner")])
        .data(tasks())
        .build();

    let props = table.grid_props();
    assert_eq!(props.row_count, 4);
    assert!(props.enable_fixed_row_scroll);
    assert!(props.show_pagination);
    assert_eq!(props.grid_height, 6.0 * 48.0);
    assert_eq!(props.container_height, 6.0 * 48.0 + 57.0);
    assert!(table.render_cell(0, 0).unwrap().drag_handle);
}

#[test]
fn pagination_builder_and_fit_to_rows() {
    let table = VirtualTable::builder(600.0)
        .columns([Col::variable("title")])
        .data(tasks())
        .pagination(PaginationConfig {
            rows_per_page: 10,
            count: 3,
            ..Default::default()
        })
        .fit_height_to_rows(true)
        .build();

    assert_eq!(table.grid_props().grid_height, 3.0 * 48.0);
}

// ============================================================================
// Text preview
// ============================================================================

#[test]
fn preview_uses_current_widths() {
    let mut table = VirtualTable::builder(144.0)
        .columns([Col::variable("id"), Col::variable("title")])
        .data(tasks())
        .include_headers(true)
        .resizable(true)
        .build();

    let before = render_preview(&table, &PreviewOptions::default());
    assert_eq!(before.lines().nth(1), Some("1         Write do…"));

    table.drag("id", -40.0).unwrap();
    let after = render_preview(&table, &PreviewOptions::default());
    assert_eq!(after.lines().nth(1), Some("1    Write docs"));
}
