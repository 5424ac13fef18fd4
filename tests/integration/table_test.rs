//! Integration tests for click-to-sort on parsed pages

use nativeform_client::shared::ClientConfig;
use nativeform_client::table::{init_sortable_tables, SortDirection, SortableTable};
use pretty_assertions::assert_eq;

use crate::common::sortable_page;

fn config() -> ClientConfig {
    ClientConfig::builder()
        .base_url("http://localhost:5000")
        .build()
        .unwrap()
}

fn single_table(headers: &[&str], rows: &[Vec<&str>]) -> SortableTable {
    let page = sortable_page(headers, rows);
    let mut tables = init_sortable_tables(&page, &config()).unwrap();
    assert_eq!(tables.len(), 1);
    tables.remove(0)
}

#[test]
fn test_click_sequence_on_one_column() {
    let mut table = single_table(&["Id"], &[vec!["3"], vec!["1"], vec!["2"]]);

    assert_eq!(table.header_click(0).unwrap(), SortDirection::Descending);
    assert_eq!(table.column_values(0), vec!["3", "2", "1"]);

    assert_eq!(table.header_click(0).unwrap(), SortDirection::Ascending);
    assert_eq!(table.column_values(0), vec!["1", "2", "3"]);
}

#[test]
fn test_direction_keeps_alternating_across_columns() {
    let mut table = single_table(
        &["Resource", "Region"],
        &[
            vec!["vm-b", "westeurope"],
            vec!["vm-a", "eastus"],
            vec!["vm-c", "centralus"],
        ],
    );

    assert_eq!(table.header_click(0).unwrap(), SortDirection::Descending);
    assert_eq!(table.column_values(0), vec!["vm-c", "vm-b", "vm-a"]);

    // A different column does not reset to ascending on its own.
    assert_eq!(table.header_click(1).unwrap(), SortDirection::Ascending);
    assert_eq!(table.column_values(1), vec!["centralus", "eastus", "westeurope"]);

    assert_eq!(table.header_click(1).unwrap(), SortDirection::Descending);
    assert_eq!(table.column_values(1), vec!["westeurope", "eastus", "centralus"]);

    assert_eq!(table.state().column, Some(1));
    assert_eq!(table.state().direction, Some(SortDirection::Descending));
}

#[test]
fn test_rows_move_as_a_whole() {
    let mut table = single_table(
        &["User", "Role"],
        &[vec!["bob", "editor"], vec!["Alice", "admin"], vec!["carol", "viewer"]],
    );
    table.header_click(0).unwrap();
    table.header_click(0).unwrap();

    let rows: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|r| r.cells.iter().map(String::as_str).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Alice", "admin"],
            vec!["bob", "editor"],
            vec!["carol", "viewer"],
        ]
    );
}

#[test]
fn test_tables_sort_independently() {
    let page = nativeform_client::page::HtmlPage::parse(
        r#"<table data-sortable><thead><tr><th>A</th></tr></thead><tbody><tr><td>x</td></tr><tr><td>y</td></tr></tbody></table>
           <table data-sortable><thead><tr><th>B</th></tr></thead><tbody><tr><td>1</td></tr><tr><td>2</td></tr></tbody></table>"#,
    );
    let mut tables = init_sortable_tables(&page, &config()).unwrap();
    assert_eq!(tables.len(), 2);

    assert_eq!(tables[0].header_click(0).unwrap(), SortDirection::Descending);
    assert_eq!(tables[1].header_click(0).unwrap(), SortDirection::Descending);
    assert_eq!(tables[0].column_values(0), vec!["y", "x"]);
    assert_eq!(tables[1].column_values(0), vec!["2", "1"]);
}
