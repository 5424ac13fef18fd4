//! Discovery of sortable tables in a parsed page

use scraper::ElementRef;

use super::model::{HeaderCell, SortableTable, TableRow};
use crate::page::{parse_selector, text_content, HtmlPage};
use crate::shared::config::ClientConfig;
use crate::shared::error::ClientError;

/// Find every table carrying the sortable marker attribute.
///
/// Headers are every `th` in the table in document order, each marked
/// interactive. Rows come from the first `tbody`; a table without one has an
/// empty body.
pub fn init_sortable_tables(
    page: &HtmlPage,
    config: &ClientConfig,
) -> Result<Vec<SortableTable>, ClientError> {
    let table_selector = format!("table[{}]", config.sortable_attribute);
    let th = parse_selector("th")?;
    let tbody = parse_selector("tbody")?;
    let tr = parse_selector("tr")?;

    let tables: Vec<SortableTable> = page
        .select_all(&table_selector)?
        .into_iter()
        .map(|table| {
            let headers = table
                .select(&th)
                .map(|cell| HeaderCell {
                    label: text_content(&cell).trim().to_string(),
                    interactive: true,
                })
                .collect();
            let rows = table
                .select(&tbody)
                .next()
                .map(|body| body.select(&tr).map(row_from_element).collect())
                .unwrap_or_default();
            SortableTable::new(headers, rows)
        })
        .collect();

    tracing::debug!(tables = tables.len(), "Initialized sortable tables");
    Ok(tables)
}

/// The row's own `td`/`th` children, like `HTMLTableRowElement.cells`
fn row_from_element(row: ElementRef<'_>) -> TableRow {
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(|cell| text_content(&cell));
    TableRow::new(cells)
}
