//! Sortable table model and row comparison

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::state::{SortDirection, SortState};
use crate::shared::error::ClientError;

/// Normalized comparison key of a cell: trimmed and lowercased.
///
/// A leading or trailing byte-order mark counts as whitespace, as it does
/// for `String.prototype.trim` in the browser.
pub fn sort_key(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').to_lowercase()
}

/// Compare two cell texts the way a header click orders them.
///
/// Plain ordinal comparison of the normalized keys, so `"10"` sorts before
/// `"2"`.
pub fn compare_cells(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let ordering = sort_key(a).cmp(&sort_key(b));
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// A header cell of a sortable table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub label: String,
    /// Rendered with a pointer cursor and bound to a click handler
    pub interactive: bool,
}

/// A body row; cells hold the text content of each `td`/`th`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// A table opted into click-to-sort, with its own sort state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableTable {
    headers: Vec<HeaderCell>,
    rows: Vec<TableRow>,
    state: SortState,
}

impl SortableTable {
    pub fn new(headers: Vec<HeaderCell>, rows: Vec<TableRow>) -> Self {
        Self {
            headers,
            rows,
            state: SortState::default(),
        }
    }

    /// Build a table from header labels, marking every header interactive
    pub fn from_labels<I, S>(labels: I, rows: Vec<TableRow>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers = labels
            .into_iter()
            .map(|label| HeaderCell {
                label: label.into(),
                interactive: true,
            })
            .collect();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[HeaderCell] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Values of one column, top to bottom
    pub fn column_values(&self, column: usize) -> Vec<&str> {
        self.rows.iter().filter_map(|row| row.cell(column)).collect()
    }

    /// Click on the header at `index`
    pub fn header_click(&mut self, index: usize) -> Result<SortDirection, ClientError> {
        self.sort_by_column(index)
    }

    /// Reorder the body rows by `column`, flipping the table's direction.
    ///
    /// Rows shorter than `column + 1` cells fail the sort; the table is left
    /// untouched in that case.
    pub fn sort_by_column(&mut self, column: usize) -> Result<SortDirection, ClientError> {
        check_column(&self.rows, column)?;

        let direction = self.state.advance(column);
        self.rows
            .sort_by(|a, b| compare_cells(&a.cells[column], &b.cells[column], direction));

        tracing::debug!(
            column,
            direction = direction.as_attr(),
            rows = self.rows.len(),
            "Sorted table"
        );
        Ok(direction)
    }
}

/// Position of the first row without a cell at `column`
pub(crate) fn check_column(rows: &[TableRow], column: usize) -> Result<(), ClientError> {
    match rows.iter().position(|row| row.cells.len() <= column) {
        Some(row) => {
            let cells = rows[row].cells.len();
            tracing::warn!(row, column, cells, "Row is shorter than sort column");
            Err(ClientError::ColumnOutOfRange { row, column, cells })
        }
        None => Ok(()),
    }
}
