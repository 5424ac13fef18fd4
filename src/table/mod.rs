//! Click-to-sort for tables
//!
//! Tables marked with `data-sortable` get a click handler on every `th`.
//! Each click reorders the body rows by that column's trimmed, lowercased
//! text. The sort direction belongs to the table, not the column: it flips
//! on every click, starting with descending.
//!
//! - [`init_sortable_tables`] finds the marked tables of a parsed page
//! - [`SortableTable::header_click`] applies one click
//! - the `web` module (feature `web`) wires the same behavior onto the live DOM

pub mod model;
pub mod setup;
pub mod state;

pub use model::{compare_cells, sort_key, HeaderCell, SortableTable, TableRow};
pub use setup::init_sortable_tables;
pub use state::{SortDirection, SortState};
