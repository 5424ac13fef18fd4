//! Per-table sort state

use serde::{Deserialize, Serialize};

/// Sort direction of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short form used in `data-sort-dir` attributes
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Column and direction of the last sort applied to a table.
///
/// Both are `None` until the table is sorted for the first time. The
/// direction is table-wide: it flips on every sort, whichever column is
/// clicked, so switching columns does not reset it to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Direction the next sort will use
    pub fn next_direction(&self) -> SortDirection {
        self.direction.unwrap_or(SortDirection::Ascending).flip()
    }

    /// Record a sort of `column` and return the direction it used
    pub fn advance(&mut self, column: usize) -> SortDirection {
        let direction = self.next_direction();
        self.column = Some(column);
        self.direction = Some(direction);
        direction
    }
}
