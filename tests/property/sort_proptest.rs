//! Property-based tests for table sorting

use nativeform_client::table::{sort_key, SortDirection, SortableTable, TableRow};
use proptest::prelude::*;

const COLUMNS: usize = 3;

fn arb_rows() -> impl Strategy<Value = Vec<TableRow>> {
    prop::collection::vec(
        prop::collection::vec("[ a-zA-Z0-9]{0,6}", COLUMNS).prop_map(TableRow::new),
        0..20,
    )
}

fn sorted_copy(rows: &[TableRow]) -> Vec<Vec<String>> {
    let mut cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells.clone()).collect();
    cells.sort();
    cells
}

proptest! {
    #[test]
    fn test_sort_conserves_rows(
        rows in arb_rows(),
        clicks in prop::collection::vec(0..COLUMNS, 1..8),
    ) {
        let mut table = SortableTable::from_labels(["A", "B", "C"], rows.clone());
        for column in clicks {
            table.header_click(column).unwrap();
        }
        prop_assert_eq!(table.rows().len(), rows.len());
        prop_assert_eq!(sorted_copy(table.rows()), sorted_copy(&rows));
    }

    #[test]
    fn test_sort_orders_by_normalized_key(
        rows in arb_rows(),
        clicks in prop::collection::vec(0..COLUMNS, 1..8),
    ) {
        let mut table = SortableTable::from_labels(["A", "B", "C"], rows);
        for column in clicks {
            let direction = table.header_click(column).unwrap();
            let keys: Vec<String> = table.column_values(column).into_iter().map(sort_key).collect();
            for pair in keys.windows(2) {
                match direction {
                    SortDirection::Ascending => prop_assert!(pair[0] <= pair[1]),
                    SortDirection::Descending => prop_assert!(pair[0] >= pair[1]),
                }
            }
        }
    }

    #[test]
    fn test_direction_alternates_per_table(clicks in prop::collection::vec(0..COLUMNS, 1..12)) {
        let mut table = SortableTable::from_labels(["A", "B", "C"], Vec::new());
        for (i, column) in clicks.into_iter().enumerate() {
            let expected = if i % 2 == 0 {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            prop_assert_eq!(table.header_click(column).unwrap(), expected);
        }
    }
}
