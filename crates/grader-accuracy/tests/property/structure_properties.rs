//! Property tests for the table structure rule.

use grader_accuracy::validate;
use grader_core::models::{Block, Cell};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        "[a-z0-9 ]{0,4}".prop_map(Cell::Text),
        (-1000i32..1000).prop_map(|n| Cell::Number(n as f64)),
        Just(Cell::Null),
    ]
}

proptest! {
    #[test]
    fn table_valid_iff_rectangular_and_filled(
        rows in prop::collection::vec(prop::collection::vec(cell(), 1..4), 2..6)
    ) {
        let width = rows[0].len();
        let expected = rows
            .iter()
            .all(|r| r.len() == width && r.iter().all(|c| !c.render().trim().is_empty()));
        prop_assert_eq!(validate(&Block::table(rows)), expected);
    }

    #[test]
    fn single_row_tables_are_invalid(row in prop::collection::vec(cell(), 0..5)) {
        prop_assert!(!validate(&Block::table(vec![row])));
    }
}
