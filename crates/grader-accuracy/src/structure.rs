//! Structure validator. Pure functions, no oracle access.

use grader_core::constants::MIN_TABLE_ROWS;
use grader_core::models::{Block, MetricBlock, TableBlock};

/// Whether a block is well-formed enough to be accuracy-scored.
///
/// Only metrics and tables are eligible; every other kind is invalid here.
pub fn validate(block: &Block) -> bool {
    match block {
        Block::Metric(metric) => validate_metric(metric),
        Block::Table(table) => validate_table(table),
        _ => false,
    }
}

/// Both value and description present and non-blank.
pub fn validate_metric(metric: &MetricBlock) -> bool {
    let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());
    filled(&metric.value) && filled(&metric.description)
}

/// At least two rows, rectangular, and no blank cell.
pub fn validate_table(table: &TableBlock) -> bool {
    let Some(first) = table.rows.first() else {
        return false;
    };
    if table.rows.len() < MIN_TABLE_ROWS {
        return false;
    }
    let width = first.len();
    table
        .rows
        .iter()
        .all(|row| row.len() == width && row.iter().all(|cell| !cell.is_blank()))
}
