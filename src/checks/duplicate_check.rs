use std::collections::HashSet;

use arrow::row::{RowConverter, SortField};
use tracing::{error, info};
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::ValidationError;
use crate::reader::DataTable;
use crate::results::{Finding, ValidationResult};

/// Detects rows that exactly repeat an earlier row across all columns.
///
/// Rows are converted to the Arrow row format, so equality covers nulls and
/// every column type uniformly, then hashed into a set. The duplicate count
/// is `total rows - distinct rows`: two identical rows count as one
/// duplicate, matching occurrences after the first.
pub struct DuplicateCheck {}

impl DuplicateCheck {
    pub fn new() -> Self {
        Self {}
    }

    pub fn name(&self) -> &'static str {
        "DuplicateCheck"
    }

    pub fn validate(
        &self,
        table: &DataTable,
        result: &mut ValidationResult,
    ) -> Result<(), ValidationError> {
        let fields = table
            .schema()
            .fields()
            .iter()
            .map(|f| SortField::new(f.data_type().clone()))
            .collect();
        let converter = RowConverter::new(fields)?;

        let mut seen: HashSet<u64> = HashSet::with_capacity(table.num_rows());
        for batch in table.batches() {
            let rows = converter.convert_columns(batch.columns())?;
            for row in rows.iter() {
                seen.insert(xxh3_64(row.as_ref()));
            }
        }

        let duplicates = table.num_rows() - seen.len();
        if duplicates > 0 {
            error!("Duplicate rows found: {duplicates}");
            result.record(Finding::DuplicateRows { count: duplicates });
        } else {
            info!("No duplicate rows found in the dataset.");
        }
        Ok(())
    }
}

impl Default for DuplicateCheck {
    fn default() -> Self {
        Self::new()
    }
}
