use arrow::array::{Array, StringArray};
use tracing::{error, info};

use crate::reader::DataTable;
use crate::results::{Finding, ValidationResult};

/// Counts missing cells per column across the whole dataset. A cell is
/// missing when Arrow parsed it as null, or when a Utf8 column holds an
/// empty string (CSV keeps empty fields as `""` in string columns).
///
/// Applies to every dataset column, whether or not the schema knows it.
pub struct NullCheck {}

impl NullCheck {
    pub fn new() -> Self {
        Self {}
    }

    pub fn name(&self) -> &'static str {
        "NullCheck"
    }

    pub fn validate(&self, table: &DataTable, result: &mut ValidationResult) {
        let mut counts = vec![0usize; table.num_columns()];
        for batch in table.batches() {
            for (i, array) in batch.columns().iter().enumerate() {
                counts[i] += array.null_count();
                if let Some(strings) = array.as_any().downcast_ref::<StringArray>() {
                    counts[i] += strings.iter().flatten().filter(|v| v.is_empty()).count();
                }
            }
        }

        let affected: Vec<(&str, usize)> = table
            .schema()
            .fields()
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(field, count)| (field.name().as_str(), count))
            .collect();

        if affected.is_empty() {
            info!("No missing values found in the dataset.");
            return;
        }

        let summary = affected
            .iter()
            .map(|(column, count)| format!("{column} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        error!("Missing values found in columns: {summary}");

        for (column, count) in affected {
            result.record(Finding::MissingValues {
                column: column.to_string(),
                count,
            });
        }
    }
}

impl Default for NullCheck {
    fn default() -> Self {
        Self::new()
    }
}
