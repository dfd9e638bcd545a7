use tracing::error;

use crate::reader::DataTable;
use crate::results::{Finding, ValidationResult};
use crate::schema::{ExpectedSchema, dtype_name};

/// Checks dataset columns against the expected schema: membership by name,
/// then exact type-tag equality. Iterates dataset columns in dataset order.
///
/// Only the dataset→schema direction is checked; schema columns absent from
/// the dataset are not flagged.
pub struct SchemaCheck<'a> {
    schema: &'a ExpectedSchema,
}

impl<'a> SchemaCheck<'a> {
    pub fn new(schema: &'a ExpectedSchema) -> Self {
        Self { schema }
    }

    pub fn name(&self) -> &'static str {
        "SchemaCheck"
    }

    pub fn validate(&self, table: &DataTable, result: &mut ValidationResult) {
        for field in table.schema().fields() {
            let column = field.name();
            match self.schema.expected_type(column) {
                None => {
                    error!("Column '{column}' not found in schema.");
                    result.record(Finding::UnknownColumn {
                        column: column.clone(),
                    });
                }
                Some(expected) => {
                    let found = dtype_name(field.data_type());
                    if expected != found {
                        error!(
                            "Data type mismatch for column '{column}'. \
                             Expected: {expected}, Found: {found}"
                        );
                        result.record(Finding::TypeMismatch {
                            column: column.clone(),
                            expected: expected.to_string(),
                            found,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_csv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table_from(lines: &[&str]) -> DataTable {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        read_csv(file.path()).unwrap()
    }

    #[test]
    fn test_matching_schema() {
        let table = table_from(&["name,age", "Alice,30", "Bob,25"]);
        let schema = ExpectedSchema::new()
            .with_column("name", "string")
            .with_column("age", "int64");

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        assert!(result.is_passed());
        assert!(result.findings().is_empty());
    }

    #[test]
    fn test_unknown_column() {
        let table = table_from(&["name,city", "Alice,Paris"]);
        let schema = ExpectedSchema::new().with_column("name", "string");

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        assert!(!result.is_passed());
        assert_eq!(
            result.findings(),
            &[Finding::UnknownColumn {
                column: "city".to_string()
            }]
        );
    }

    #[test]
    fn test_type_mismatch() {
        let table = table_from(&["age", "30", "25"]);
        let schema = ExpectedSchema::new().with_column("age", "float64");

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        assert!(!result.is_passed());
        assert_eq!(
            result.findings(),
            &[Finding::TypeMismatch {
                column: "age".to_string(),
                expected: "float64".to_string(),
                found: "int64".to_string()
            }]
        );
    }

    #[test]
    fn test_schema_only_columns_not_flagged() {
        let table = table_from(&["name", "Alice"]);
        let schema = ExpectedSchema::new()
            .with_column("name", "string")
            .with_column("age", "int64");

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        assert!(result.is_passed());
    }

    #[test]
    fn test_empty_schema_flags_every_column() {
        let table = table_from(&["name,age", "Alice,30"]);
        let schema = ExpectedSchema::new();

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        assert!(!result.is_passed());
        assert_eq!(result.findings().len(), 2);
    }

    #[test]
    fn test_findings_follow_dataset_order() {
        let table = table_from(&["b,a", "1,2"]);
        let schema = ExpectedSchema::new();

        let mut result = ValidationResult::new(table.num_rows());
        SchemaCheck::new(&schema).validate(&table, &mut result);

        let columns: Vec<_> = result.findings().iter().filter_map(|f| f.column()).collect();
        assert_eq!(columns, vec!["b", "a"]);
    }
}
