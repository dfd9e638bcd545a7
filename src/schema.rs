use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::datatypes::DataType;
use serde::Deserialize;

use crate::errors::ValidationError;

/// Expected schema: column name mapped to a type tag as rendered by
/// [`dtype_name`]. Immutable for the duration of a validation run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ExpectedSchema {
    columns: HashMap<String, String>,
}

impl ExpectedSchema {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Load a schema from a JSON object file, e.g.
    /// `{"name": "string", "age": "int64"}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let file = File::open(path.as_ref())?;
        let schema = serde_json::from_reader(BufReader::new(file))?;
        Ok(schema)
    }

    pub fn with_column(mut self, name: impl Into<String>, dtype: impl Into<String>) -> Self {
        self.columns.insert(name.into(), dtype.into());
        self
    }

    /// Expected type tag for a column, if the column is part of the schema.
    pub fn expected_type(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

/// Canonical rendering of an inferred Arrow type to the tag strings expected
/// schemas are authored against. Comparison against the schema is exact
/// string equality, so callers must use these tags verbatim.
pub fn dtype_name(dtype: &DataType) -> String {
    match dtype {
        DataType::Boolean => "bool".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::Float64 => "float64".to_string(),
        DataType::Utf8 => "string".to_string(),
        DataType::Date32 => "date32".to_string(),
        DataType::Timestamp(_, _) => "timestamp".to_string(),
        DataType::Null => "null".to_string(),
        other => format!("{other:?}").to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_with_column_lookup() {
        let schema = ExpectedSchema::new()
            .with_column("name", "string")
            .with_column("age", "int64");

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("name"));
        assert!(!schema.contains("city"));
        assert_eq!(schema.expected_type("age"), Some("int64"));
        assert_eq!(schema.expected_type("city"), None);
    }

    #[test]
    fn test_empty_schema() {
        let schema = ExpectedSchema::new();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "string", "age": "int64", "score": "float64"}}"#).unwrap();

        let schema = ExpectedSchema::from_json_file(file.path()).unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.expected_type("score"), Some("float64"));
    }

    #[test]
    fn test_from_json_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = ExpectedSchema::from_json_file(file.path());
        assert!(matches!(result, Err(ValidationError::SchemaError(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = ExpectedSchema::from_json_file("nonexistent.json");
        assert!(matches!(result, Err(ValidationError::IoError(_))));
    }

    #[test]
    fn test_dtype_names() {
        assert_eq!(dtype_name(&DataType::Int64), "int64");
        assert_eq!(dtype_name(&DataType::Float64), "float64");
        assert_eq!(dtype_name(&DataType::Utf8), "string");
        assert_eq!(dtype_name(&DataType::Boolean), "bool");
        assert_eq!(dtype_name(&DataType::Date32), "date32");
    }
}
