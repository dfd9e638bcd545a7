use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::array::RecordBatch;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::SchemaRef;

use crate::errors::ValidationError;

const BATCH: usize = 64_000;

/// A dataset loaded fully into memory: inferred Arrow schema plus the
/// record batches backing it. Read-only once built.
pub struct DataTable {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    num_rows: usize,
}

impl DataTable {
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }
}

/// Read a CSV file into a [`DataTable`], inferring per-column types from the
/// full file. The first row is treated as the header.
pub fn read_csv(path: &Path) -> Result<DataTable, ValidationError> {
    let mut file = File::open(path)?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, None)?;
    if schema.fields().is_empty() {
        return Err(ValidationError::EmptyDataset(path.display().to_string()));
    }
    file.rewind()?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .with_batch_size(BATCH)
        .build(file)?;

    let mut batches = Vec::new();
    let mut num_rows = 0;
    for batch in reader {
        let batch = batch?;
        num_rows += batch.num_rows();
        batches.push(batch);
    }

    Ok(DataTable {
        schema,
        batches,
        num_rows,
    })
}
