use std::path::{Path, PathBuf};

use crate::schema::ExpectedSchema;

/// Everything a validation run needs: where the dataset lives, where the
/// status record goes, and the schema the dataset is expected to match.
///
/// An empty schema is accepted but makes every dataset column an unknown
/// column, so the run can only fail.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    data_path: PathBuf,
    status_path: PathBuf,
    schema: ExpectedSchema,
}

impl ValidationConfig {
    pub fn new(
        data_path: impl Into<PathBuf>,
        status_path: impl Into<PathBuf>,
        schema: ExpectedSchema,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            status_path: status_path.into(),
            schema,
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn status_path(&self) -> &Path {
        &self.status_path
    }

    pub fn schema(&self) -> &ExpectedSchema {
        &self.schema
    }
}
