//! Main entry point for validating a dataset against its expected schema.

use tracing::{debug, error};

use crate::checks::{DuplicateCheck, NullCheck, SchemaCheck};
use crate::config::ValidationConfig;
use crate::errors::ValidationError;
use crate::reader;
use crate::report;
use crate::results::ValidationResult;
use crate::status::write_status;

/// Runs the three dataset checks and persists the outcome.
///
/// Each call is self-contained: the dataset is loaded fresh, every check
/// runs regardless of earlier failures, and the status file is rewritten.
/// Quality issues fold into the returned [`ValidationResult`]; IO and parse
/// failures return as [`ValidationError`] without touching the status file.
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate the configured dataset. The pass/fail boolean is read via
    /// [`ValidationResult::is_passed`].
    pub fn validate(&self) -> Result<ValidationResult, ValidationError> {
        let table = reader::read_csv(self.config.data_path())
            .inspect_err(|e| error!("Error during data validation: {e}"))?;

        let mut result = ValidationResult::new(table.num_rows());

        SchemaCheck::new(self.config.schema()).validate(&table, &mut result);
        NullCheck::new().validate(&table, &mut result);
        DuplicateCheck::new()
            .validate(&table, &mut result)
            .inspect_err(|e| error!("Error during data validation: {e}"))?;

        if !result.is_passed() {
            debug!("\n{}", report::render(&result));
        }

        write_status(self.config.status_path(), result.is_passed())
            .inspect_err(|e| error!("Error during data validation: {e}"))?;

        Ok(result)
    }
}
