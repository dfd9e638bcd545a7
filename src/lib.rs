pub mod checks;
pub mod config;
pub mod errors;
pub mod reader;
pub mod report;
pub mod results;
pub mod schema;
pub mod status;
pub mod validator;

pub use config::ValidationConfig;
pub use errors::ValidationError;
pub use results::{Finding, ValidationResult};
pub use schema::ExpectedSchema;
pub use validator::Validator;
