pub mod duplicate_check;
pub mod null_check;
pub mod schema_check;

pub use duplicate_check::DuplicateCheck;
pub use null_check::NullCheck;
pub use schema_check::SchemaCheck;
