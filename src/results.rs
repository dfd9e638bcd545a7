use std::fmt;

/// A single detected issue. Quality findings only; fatal IO/parse failures
/// travel through [`crate::ValidationError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Dataset column with no entry in the expected schema
    UnknownColumn { column: String },
    /// Dataset column whose inferred type tag differs from the schema's
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },
    /// Dataset column with null or empty cells
    MissingValues { column: String, count: usize },
    /// Rows that exactly repeat an earlier row, counted after the first
    /// occurrence
    DuplicateRows { count: usize },
}

impl Finding {
    pub fn check_name(&self) -> &'static str {
        match self {
            Finding::UnknownColumn { .. } => "UnknownColumn",
            Finding::TypeMismatch { .. } => "TypeMismatch",
            Finding::MissingValues { .. } => "MissingValues",
            Finding::DuplicateRows { .. } => "DuplicateRows",
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            Finding::UnknownColumn { column }
            | Finding::TypeMismatch { column, .. }
            | Finding::MissingValues { column, .. } => Some(column),
            Finding::DuplicateRows { .. } => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnknownColumn { column } => {
                write!(f, "Column '{column}' not found in schema")
            }
            Finding::TypeMismatch {
                column,
                expected,
                found,
            } => write!(
                f,
                "Data type mismatch for column '{column}'. Expected: {expected}, Found: {found}"
            ),
            Finding::MissingValues { column, count } => {
                write!(f, "Column '{column}' has {count} missing values")
            }
            Finding::DuplicateRows { count } => write!(f, "Duplicate rows found: {count}"),
        }
    }
}

/// Outcome of a validation run. Starts passed; recording any finding flips
/// it to failed for the rest of the run. Findings keep insertion order,
/// which follows dataset column order within each check.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    total_rows: usize,
    passed: bool,
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            passed: true,
            findings: Vec::new(),
        }
    }

    pub fn record(&mut self, finding: Finding) {
        self.passed = false;
        self.findings.push(finding);
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }
}
