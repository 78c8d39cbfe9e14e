use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("invalid period `{0}`, expected YYYY-MM")]
    InvalidPeriod(String),

    #[error("invalid report query: {0}")]
    Query(String),

    #[error("export failed: {0}")]
    Export(String),
}
