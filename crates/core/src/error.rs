/// Domain-level errors raised before any network traffic happens.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request payload failed local validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
