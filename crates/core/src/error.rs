#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Malformed date '{value}': expected YYYY-MM-DD")]
    MalformedDate { value: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
