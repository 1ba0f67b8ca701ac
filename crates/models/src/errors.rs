use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0} field is required")]
    MissingField(&'static str),
    #[error("{field} field {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField { field, reason: reason.into() }
    }
}
