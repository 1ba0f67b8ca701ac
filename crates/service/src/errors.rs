use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Store faults, classified so the service can tell expected constraint
/// violations from everything else.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::ForeignKeyViolation(detail),
            _ => Self::Db(err.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_db_errors_stay_opaque() {
        let err: StoreError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, StoreError::Db(msg) if msg.contains("boom")));
    }

    #[test]
    fn store_error_converts_into_service_error() {
        let err: ServiceError = StoreError::ForeignKeyViolation("fk_project_team".into()).into();
        assert!(matches!(err, ServiceError::Store(StoreError::ForeignKeyViolation(_))));
    }
}
