use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            DomainError::Persistence(format!("database error: {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence(format!("connection unavailable: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
