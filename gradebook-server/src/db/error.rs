//! Store error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Failure reported by a non-SQL backend
    #[error("{0}")]
    Backend(String),
}

impl DbError {
    /// Message shown to API clients.
    ///
    /// For errors raised by PostgreSQL itself this is the server's message
    /// text (e.g. `relation "students" does not exist`), without sqlx's
    /// wrapping prefix.
    pub fn client_message(&self) -> String {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.message().to_owned(),
            Self::Sqlx(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Backend(message) => message.clone(),
        }
    }
}
