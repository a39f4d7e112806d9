//! Storage error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True when no connection could be obtained within the acquire timeout,
    /// or the pool has been shut down.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Sqlx(sqlx::Error::PoolTimedOut) | Self::Sqlx(sqlx::Error::PoolClosed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        assert!(DbError::from(sqlx::Error::PoolTimedOut).is_unavailable());
        assert!(DbError::from(sqlx::Error::PoolClosed).is_unavailable());
    }

    #[test]
    fn query_error_is_not_unavailable() {
        let err = DbError::from(sqlx::Error::Protocol("bad message".into()));
        assert!(!err.is_unavailable());
        assert!(err.to_string().starts_with("database error"));
    }
}
