//! Core error types.

use thiserror::Error;

/// Errors produced by the access-control core.
///
/// Access denial is deliberately not an error: denial is a normal
/// [`AccessDecision`](crate::access::AccessDecision) variant that callers
/// must branch on. Only the parsing surface is fallible.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The requested collection slug is not part of the closed set.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// The requested operation name is not recognized.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

/// Result type for core operations.
pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccessError::UnknownCollection("pages".to_string());
        assert!(err.to_string().contains("pages"));

        let err = AccessError::UnknownOperation("merge".to_string());
        assert!(err.to_string().contains("merge"));
    }
}
