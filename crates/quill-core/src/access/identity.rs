//! Caller identity produced by request authentication.

/// The authentication result for one request.
///
/// Computed fresh per request and discarded with it; identities are never
/// persisted or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerIdentity {
    /// No valid credential was presented.
    Anonymous,
    /// A credential matched the configured secret.
    Authenticated {
        /// Stable identifier for the authenticated caller.
        subject: String,
    },
}

impl CallerIdentity {
    /// Create an authenticated identity for the given subject.
    pub fn authenticated(subject: impl Into<String>) -> Self {
        CallerIdentity::Authenticated {
            subject: subject.into(),
        }
    }

    /// Whether this identity is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, CallerIdentity::Authenticated { .. })
    }

    /// The subject identifier, if authenticated.
    pub fn subject(&self) -> Option<&str> {
        match self {
            CallerIdentity::Anonymous => None,
            CallerIdentity::Authenticated { subject } => Some(subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_identity() {
        let identity = CallerIdentity::Anonymous;
        assert!(!identity.is_authenticated());
        assert_eq!(identity.subject(), None);
    }

    #[test]
    fn test_authenticated_identity() {
        let identity = CallerIdentity::authenticated("admin");
        assert!(identity.is_authenticated());
        assert_eq!(identity.subject(), Some("admin"));
    }
}
