//! Request authentication against a process-wide shared secret.

use super::identity::CallerIdentity;

/// Subject assigned to callers that present the shared secret.
const ADMIN_SUBJECT: &str = "admin";

/// Maps a request's credential material to a [`CallerIdentity`].
///
/// The expected secret is supplied once at construction, never read from
/// ambient process state, so the authenticator is testable without
/// environment manipulation. Authentication never fails: a missing,
/// malformed, or mismatched credential simply yields
/// [`CallerIdentity::Anonymous`], and any rejection is deferred to the
/// access policy.
#[derive(Debug, Clone)]
pub struct RequestAuthenticator {
    /// Digest of the expected secret. `None` means authentication is
    /// disabled and every caller stays anonymous.
    expected: Option<blake3::Hash>,
}

impl RequestAuthenticator {
    /// Create an authenticator for the given shared secret.
    ///
    /// Passing `None` (no secret configured) produces an authenticator
    /// under which no caller can ever authenticate; anonymous read access
    /// keeps working.
    pub fn new(secret: Option<impl AsRef<[u8]>>) -> Self {
        Self {
            expected: secret.map(|s| blake3::hash(s.as_ref())),
        }
    }

    /// Create an authenticator that never authenticates anyone.
    pub fn disabled() -> Self {
        Self { expected: None }
    }

    /// Whether a secret is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// Authenticate an `Authorization` header value.
    ///
    /// Accepts only the exact form `Bearer <token>` where the token equals
    /// the configured secret. The token and the secret are compared through
    /// their blake3 digests; `blake3::Hash` equality is constant-time, so
    /// the comparison leaks no timing information about the secret.
    pub fn authenticate(&self, authorization: Option<&str>) -> CallerIdentity {
        let Some(expected) = &self.expected else {
            return CallerIdentity::Anonymous;
        };
        let Some(header) = authorization else {
            return CallerIdentity::Anonymous;
        };
        let Some(token) = header.strip_prefix("Bearer ") else {
            return CallerIdentity::Anonymous;
        };

        if blake3::hash(token.as_bytes()) == *expected {
            CallerIdentity::authenticated(ADMIN_SUBJECT)
        } else {
            CallerIdentity::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> RequestAuthenticator {
        RequestAuthenticator::new(Some("abc123"))
    }

    #[test]
    fn test_exact_token_authenticates() {
        let identity = authenticator().authenticate(Some("Bearer abc123"));
        assert!(identity.is_authenticated());
        assert_eq!(identity.subject(), Some("admin"));
    }

    #[test]
    fn test_trailing_character_rejected() {
        let identity = authenticator().authenticate(Some("Bearer abc1234"));
        assert_eq!(identity, CallerIdentity::Anonymous);
    }

    #[test]
    fn test_truncated_token_rejected() {
        let identity = authenticator().authenticate(Some("Bearer abc12"));
        assert_eq!(identity, CallerIdentity::Anonymous);
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(authenticator().authenticate(None), CallerIdentity::Anonymous);
    }

    #[test]
    fn test_malformed_scheme_is_anonymous() {
        let auth = authenticator();
        assert_eq!(auth.authenticate(Some("abc123")), CallerIdentity::Anonymous);
        assert_eq!(
            auth.authenticate(Some("Basic abc123")),
            CallerIdentity::Anonymous
        );
        // Scheme matching is case-sensitive and exact
        assert_eq!(
            auth.authenticate(Some("bearer abc123")),
            CallerIdentity::Anonymous
        );
    }

    #[test]
    fn test_disabled_authenticator_never_authenticates() {
        let auth = RequestAuthenticator::disabled();
        assert!(!auth.is_enabled());
        assert_eq!(
            auth.authenticate(Some("Bearer abc123")),
            CallerIdentity::Anonymous
        );
    }

    #[test]
    fn test_none_secret_never_authenticates() {
        let auth = RequestAuthenticator::new(None::<&str>);
        assert_eq!(
            auth.authenticate(Some("Bearer ")),
            CallerIdentity::Anonymous
        );
        assert_eq!(
            auth.authenticate(Some("Bearer anything")),
            CallerIdentity::Anonymous
        );
    }

    #[test]
    fn test_empty_secret_requires_empty_token() {
        // Degenerate but well-defined: secret "" matches only "Bearer "
        let auth = RequestAuthenticator::new(Some(""));
        assert!(auth.authenticate(Some("Bearer ")).is_authenticated());
        assert_eq!(
            auth.authenticate(Some("Bearer x")),
            CallerIdentity::Anonymous
        );
    }
}
