//! The access decision table.
//!
//! One pure function evaluates every (identity, collection, operation)
//! combination. The original system scattered this logic as per-collection
//! closures plus a separate middleware; centralizing it removes the
//! copy-paste drift that made individual endpoints easy to get wrong.

use super::filter::Filter;
use super::identity::CallerIdentity;
use crate::collection::{Collection, Operation};

/// Reason attached to every authentication-based denial.
const REASON_AUTH_REQUIRED: &str = "authentication required";

/// The outcome of an access evaluation.
///
/// A tagged variant rather than an error: callers must branch on both
/// paths explicitly. `Denied` is terminal for the request; the HTTP layer
/// translates it to an unauthorized response and performs no store
/// operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AccessDecision {
    /// The operation may proceed. For reads, `filter` (when present) must
    /// be ANDed into the store query; writes never carry a filter.
    Allowed {
        /// Implicit filter to merge into the store query.
        filter: Option<Filter>,
    },
    /// The operation is rejected.
    Denied {
        /// Human-readable denial reason.
        reason: String,
    },
}

impl AccessDecision {
    /// An unconditional allow.
    pub fn allowed() -> Self {
        AccessDecision::Allowed { filter: None }
    }

    /// An allow constrained by a filter.
    pub fn allowed_with(filter: Filter) -> Self {
        AccessDecision::Allowed {
            filter: Some(filter),
        }
    }

    /// A denial with the given reason.
    pub fn denied(reason: impl Into<String>) -> Self {
        AccessDecision::Denied {
            reason: reason.into(),
        }
    }

    /// Whether the operation may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed { .. })
    }

    /// The implicit filter, if the decision is an allow that carries one.
    pub fn filter(&self) -> Option<&Filter> {
        match self {
            AccessDecision::Allowed { filter } => filter.as_ref(),
            AccessDecision::Denied { .. } => None,
        }
    }
}

/// Stateless evaluator for the access decision table.
///
/// | Identity      | Operation           | override | Decision                     |
/// |---------------|---------------------|----------|------------------------------|
/// | Anonymous     | Read                | false    | Allowed(published = true)    |
/// | Anonymous     | Read                | true     | Allowed(published = true)    |
/// | Authenticated | Read                | any      | Allowed(no filter)           |
/// | Anonymous     | Create/Update/Delete| —        | Denied                       |
/// | Authenticated | Create/Update/Delete| —        | Allowed(no filter)           |
///
/// The admin-override flag exists so trusted admin UIs can request the
/// full unfiltered set over the same read endpoint. It is honored only
/// through identity: an anonymous caller requesting the override still
/// receives the published-only filter.
pub struct AccessPolicy;

impl AccessPolicy {
    /// Evaluate one request against the decision table.
    ///
    /// Pure and total: identical inputs always produce identical
    /// decisions, and no input combination panics or errors.
    pub fn evaluate(
        identity: &CallerIdentity,
        collection: Collection,
        operation: Operation,
        admin_override: bool,
    ) -> AccessDecision {
        if operation.is_write() {
            return if identity.is_authenticated() {
                AccessDecision::allowed()
            } else {
                tracing::debug!(%collection, %operation, "anonymous write denied");
                AccessDecision::denied(REASON_AUTH_REQUIRED)
            };
        }

        if identity.is_authenticated() {
            // Full visibility; the override flag is a no-op here.
            return AccessDecision::allowed();
        }

        if admin_override {
            tracing::debug!(%collection, "admin override ignored for anonymous read");
        }
        AccessDecision::allowed_with(Filter::published_only())
    }
}
