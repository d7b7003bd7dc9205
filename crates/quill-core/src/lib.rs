//! Quill Core - Access control and publication filtering for the quill CMS.
//!
//! This crate decides, per request, whether an operation on a document
//! collection is allowed and which implicit filter must be merged into the
//! document-store query before it executes.
//!
//! # Access Model
//!
//! Every request is authenticated first, producing a [`CallerIdentity`]
//! (anonymous or authenticated). The identity, together with the target
//! collection and operation kind, is evaluated against a single decision
//! table:
//!
//! - Anonymous reads are allowed but constrained to published documents.
//! - Authenticated reads see everything.
//! - Writes require authentication; they are never filtered, only allowed
//!   or denied.
//!
//! # Example
//!
//! ```
//! use quill_core::access::{AccessDecision, AccessPolicy, CallerIdentity, RequestAuthenticator};
//! use quill_core::{Collection, Operation};
//!
//! let authenticator = RequestAuthenticator::new(Some("abc123"));
//! let identity = authenticator.authenticate(Some("Bearer abc123"));
//! assert!(identity.is_authenticated());
//!
//! let decision = AccessPolicy::evaluate(&identity, Collection::BlogPosts, Operation::Read, false);
//! assert!(matches!(decision, AccessDecision::Allowed { filter: None }));
//! ```

pub mod access;
pub mod collection;
pub mod error;

pub use access::{
    combine_filters, AccessDecision, AccessPolicy, CallerIdentity, Condition, Filter,
    RequestAuthenticator,
};
pub use collection::{Collection, Operation};
pub use error::{AccessError, AccessResult};
