//! The access-control pipeline.
//!
//! Two stages run per request, in order:
//!
//! 1. [`RequestAuthenticator`] maps the request's credential material to a
//!    [`CallerIdentity`].
//! 2. [`AccessPolicy`] consumes the identity plus the target collection and
//!    operation kind and returns an [`AccessDecision`]: either a denial or
//!    an optional [`Filter`] to AND into the store query.
//!
//! Both stages are pure functions over owned data. Neither holds mutable
//! state, so they are safe under arbitrary concurrent invocation.

pub mod authenticator;
pub mod filter;
pub mod identity;
pub mod policy;

pub use authenticator::RequestAuthenticator;
pub use filter::{combine_filters, Condition, Filter};
pub use identity::CallerIdentity;
pub use policy::{AccessDecision, AccessPolicy};
