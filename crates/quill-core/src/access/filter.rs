//! Query filters merged into document-store queries.

use serde_json::{json, Value};

/// A single field/value equality constraint.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Condition {
    /// Top-level document field name.
    pub field: String,
    /// Value the field must equal.
    pub value: Value,
}

/// A conjunctive set of equality constraints.
///
/// Filters only narrow result sets: combining two filters ANDs their
/// conditions, and a document matches only if every condition holds. The
/// store-facing JSON rendering follows the
/// `{ "published": { "equals": true } }` shape the document store expects.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Create a filter with a single equality condition.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            conditions: vec![Condition {
                field: field.into(),
                value: value.into(),
            }],
        }
    }

    /// The filter restricting reads to published documents.
    pub fn published_only() -> Self {
        Filter::eq("published", true)
    }

    /// AND another filter's conditions into this one.
    pub fn and(mut self, other: Filter) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    /// The conditions in this filter.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether the filter constrains anything at all.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a document satisfies every condition.
    ///
    /// Conditions compare against top-level fields; a missing field never
    /// matches.
    pub fn matches(&self, doc: &Value) -> bool {
        self.conditions
            .iter()
            .all(|c| doc.get(&c.field) == Some(&c.value))
    }

    /// Render the filter in the document store's query shape.
    pub fn to_query_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        for condition in &self.conditions {
            obj.insert(
                condition.field.clone(),
                json!({ "equals": condition.value }),
            );
        }
        Value::Object(obj)
    }
}

/// Combine an optional caller-supplied filter with an optional policy
/// filter.
///
/// The policy filter must always survive the merge: when both are present
/// they are ANDed, so a caller-supplied filter can narrow the visible set
/// but never widen it.
pub fn combine_filters(user_filter: Option<Filter>, policy_filter: Option<Filter>) -> Option<Filter> {
    match (user_filter, policy_filter) {
        (None, None) => None,
        (Some(f), None) => Some(f),
        (None, Some(p)) => Some(p),
        (Some(user), Some(policy)) => Some(user.and(policy)),
    }
}
