//! Document store collaborator boundary.
//!
//! The access core only ever hands the store an optional filter to merge
//! into a query; everything behind this trait is outside the access
//! boundary. The bundled [`MemoryStore`] keeps whole JSON documents in
//! memory, which is all the gateway needs to serve and exercise the
//! pipeline end to end.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use quill_core::{Collection, Filter};
use serde_json::Value;
use thiserror::Error;

/// Errors produced by document-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document body or patch was not a JSON object.
    #[error("document body must be a JSON object")]
    NotAnObject,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations the gateway needs per collection.
///
/// Read operations take the effective filter already produced by the
/// access layer; implementations must apply it, never widen it.
pub trait DocumentStore: Send + Sync {
    /// Insert a document, assigning an id and creation timestamp.
    /// Returns the stored document.
    fn insert(&self, collection: Collection, body: Value) -> StoreResult<Value>;

    /// List documents matching the filter, in insertion order.
    fn find(&self, collection: Collection, filter: Option<&Filter>) -> StoreResult<Vec<Value>>;

    /// Fetch one document by id. A document hidden by the filter is
    /// indistinguishable from a missing one.
    fn get(
        &self,
        collection: Collection,
        id: &str,
        filter: Option<&Filter>,
    ) -> StoreResult<Option<Value>>;

    /// Merge a patch into an existing document. Returns the updated
    /// document, or `None` if the id does not exist.
    fn update(&self, collection: Collection, id: &str, patch: Value)
        -> StoreResult<Option<Value>>;

    /// Remove a document. Returns whether anything was removed.
    fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool>;
}

/// In-memory document store over a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: DashMap<(Collection, String), (u64, Value)>,
    seq: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self, collection: Collection) -> (u64, String) {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let mut hasher = blake3::Hasher::new();
        hasher.update(collection.as_slug().as_bytes());
        hasher.update(&seq.to_le_bytes());
        let id = hasher.finalize().to_hex()[..24].to_string();
        (seq, id)
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: Collection, body: Value) -> StoreResult<Value> {
        let Value::Object(mut doc) = body else {
            return Err(StoreError::NotAnObject);
        };

        let (seq, id) = self.next_id(collection);
        doc.insert("id".to_string(), Value::String(id.clone()));
        doc.insert(
            "createdAt".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );

        let stored = Value::Object(doc);
        self.docs
            .insert((collection, id), (seq, stored.clone()));
        Ok(stored)
    }

    fn find(&self, collection: Collection, filter: Option<&Filter>) -> StoreResult<Vec<Value>> {
        let mut rows: Vec<(u64, Value)> = self
            .docs
            .iter()
            .filter(|entry| entry.key().0 == collection)
            .filter(|entry| filter.map_or(true, |f| f.matches(&entry.value().1)))
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, doc)| doc).collect())
    }

    fn get(
        &self,
        collection: Collection,
        id: &str,
        filter: Option<&Filter>,
    ) -> StoreResult<Option<Value>> {
        let Some(entry) = self.docs.get(&(collection, id.to_string())) else {
            return Ok(None);
        };
        let doc = &entry.value().1;
        if filter.map_or(true, |f| f.matches(doc)) {
            Ok(Some(doc.clone()))
        } else {
            Ok(None)
        }
    }

    fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Value,
    ) -> StoreResult<Option<Value>> {
        let Value::Object(changes) = patch else {
            return Err(StoreError::NotAnObject);
        };

        let Some(mut entry) = self.docs.get_mut(&(collection, id.to_string())) else {
            return Ok(None);
        };

        let (_, stored) = entry.value_mut();
        if let Value::Object(doc) = stored {
            for (key, value) in changes {
                doc.insert(key, value);
            }
            // The id is assigned by the store and cannot be patched away
            doc.insert("id".to_string(), Value::String(id.to_string()));
            doc.insert(
                "updatedAt".to_string(),
                Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        Ok(Some(stored.clone()))
    }

    fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        Ok(self.docs.remove(&(collection, id.to_string())).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_id(doc: &Value) -> String {
        doc["id"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_insert_assigns_id_and_timestamp() {
        let store = MemoryStore::new();
        let doc = store
            .insert(Collection::BlogPosts, json!({ "title": "Hello" }))
            .unwrap();

        assert_eq!(doc["title"], "Hello");
        assert!(doc["id"].is_string());
        assert!(doc["createdAt"].is_string());
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let store = MemoryStore::new();
        let err = store
            .insert(Collection::BlogPosts, json!(["not", "an", "object"]))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject));
    }

    #[test]
    fn test_find_applies_filter() {
        let store = MemoryStore::new();
        store
            .insert(Collection::Resources, json!({ "title": "A", "published": true }))
            .unwrap();
        store
            .insert(Collection::Resources, json!({ "title": "B", "published": false }))
            .unwrap();

        let all = store.find(Collection::Resources, None).unwrap();
        assert_eq!(all.len(), 2);

        let filter = Filter::published_only();
        let published = store.find(Collection::Resources, Some(&filter)).unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0]["title"], "A");
    }

    #[test]
    fn test_find_is_scoped_to_collection() {
        let store = MemoryStore::new();
        store
            .insert(Collection::BlogPosts, json!({ "title": "post" }))
            .unwrap();
        store
            .insert(Collection::Media, json!({ "title": "image" }))
            .unwrap();

        let posts = store.find(Collection::BlogPosts, None).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["title"], "post");
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .insert(Collection::CaseStudies, json!({ "n": i }))
                .unwrap();
        }
        let docs = store.find(Collection::CaseStudies, None).unwrap();
        let ns: Vec<i64> = docs.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_get_respects_filter() {
        let store = MemoryStore::new();
        let doc = store
            .insert(Collection::BlogPosts, json!({ "title": "Draft", "published": false }))
            .unwrap();
        let id = doc_id(&doc);

        let unfiltered = store.get(Collection::BlogPosts, &id, None).unwrap();
        assert!(unfiltered.is_some());

        let filter = Filter::published_only();
        let filtered = store.get(Collection::BlogPosts, &id, Some(&filter)).unwrap();
        assert!(filtered.is_none());
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let store = MemoryStore::new();
        let doc = store
            .insert(Collection::Resources, json!({ "title": "Old", "published": false }))
            .unwrap();
        let id = doc_id(&doc);

        let updated = store
            .update(
                Collection::Resources,
                &id,
                json!({ "published": true, "id": "forged" }),
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated["title"], "Old");
        assert_eq!(updated["published"], true);
        assert_eq!(updated["id"], id.as_str());
        assert!(updated["updatedAt"].is_string());
    }

    #[test]
    fn test_update_missing_id() {
        let store = MemoryStore::new();
        let result = store
            .update(Collection::Media, "missing", json!({ "alt": "x" }))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let doc = store
            .insert(Collection::Media, json!({ "filename": "a.png" }))
            .unwrap();
        let id = doc_id(&doc);

        assert!(store.delete(Collection::Media, &id).unwrap());
        assert!(!store.delete(Collection::Media, &id).unwrap());
        assert!(store.get(Collection::Media, &id, None).unwrap().is_none());
    }
}
