//! JSON response types for the HTTP gateway.
//!
//! List responses keep the `docs`/`totalDocs`/`totalPages` envelope the
//! original CMS clients consume.

use serde::Serialize;
use serde_json::Value;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Gateway version.
    pub version: String,
    /// Whether admin authentication is configured.
    pub auth_enabled: bool,
}

/// Document list response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListResponse {
    /// Visible documents.
    pub docs: Vec<Value>,
    /// Total visible document count.
    pub total_docs: usize,
    /// Total pages (pagination is not implemented; always 1).
    pub total_pages: usize,
}

impl DocumentListResponse {
    /// Wrap a result set in the list envelope.
    pub fn new(docs: Vec<Value>) -> Self {
        let total_docs = docs.len();
        Self {
            docs,
            total_docs,
            total_pages: 1,
        }
    }
}

/// Delete response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Whether a document was removed.
    pub deleted: bool,
    /// Id of the removed document.
    pub id: String,
}
