//! Per-collection CRUD endpoints.
//!
//! Every handler runs the same pipeline: authenticate the request, ask the
//! access policy for a decision, and only then touch the store, with the
//! decision's filter merged into any read.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use quill_core::access::{combine_filters, AccessDecision, AccessPolicy, Filter};
use quill_core::{Collection, Operation};
use serde_json::Value;

use crate::error::AppError;
use crate::json::{DeleteResponse, DocumentListResponse};
use crate::AppState;

/// Document CRUD routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/:collection",
            get(list_documents).post(create_document),
        )
        .route(
            "/api/:collection/:id",
            get(get_document)
                .patch(update_document)
                .delete(delete_document),
        )
}

/// Run authentication and policy evaluation for one request.
///
/// Returns the effective policy filter on allow; a denial becomes the
/// unauthorized response before any store call.
fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    collection: Collection,
    operation: Operation,
    admin_override: bool,
) -> Result<Option<Filter>, AppError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let identity = state.authenticator.authenticate(authorization);

    match AccessPolicy::evaluate(&identity, collection, operation, admin_override) {
        AccessDecision::Allowed { filter } => Ok(filter),
        AccessDecision::Denied { reason } => Err(AppError::Unauthorized(reason)),
    }
}

/// Interpret a query-string value as a JSON scalar.
///
/// `?published=true` should match a boolean field, not the string "true".
fn coerce_query_value(raw: &str) -> Value {
    if raw == "true" {
        return Value::Bool(true);
    }
    if raw == "false" {
        return Value::Bool(false);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    Value::String(raw.to_string())
}

/// Build the caller-supplied equality filter from query parameters.
///
/// The `admin` key is the override flag, not a field constraint.
fn user_filter(params: &HashMap<String, String>) -> Option<Filter> {
    let mut filter: Option<Filter> = None;
    for (key, raw) in params {
        if key == "admin" {
            continue;
        }
        let condition = Filter::eq(key.clone(), coerce_query_value(raw));
        filter = Some(match filter {
            Some(f) => f.and(condition),
            None => condition,
        });
    }
    filter
}

fn admin_override(params: &HashMap<String, String>) -> bool {
    matches!(params.get("admin").map(String::as_str), Some("true") | Some("1"))
}

/// List documents in a collection.
async fn list_documents(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<DocumentListResponse>, AppError> {
    let collection: Collection = collection.parse()?;
    let policy_filter = authorize(
        &state,
        &headers,
        collection,
        Operation::Read,
        admin_override(&params),
    )?;

    let effective = combine_filters(user_filter(&params), policy_filter);
    let docs = state.store.find(collection, effective.as_ref())?;
    Ok(Json(DocumentListResponse::new(docs)))
}

/// Fetch one document by id.
async fn get_document(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let collection: Collection = collection.parse()?;
    let policy_filter = authorize(
        &state,
        &headers,
        collection,
        Operation::Read,
        admin_override(&params),
    )?;

    let doc = state
        .store
        .get(collection, &id, policy_filter.as_ref())?
        .ok_or_else(|| AppError::NotFound(format!("document not found: {id}")))?;
    Ok(Json(doc))
}

/// Create a document.
async fn create_document(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let collection: Collection = collection.parse()?;
    authorize(&state, &headers, collection, Operation::Create, false)?;

    let doc = state.store.insert(collection, body)?;
    let id = doc["id"].as_str().unwrap_or_default();
    tracing::info!(%collection, %id, "document created");
    Ok((StatusCode::CREATED, Json(doc)))
}

/// Update a document.
async fn update_document(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let collection: Collection = collection.parse()?;
    authorize(&state, &headers, collection, Operation::Update, false)?;

    let doc = state
        .store
        .update(collection, &id, patch)?
        .ok_or_else(|| AppError::NotFound(format!("document not found: {id}")))?;
    tracing::info!(%collection, %id, "document updated");
    Ok(Json(doc))
}

/// Delete a document.
async fn delete_document(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, AppError> {
    let collection: Collection = collection.parse()?;
    authorize(&state, &headers, collection, Operation::Delete, false)?;

    if !state.store.delete(collection, &id)? {
        return Err(AppError::NotFound(format!("document not found: {id}")));
    }
    tracing::info!(%collection, %id, "document deleted");
    Ok(Json(DeleteResponse { deleted: true, id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_query_value() {
        assert_eq!(coerce_query_value("true"), Value::Bool(true));
        assert_eq!(coerce_query_value("false"), Value::Bool(false));
        assert_eq!(coerce_query_value("42"), Value::from(42));
        assert_eq!(coerce_query_value("guides"), Value::from("guides"));
    }

    #[test]
    fn test_admin_override_parsing() {
        let mut params = HashMap::new();
        assert!(!admin_override(&params));

        params.insert("admin".to_string(), "true".to_string());
        assert!(admin_override(&params));

        params.insert("admin".to_string(), "1".to_string());
        assert!(admin_override(&params));

        params.insert("admin".to_string(), "yes".to_string());
        assert!(!admin_override(&params));
    }

    #[test]
    fn test_user_filter_excludes_admin_key() {
        let mut params = HashMap::new();
        params.insert("admin".to_string(), "true".to_string());
        params.insert("category".to_string(), "guides".to_string());

        let filter = user_filter(&params).unwrap();
        assert_eq!(filter.conditions().len(), 1);
        assert_eq!(filter.conditions()[0].field, "category");
    }

    #[test]
    fn test_user_filter_empty() {
        assert!(user_filter(&HashMap::new()).is_none());
    }
}
