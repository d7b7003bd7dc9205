//! Sample-document seeding.
//!
//! Loads one published and one draft document into each content
//! collection so the published-only filtering is visible immediately
//! after startup.

use quill_core::Collection;
use serde_json::json;

use crate::store::{DocumentStore, StoreResult};

/// Insert sample documents into every collection.
pub fn seed(store: &dyn DocumentStore) -> StoreResult<()> {
    store.insert(
        Collection::BlogPosts,
        json!({
            "title": "Welcome to the Quill CMS",
            "slug": "welcome-to-the-quill-cms",
            "description": "Getting started with the content backend",
            "date": "2024-02-12",
            "tags": ["cms", "welcome"],
            "published": true,
        }),
    )?;
    store.insert(
        Collection::BlogPosts,
        json!({
            "title": "Draft: roadmap notes",
            "slug": "draft-roadmap-notes",
            "description": "Unpublished planning notes",
            "date": "2024-02-13",
            "published": false,
        }),
    )?;

    store.insert(
        Collection::CaseStudies,
        json!({
            "title": "Modern Web Design",
            "slug": "modern-web-design",
            "client": "Example Client Inc.",
            "date": "2024-02-01",
            "published": true,
        }),
    )?;
    store.insert(
        Collection::CaseStudies,
        json!({
            "title": "Unreleased engagement",
            "slug": "unreleased-engagement",
            "client": "Confidential",
            "date": "2024-02-02",
            "published": false,
        }),
    )?;

    store.insert(
        Collection::Resources,
        json!({
            "title": "Getting Started Guide",
            "slug": "getting-started-guide",
            "category": "guides",
            "date": "2024-01-20",
            "published": true,
        }),
    )?;
    store.insert(
        Collection::Resources,
        json!({
            "title": "Internal tooling survey",
            "slug": "internal-tooling-survey",
            "category": "tools",
            "date": "2024-01-21",
            "published": false,
        }),
    )?;

    store.insert(
        Collection::Media,
        json!({
            "filename": "hero.png",
            "alt": "Hero image",
            "published": true,
        }),
    )?;

    Ok(())
}
