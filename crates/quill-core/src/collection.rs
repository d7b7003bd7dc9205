//! The closed set of document collections and operation kinds.

use crate::error::AccessError;
use std::fmt;
use std::str::FromStr;

/// A named document collection managed by the CMS.
///
/// The set is closed: collections are declared here, not registered at
/// runtime. Route parameters are parsed through [`FromStr`], so an unknown
/// slug is rejected before any access decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    /// Blog posts (title, content, date, tags, image).
    BlogPosts,
    /// Case studies (client, challenge, solution, results).
    CaseStudies,
    /// Resources (guides, articles, tutorials, tools).
    Resources,
    /// Uploaded media.
    Media,
}

impl Collection {
    /// All collections, in declaration order.
    pub const ALL: [Collection; 4] = [
        Collection::BlogPosts,
        Collection::CaseStudies,
        Collection::Resources,
        Collection::Media,
    ];

    /// The URL slug for this collection.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Collection::BlogPosts => "blog-posts",
            Collection::CaseStudies => "case-studies",
            Collection::Resources => "resources",
            Collection::Media => "media",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl FromStr for Collection {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog-posts" => Ok(Collection::BlogPosts),
            "case-studies" => Ok(Collection::CaseStudies),
            "resources" => Ok(Collection::Resources),
            "media" => Ok(Collection::Media),
            other => Err(AccessError::UnknownCollection(other.to_string())),
        }
    }
}

/// The kind of operation a request performs against a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Read operations (list and fetch-by-id).
    Read,
    /// Insert operations.
    Create,
    /// Update operations.
    Update,
    /// Delete operations.
    Delete,
}

impl Operation {
    /// Whether this operation mutates the store.
    pub fn is_write(&self) -> bool {
        !matches!(self, Operation::Read)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Operation::Read),
            "create" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => Err(AccessError::UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_slug_round_trip() {
        for collection in Collection::ALL {
            let parsed: Collection = collection.as_slug().parse().unwrap();
            assert_eq!(parsed, collection);
        }
    }

    #[test]
    fn test_unknown_collection_rejected() {
        let err = "pages".parse::<Collection>().unwrap_err();
        assert!(matches!(err, AccessError::UnknownCollection(_)));

        // Slugs are exact, not case-folded
        assert!("Blog-Posts".parse::<Collection>().is_err());
        assert!("blog-posts/".parse::<Collection>().is_err());
    }

    #[test]
    fn test_operation_write_classification() {
        assert!(!Operation::Read.is_write());
        assert!(Operation::Create.is_write());
        assert!(Operation::Update.is_write());
        assert!(Operation::Delete.is_write());
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("read".parse::<Operation>().unwrap(), Operation::Read);
        assert_eq!("delete".parse::<Operation>().unwrap(), Operation::Delete);
        assert!("merge".parse::<Operation>().is_err());
    }
}
