//! Typed views over bodies the reference validation service produces.
//!
//! The client never decodes these on its own; they are opt-in helpers for
//! callers that talk to that particular backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful `/validate` reply.
///
/// The service scrapes the target site's `<title>` and `<meta>` tags,
/// searches for sites with the same title/keywords, stores everything as RDF
/// and reports which stored documents share the target's properties.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidationReport {
    /// Host (netloc) of the validated URL.
    pub url: String,
    /// Turtle statements the service stored for this run.
    #[serde(default)]
    pub rdf: String,
    /// Scraped page metadata keyed by lowercased meta name (`:` replaced by `_`).
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// URLs returned by the similarity search.
    #[serde(default)]
    pub search_result: Vec<String>,
    /// Matching documents keyed by subject, or `None` when nothing matched.
    #[serde(default)]
    pub result: Option<Map<String, Value>>,
}

impl ValidationReport {
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }

    /// Subjects of stored documents that share the target's properties.
    pub fn matches(&self) -> impl Iterator<Item = &str> {
        self.result.iter().flat_map(|result| result.keys().map(String::as_str))
    }

    pub fn has_matches(&self) -> bool {
        self.result.as_ref().is_some_and(|result| !result.is_empty())
    }
}

/// Body of a failed `/validate` call (HTTP 500).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceErrorBody {
    pub error: String,
}
