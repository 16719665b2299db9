//! Normalized result records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse class of an extracted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A person's name
    Person,
    /// A geographic place
    Place,
    /// A company, institution or acronym
    Organization,
    /// A numeric value
    Number,
    /// Anything name-like that fits no other class
    Other,
}

/// Value Object: Named Entity
///
/// Derived per request for display and scoring, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Entity surface text
    pub text: String,
    /// Entity class
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

impl Entity {
    /// Create a new entity
    pub fn new(text: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            text: text.into(),
            entity_type,
        }
    }
}

/// Value Object: Normalized Result
///
/// Created once per raw hit by the transformer, enriched with entities and
/// a composite score, then handed to the caller unchanged.
///
/// ## Business Rules
///
/// - `url` is unique within one response after deduplication
/// - `relevance_score` is the engine score and is never overwritten
/// - `composite_score` is computed by Sift on top of it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    /// Engine document id
    pub id: String,
    /// Canonical URL, the deduplication key
    pub url: String,
    /// Display title (highlighted, raw or URL)
    pub title: String,
    /// Display snippet (highlighted or markup-stripped prefix)
    pub snippet: String,
    /// Markup-stripped body text
    pub body: String,
    /// Document language
    pub language: String,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Tags, deduplicated in source order
    pub tags: Vec<String>,
    /// Keywords, deduplicated in source order
    pub keywords: Vec<String>,
    /// View counter (popularity proxy)
    pub views: u64,
    /// Highlighted title fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_title: Option<String>,
    /// Highlighted body fragments, joined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_body: Option<String>,
    /// Entities extracted from the snippet
    pub entities: Vec<Entity>,
    /// Engine relevance score
    pub relevance_score: f64,
    /// Sift composite score
    pub composite_score: f64,
    /// Engine sort values, kept for cursor construction
    #[serde(skip)]
    pub sort_values: Vec<serde_json::Value>,
}

/// One image search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    /// `<hit id>-<image url>`
    pub id: String,
    /// Image source URL
    pub image_url: String,
    /// URL of the page carrying the image
    pub page_url: String,
    /// Alternative text, falling back to the page title
    pub alt: String,
}
