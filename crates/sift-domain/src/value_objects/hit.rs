//! Raw engine output
//!
//! These records model the engine response with every document field
//! optional. The engine adapter fills them leniently; the result transformer
//! applies the default-substitution policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One image attached to a page document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawImage {
    /// Image source URL
    pub url: String,
    /// Alternative text
    pub alt: Option<String>,
    /// Pixel width, when known
    pub width: Option<u32>,
    /// Pixel height, when known
    pub height: Option<u32>,
}

/// Document fields of a raw hit, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    /// Canonical page URL
    pub url: Option<String>,
    /// Page title
    pub title: Option<String>,
    /// Full page text (may contain markup)
    pub content: Option<String>,
    /// Document language code
    pub language: Option<String>,
    /// Last update / crawl timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Tags
    pub tags: Vec<String>,
    /// Meta keywords
    pub keywords: Vec<String>,
    /// View counter
    pub views: Option<u64>,
    /// Images found on the page
    pub images: Vec<RawImage>,
}

/// Highlighted fragments returned next to a hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    /// Title fragments
    pub title: Vec<String>,
    /// Content fragments
    pub content: Vec<String>,
}

/// Value Object: Raw Hit
///
/// Read-only input to the result transformer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHit {
    /// Engine document identifier
    pub id: String,
    /// Engine relevance score
    pub score: Option<f64>,
    /// Document fields
    pub document: RawDocument,
    /// Highlighted fragments
    pub highlight: Highlight,
    /// Sort values, used to build continuation cursors
    pub sort: Vec<Value>,
}

/// Parsed engine response: total match count plus the hit page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineResponse {
    /// Total number of matching documents
    pub total: u64,
    /// Hits of the requested page, in engine order
    pub hits: Vec<RawHit>,
}
