//! Response envelopes
//!
//! The caller always receives one of these shapes, on success and failure
//! alike.

use serde::{Deserialize, Serialize};

use super::result::{ImageResult, NormalizedResult};

/// Web search response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Ranked, deduplicated results
    pub hits: Vec<NormalizedResult>,
    /// Query refinement suggestions
    pub suggestions: Vec<String>,
    /// Total matching documents reported by the engine
    pub total: u64,
    /// Zero-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size actually used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// `ceil(total / size)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    /// Continuation cursor for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Failure marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Empty successful response (validation short-circuit, unknown type)
    pub fn empty(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        }
    }

    /// Empty failure response carrying an error marker
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Whether this envelope reports a failure
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Image search response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchResponse {
    /// Flattened image hits
    pub hits: Vec<ImageResult>,
    /// Number of flattened images
    pub total: u64,
    /// Zero-based page number
    pub page: u32,
    /// Page size actually used
    pub size: u32,
}

/// Either response shape, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchEnvelope {
    /// Web results
    Web(SearchResponse),
    /// Image results
    Image(ImageSearchResponse),
}

impl SearchEnvelope {
    /// Whether this envelope reports a failure
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Web(response) => response.is_failure(),
            Self::Image(_) => false,
        }
    }
}

impl From<SearchResponse> for SearchEnvelope {
    fn from(response: SearchResponse) -> Self {
        Self::Web(response)
    }
}

impl From<ImageSearchResponse> for SearchEnvelope {
    fn from(response: ImageSearchResponse) -> Self {
        Self::Image(response)
    }
}
