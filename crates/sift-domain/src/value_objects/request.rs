//! Search request value objects

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw inbound parameters, exactly as the caller sent them
///
/// Every field is optional and unvalidated. The query normalizer turns this
/// into a [`SearchRequest`] or rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query (`q`)
    pub query: Option<String>,
    /// Zero-based page number (`page`)
    pub page: Option<i64>,
    /// Requested page size (`size`)
    pub size: Option<i64>,
    /// Explicit language hint (`lang`)
    pub lang: Option<String>,
    /// Continuation cursor from a previous response (`cursor`)
    pub cursor: Option<String>,
    /// Search type (`type`): `web` or `image`
    pub kind: Option<String>,
    /// `Accept-Language` header, used when `lang` is absent
    pub accept_language: Option<String>,
}

impl SearchParams {
    /// Create params carrying only a query
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// What kind of hits the caller wants back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Ranked web pages
    #[default]
    Web,
    /// Images flattened out of matching pages
    Image,
}

impl SearchKind {
    /// Parse the `type` parameter; absent means `Web`, unknown means `None`
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            None | Some("") => Some(Self::Web),
            Some(v) if v.eq_ignore_ascii_case("web") => Some(Self::Web),
            Some(v) if v.eq_ignore_ascii_case("image") => Some(Self::Image),
            Some(_) => None,
        }
    }

    /// Parameter spelling of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Image => "image",
        }
    }
}

/// Value Object: Normalized Search Request
///
/// Built once per inbound request by the query normalizer and never mutated.
/// The query is trimmed and long enough, the page size is within limits and
/// the language is one of the supported preferences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRequest {
    query: String,
    page: u32,
    page_size: u32,
    language: String,
    cursor: Option<String>,
    kind: SearchKind,
}

impl SearchRequest {
    /// Create a request from already-normalized parts
    pub fn new(
        query: impl Into<String>,
        page: u32,
        page_size: u32,
        language: impl Into<String>,
        cursor: Option<String>,
        kind: SearchKind,
    ) -> Self {
        Self {
            query: query.into(),
            page,
            page_size,
            language: language.into(),
            cursor,
            kind,
        }
    }

    /// Trimmed query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Zero-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Clamped page size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Preferred document language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Opaque continuation cursor, if the caller sent a valid one
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Requested search kind
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Offset of the first hit for offset pagination
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Decoded `search_after` values, when continuing from a cursor
    pub fn search_after(&self) -> Option<Vec<Value>> {
        self.cursor.as_deref().and_then(PageCursor::decode)
    }
}

/// Opaque continuation token wrapping the engine's sort values
///
/// Encoded as URL-safe base64 (no padding) of a JSON array, so it survives
/// a round trip through a query string unchanged.
pub struct PageCursor;

impl PageCursor {
    /// Encode sort values into a token; empty input has no cursor
    pub fn encode(sort_values: &[Value]) -> Option<String> {
        if sort_values.is_empty() {
            return None;
        }
        let json = serde_json::to_vec(sort_values).ok()?;
        Some(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a token back into sort values; anything malformed yields `None`
    pub fn decode(token: &str) -> Option<Vec<Value>> {
        let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
        let values: Vec<Value> = serde_json::from_slice(&bytes).ok()?;
        if values.is_empty() { None } else { Some(values) }
    }
}
