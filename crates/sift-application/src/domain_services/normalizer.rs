//! Query Normalizer
//!
//! Fails closed: anything that cannot become a valid [`SearchRequest`] is
//! answered locally with an empty envelope and never reaches the engine.

use sift_domain::constants::GERMAN_LANGUAGE;
use sift_domain::value_objects::{
    PageCursor, SearchKind, SearchLimits, SearchParams, SearchRequest,
};

/// Outcome of normalizing raw caller parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedQuery {
    /// Parameters are valid; run the search
    Search(SearchRequest),
    /// Trimmed query is absent or shorter than the minimum length
    TooShort {
        /// Normalized page
        page: u32,
        /// Normalized page size
        size: u32,
    },
    /// The `type` parameter names no known search kind
    UnknownKind {
        /// Normalized page
        page: u32,
        /// Normalized page size
        size: u32,
    },
}

/// Turns [`SearchParams`] into a [`SearchRequest`]
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    limits: SearchLimits,
}

impl QueryNormalizer {
    /// Create a normalizer bound to the given limits
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Normalize raw parameters
    ///
    /// - query is trimmed and must have at least `min_query_length` chars
    /// - negative pages become 0
    /// - page size defaults to `default_page_size` and is clamped to
    ///   `[1, max_page_size]`
    /// - language is `"de"` when the hint starts with `de`, else the fallback
    /// - an undecodable cursor is dropped
    pub fn normalize(&self, params: &SearchParams) -> NormalizedQuery {
        let page = Self::page(params.page);
        let size = self.page_size(params.size);

        let query = params.query.as_deref().map(str::trim).unwrap_or_default();
        if query.chars().count() < self.limits.min_query_length {
            return NormalizedQuery::TooShort { page, size };
        }

        let Some(kind) = SearchKind::from_param(params.kind.as_deref()) else {
            return NormalizedQuery::UnknownKind { page, size };
        };

        let cursor = params
            .cursor
            .as_deref()
            .map(str::trim)
            .filter(|token| PageCursor::decode(token).is_some())
            .map(str::to_string);

        NormalizedQuery::Search(SearchRequest::new(
            query,
            page,
            size,
            self.language(params),
            cursor,
            kind,
        ))
    }

    fn page(raw: Option<i64>) -> u32 {
        raw.map_or(0, |page| u32::try_from(page.max(0)).unwrap_or(u32::MAX))
    }

    fn page_size(&self, raw: Option<i64>) -> u32 {
        let max = self.limits.max_page_size.max(1);
        match raw {
            None => self.limits.default_page_size.clamp(1, max),
            Some(size) => {
                let size = size.clamp(1, i64::from(max));
                u32::try_from(size).unwrap_or(max)
            }
        }
    }

    fn language(&self, params: &SearchParams) -> String {
        let hint = params
            .lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .or(params.accept_language.as_deref().map(str::trim));

        match hint {
            Some(hint) if hint.to_ascii_lowercase().starts_with(GERMAN_LANGUAGE) => {
                GERMAN_LANGUAGE.to_string()
            }
            _ => self.limits.fallback_language.clone(),
        }
    }
}
