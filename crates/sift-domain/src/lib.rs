//! # Sift Domain
//!
//! Core types and contracts for the Sift search front end.
//!
//! Sift does no indexing or retrieval of its own. It forwards a normalized
//! query to an external document-search engine, then re-ranks, deduplicates
//! and enriches the returned hits. This crate holds the vocabulary every other
//! layer speaks:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | `SearchRequest`, `RawHit`, `NormalizedResult`, `Entity`, response envelopes, tunable weights |
//! | [`ports`] | Provider traits for the search engine, entity extraction and result caching |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Default limits and scoring weights |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    EngineResponse, Entity, EntityType, Highlight, ImageResult, ImageSearchResponse,
    NormalizedResult, PageCursor, RawDocument, RawHit, RawImage, ScoringWeights, SearchEnvelope,
    SearchKind, SearchLimits, SearchParams, SearchRequest, SearchResponse,
};
