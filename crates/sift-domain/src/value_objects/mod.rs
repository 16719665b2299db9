//! Domain Value Objects
//!
//! Immutable value objects that flow through one search request. None of
//! them outlive the request that created them.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SearchParams`] | Raw inbound query-string parameters |
//! | [`SearchRequest`] | Normalized, validated request |
//! | [`RawHit`] | One document as returned by the external engine |
//! | [`NormalizedResult`] | Canonical result record after transformation and scoring |
//! | [`Entity`] | Lightweight named entity extracted from a snippet |
//! | [`SearchResponse`] | JSON envelope returned to the UI |
//! | [`ScoringWeights`] | Tunable composite-score weights |
//! | [`SearchLimits`] | Tunable request limits |

/// Tunable weights and limits
pub mod config;
/// Raw engine output
pub mod hit;
/// Inbound parameters and the normalized request
pub mod request;
/// Response envelopes
pub mod response;
/// Normalized result records and entities
pub mod result;

pub use config::{ScoringWeights, SearchLimits};
pub use hit::{EngineResponse, Highlight, RawDocument, RawHit, RawImage};
pub use request::{PageCursor, SearchKind, SearchParams, SearchRequest};
pub use response::{ImageSearchResponse, SearchEnvelope, SearchResponse};
pub use result::{Entity, EntityType, ImageResult, NormalizedResult};
