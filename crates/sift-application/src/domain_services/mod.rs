//! Domain Services
//!
//! The stages of the per-request ranking pipeline. Each stage is a small,
//! synchronous value that is built once from configuration and shared by
//! every request.
//!
//! | Stage | Description |
//! |-------|-------------|
//! | [`QueryNormalizer`] | Validates raw parameters into a [`SearchRequest`](sift_domain::SearchRequest) |
//! | [`ResultTransformer`] | Maps raw hits to normalized results with safe defaults |
//! | [`deduplicate`] | Keeps the first result per URL |
//! | [`EntityEnricher`] | Extracts entities for the leading results only |
//! | [`CompositeScorer`] | Adds the composite ranking score |
//! | [`SuggestionGenerator`] | Builds refinement suggestions from the result vocabulary |

/// Deduplication by canonical URL
pub mod dedup;
/// Bounded entity extraction
pub mod entities;
/// Query normalization and validation
pub mod normalizer;
/// Composite scoring
pub mod scoring;
/// Suggestion generation
pub mod suggestions;
/// Raw hit to normalized result mapping
pub mod transform;

pub use dedup::deduplicate;
pub use entities::EntityEnricher;
pub use normalizer::{NormalizedQuery, QueryNormalizer};
pub use scoring::{CompositeScorer, ScoreBreakdown};
pub use suggestions::SuggestionGenerator;
pub use transform::{ResultTransformer, flatten_images, strip_markup};
