//! Entity extractor implementations
//!
//! | Extractor | Description |
//! |-----------|-------------|
//! | [`HeuristicEntityExtractor`] | Rule-based extraction for English and German text |
//! | [`NullEntityExtractor`] | Never finds anything |

#[cfg(feature = "entities-heuristic")]
pub mod heuristic;
pub mod null;

#[cfg(feature = "entities-heuristic")]
pub use heuristic::HeuristicEntityExtractor;
pub use null::NullEntityExtractor;
