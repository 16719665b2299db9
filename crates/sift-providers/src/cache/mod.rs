//! Result cache implementations

pub mod moka;

pub use self::moka::MokaResultCache;
