//! Shared helpers for the studio cache
//!
//! - `normalize` for cache-key and studio-name normalization

pub mod normalize;
