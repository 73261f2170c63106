//! Centralized error handling for the studio cache
//!
//! Unifies the error types used across the crate. The persistence boundary
//! has its own `StoreError` so the cache orchestrator can decide how store
//! failures degrade (reads become tier misses, writes are logged and
//! swallowed) without inspecting sqlx internals.
//!
//! # Usage
//!
//! ```rust
//! use studio_cache::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for persistent-store Results
pub type StoreResult<T> = Result<T, StoreError>;
