//! Error type definitions for the studio cache
//!
//! This module defines all error types used throughout the crate,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the crate.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Persistent store layer errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file I/O errors
    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration parse errors
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Invalid cron expression for the expiry sweep schedule
    #[error("Schedule error: {0}")]
    Schedule(#[from] cron::error::Error),

    /// Invalid normalization pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Persistent store specific errors
///
/// Raised by [`ExpansionStore`](crate::database::ExpansionStore)
/// implementations. The cache orchestrator maps read-side failures to tier
/// misses and write-side failures to logged, swallowed errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row payload (de)serialization failures
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persisted row that cannot be decoded
    #[error("Corrupt row for key '{key}': {reason}")]
    CorruptRow { key: String, reason: String },
}
