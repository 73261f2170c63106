//! Multi-tier studio expansion cache and parallel catalog filter.
//!
//! Resolves parent game studios to their subsidiary studio names and catalog
//! slugs through memory, static registry, and SQLite tiers, and filters game
//! catalogs by developer/publisher membership in a resolved set.

pub mod cache;
pub mod config;
pub mod database;
pub mod errors;
pub mod filter;
pub mod maintenance;
pub mod models;
pub mod registry;
pub mod utils;
