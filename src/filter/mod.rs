//! Parallel batch filter for game catalogs
//!
//! Classifies an in-memory catalog by developer/publisher membership in a
//! resolved subsidiary set. Large catalogs split into contiguous chunks
//! evaluated on separate tasks and joined back in input order; a catalog
//! that fits a single chunk is evaluated inline.

use std::collections::HashSet;
use std::sync::Arc;

use futures::Stream;
use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::errors::AppResult;
use crate::models::{GameRecord, StudioFilterType};
use crate::utils::normalize::StudioNameNormalizer;

/// Chunked fan-out/fan-in filter over game catalogs
#[derive(Debug, Clone)]
pub struct StudioFilterEngine {
    normalizer: StudioNameNormalizer,
    min_chunk_size: usize,
}

impl StudioFilterEngine {
    pub fn new(config: &FilterConfig) -> AppResult<Self> {
        Ok(Self {
            normalizer: StudioNameNormalizer::new()?,
            min_chunk_size: config.min_chunk_size.max(1),
        })
    }

    /// Normalize the resolved studio set once; chunks share the result.
    fn normalized_set(&self, expanded_studios: &HashSet<String>) -> HashSet<String> {
        expanded_studios
            .iter()
            .map(|name| self.normalizer.normalize(name))
            .collect()
    }

    fn chunk_size(&self, total: usize) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4);
        (total / (2 * cores)).max(self.min_chunk_size)
    }

    fn matches(
        normalizer: &StudioNameNormalizer,
        studio_set: &HashSet<String>,
        game: &GameRecord,
        filter_type: StudioFilterType,
    ) -> bool {
        let any_credit = |credits: &[String]| {
            credits
                .iter()
                .any(|name| studio_set.contains(&normalizer.normalize(name)))
        };
        match filter_type {
            StudioFilterType::Developer => any_credit(&game.developers),
            StudioFilterType::Publisher => any_credit(&game.publishers),
            StudioFilterType::Both => any_credit(&game.developers) || any_credit(&game.publishers),
        }
    }

    /// Keep the games whose credits intersect `expanded_studios`.
    ///
    /// An empty studio set passes the catalog through unchanged. Output
    /// preserves the input's relative order for any chunking. A chunk task
    /// that fails is logged and its games are skipped.
    pub async fn filter_by_studios(
        &self,
        games: Vec<GameRecord>,
        expanded_studios: &HashSet<String>,
        filter_type: StudioFilterType,
    ) -> Vec<GameRecord> {
        if expanded_studios.is_empty() || games.is_empty() {
            return games;
        }

        let total = games.len();
        let chunk_size = self.chunk_size(total);
        let studio_set = Arc::new(self.normalized_set(expanded_studios));

        if total <= chunk_size {
            return games
                .into_iter()
                .filter(|game| Self::matches(&self.normalizer, &studio_set, game, filter_type))
                .collect();
        }

        let mut chunks: Vec<Vec<GameRecord>> = Vec::with_capacity(total / chunk_size + 1);
        let mut iter = games.into_iter();
        loop {
            let chunk: Vec<GameRecord> = iter.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            chunks.push(chunk);
        }

        let mut tasks = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let studio_set = Arc::clone(&studio_set);
            let normalizer = self.normalizer.clone();
            tasks.push(tokio::spawn(async move {
                chunk
                    .into_iter()
                    .filter(|game| Self::matches(&normalizer, &studio_set, game, filter_type))
                    .collect::<Vec<_>>()
            }));
        }

        let mut filtered = Vec::new();
        for (index, joined) in futures::future::join_all(tasks)
            .await
            .into_iter()
            .enumerate()
        {
            match joined {
                Ok(mut kept) => filtered.append(&mut kept),
                Err(e) => {
                    warn!(chunk = index, error = %e, "filter chunk task failed, skipping its games");
                }
            }
        }

        debug!(total, kept = filtered.len(), "catalog filter complete");
        filtered
    }

    /// Same matching semantics as [`filter_by_studios`], emitted as
    /// incrementally filtered batches.
    ///
    /// Batches with zero matches are suppressed rather than emitted empty.
    /// A zero `batch_size` is clamped to 1.
    ///
    /// [`filter_by_studios`]: StudioFilterEngine::filter_by_studios
    pub fn filter_by_studios_stream(
        &self,
        games: Vec<GameRecord>,
        expanded_studios: &HashSet<String>,
        filter_type: StudioFilterType,
        batch_size: usize,
    ) -> impl Stream<Item = Vec<GameRecord>> {
        let pass_through = expanded_studios.is_empty();
        let studio_set = self.normalized_set(expanded_studios);
        let normalizer = self.normalizer.clone();
        let batch_size = batch_size.max(1);

        async_stream::stream! {
            let mut iter = games.into_iter();
            loop {
                let batch: Vec<GameRecord> = iter.by_ref().take(batch_size).collect();
                if batch.is_empty() {
                    break;
                }
                let kept: Vec<GameRecord> = if pass_through {
                    batch
                } else {
                    batch
                        .into_iter()
                        .filter(|game| Self::matches(&normalizer, &studio_set, game, filter_type))
                        .collect()
                };
                if !kept.is_empty() {
                    yield kept;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    fn engine(min_chunk_size: usize) -> StudioFilterEngine {
        StudioFilterEngine::new(&FilterConfig { min_chunk_size }).unwrap()
    }

    fn game(id: i64, developer: &str, publisher: &str) -> GameRecord {
        GameRecord {
            id,
            name: format!("Game {id}"),
            developers: vec![developer.to_string()],
            publishers: vec![publisher.to_string()],
        }
    }

    fn set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn ids(games: &[GameRecord]) -> Vec<i64> {
        games.iter().map(|g| g.id).collect()
    }

    #[tokio::test]
    async fn empty_studio_set_passes_catalog_through() {
        let engine = engine(25);
        let games = vec![
            game(1, "Naughty Dog", "Sony"),
            game(2, "Some Indie", "Self"),
        ];

        let kept = engine
            .filter_by_studios(games, &HashSet::new(), StudioFilterType::Both)
            .await;
        assert_eq!(ids(&kept), vec![1, 2]);
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty() {
        let engine = engine(25);
        let kept = engine
            .filter_by_studios(Vec::new(), &set(&["Naughty Dog"]), StudioFilterType::Both)
            .await;
        assert!(kept.is_empty());
    }

    #[tokio::test]
    async fn filter_type_selects_credit_side() {
        let engine = engine(25);
        let games = vec![
            game(1, "Naughty Dog", "Indie Pub"),
            game(2, "Indie Dev", "Naughty Dog"),
            game(3, "Indie Dev", "Indie Pub"),
        ];
        let studios = set(&["Naughty Dog"]);

        let by_dev = engine
            .filter_by_studios(games.clone(), &studios, StudioFilterType::Developer)
            .await;
        assert_eq!(ids(&by_dev), vec![1]);

        let by_pub = engine
            .filter_by_studios(games.clone(), &studios, StudioFilterType::Publisher)
            .await;
        assert_eq!(ids(&by_pub), vec![2]);

        let by_both = engine
            .filter_by_studios(games, &studios, StudioFilterType::Both)
            .await;
        assert_eq!(ids(&by_both), vec![1, 2]);
    }

    #[tokio::test]
    async fn suffix_variants_match_after_normalization() {
        let engine = engine(25);
        let games = vec![
            game(1, "Bethesda Game Studios", "Bethesda Softworks"),
            game(2, "bethesda game studios", "whoever"),
            game(3, "FromSoftware, Inc.", "Bandai Namco"),
            game(4, "Unrelated Team", "Unrelated"),
        ];
        // "Bethesda Game Studios" normalizes to "bethesdagame"
        let studios = set(&["Bethesda Game Studios", "FromSoftware"]);

        let kept = engine
            .filter_by_studios(games, &studios, StudioFilterType::Developer)
            .await;
        assert_eq!(ids(&kept), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn order_is_preserved_across_chunks() {
        // min_chunk_size of 1 forces the parallel path at any core count
        let engine = engine(1);
        let games: Vec<GameRecord> = (0..97)
            .map(|id| {
                if id % 3 == 0 {
                    game(id, "Naughty Dog", "Sony")
                } else {
                    game(id, "Other Dev", "Other Pub")
                }
            })
            .collect();

        let kept = engine
            .filter_by_studios(games, &set(&["Naughty Dog"]), StudioFilterType::Developer)
            .await;

        let expected: Vec<i64> = (0..97).filter(|id| id % 3 == 0).collect();
        assert_eq!(ids(&kept), expected);
    }

    #[tokio::test]
    async fn inline_and_chunked_paths_agree() {
        let games: Vec<GameRecord> = (0..40)
            .map(|id| {
                if id % 2 == 0 {
                    game(id, "Firaxis Games", "2K Games")
                } else {
                    game(id, "Someone Else", "Another")
                }
            })
            .collect();
        let studios = set(&["Firaxis Games"]);

        let inline = engine(1000)
            .filter_by_studios(games.clone(), &studios, StudioFilterType::Developer)
            .await;
        let chunked = engine(1)
            .filter_by_studios(games, &studios, StudioFilterType::Developer)
            .await;

        assert_eq!(ids(&inline), ids(&chunked));
        assert_eq!(inline.len(), 20);
    }

    #[tokio::test]
    async fn stream_suppresses_empty_batches() {
        let engine = engine(25);
        let games = vec![
            game(1, "Naughty Dog", "Sony"),
            game(2, "Naughty Dog", "Sony"),
            game(3, "Nobody", "Nobody"),
            game(4, "Nobody", "Nobody"),
            game(5, "Naughty Dog", "Sony"),
            game(6, "Nobody", "Nobody"),
        ];

        let stream = engine.filter_by_studios_stream(
            games,
            &set(&["Naughty Dog"]),
            StudioFilterType::Developer,
            2,
        );
        let batches: Vec<Vec<GameRecord>> = stream.collect().await;

        // The all-miss middle batch is not emitted
        assert_eq!(batches.len(), 2);
        assert_eq!(ids(&batches[0]), vec![1, 2]);
        assert_eq!(ids(&batches[1]), vec![5]);
    }

    #[tokio::test]
    async fn stream_clamps_zero_batch_size() {
        let engine = engine(25);
        let games = vec![game(1, "Naughty Dog", "Sony"), game(2, "Naughty Dog", "Sony")];

        let stream = engine.filter_by_studios_stream(
            games,
            &set(&["Naughty Dog"]),
            StudioFilterType::Developer,
            0,
        );
        let batches: Vec<Vec<GameRecord>> = stream.collect().await;

        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 1));
    }

    #[tokio::test]
    async fn stream_passes_through_on_empty_set() {
        let engine = engine(25);
        let games = vec![game(1, "Anyone", "Anyone"), game(2, "Anyone", "Anyone")];

        let stream =
            engine.filter_by_studios_stream(games, &HashSet::new(), StudioFilterType::Both, 10);
        let batches: Vec<Vec<GameRecord>> = stream.collect().await;

        assert_eq!(batches.len(), 1);
        assert_eq!(ids(&batches[0]), vec![1, 2]);
    }
}
