//! Resolve-then-filter pipeline scenarios
//!
//! Drives the public flow a catalog consumer uses: resolve a parent studio
//! (or game series) to its expanded studio set, then filter a game catalog
//! against that set by developer or publisher credits.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tempfile::TempDir;

use studio_cache::{
    cache::StudioCacheService,
    config::{CacheConfig, DatabaseConfig, FilterConfig},
    database::Database,
    filter::StudioFilterEngine,
    models::{GameRecord, StudioFilterType},
    registry::StudioRegistry,
};

/// RUST_LOG-aware log output for debugging; repeat calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn create_test_database(dir: &TempDir) -> Database {
    init_tracing();
    let url = format!("sqlite://{}", dir.path().join("expansions.db").display());
    let database = Database::new(&DatabaseConfig {
        url,
        max_connections: Some(2),
    })
    .await
    .expect("Failed to create test database");
    database.migrate().await.expect("Failed to run migrations");
    database
}

fn build_service(database: Database) -> StudioCacheService<Database> {
    let config = CacheConfig {
        memory_capacity: 50,
        ttl: Duration::from_secs(3600),
    };
    StudioCacheService::new(database, Arc::new(StudioRegistry::new()), &config)
        .expect("Failed to build cache service")
}

fn engine() -> StudioFilterEngine {
    init_tracing();
    StudioFilterEngine::new(&FilterConfig { min_chunk_size: 25 })
        .expect("Failed to build filter engine")
}

fn game(id: i64, name: &str, developers: &[&str], publishers: &[&str]) -> GameRecord {
    GameRecord {
        id,
        name: name.to_string(),
        developers: developers.iter().map(|s| s.to_string()).collect(),
        publishers: publishers.iter().map(|s| s.to_string()).collect(),
    }
}

fn ids(games: &[GameRecord]) -> Vec<i64> {
    games.iter().map(|g| g.id).collect()
}

#[tokio::test]
async fn resolved_expansion_drives_catalog_filtering() {
    let dir = TempDir::new().unwrap();
    let service = build_service(create_test_database(&dir).await);

    // Alias resolution: "ZeniMax" lands on the bethesda family
    let resolved = service.resolve("  ZeniMax  ").await.expect("registry entry");
    assert!(resolved.display_names.contains("Bethesda Game Studios"));

    let catalog = vec![
        game(1, "Starfield", &["Bethesda Game Studios"], &["Bethesda Softworks"]),
        game(2, "DOOM Eternal", &["id Software, Inc."], &["Bethesda Softworks"]),
        game(3, "Deathloop", &["Arkane"], &["Bethesda Softworks"]),
        game(4, "Stray", &["BlueTwelve Studio"], &["Annapurna Interactive"]),
        game(5, "The Witcher 3", &["CD PROJEKT RED"], &["CD PROJEKT"]),
    ];

    let kept = engine()
        .filter_by_studios(catalog, &resolved.display_names, StudioFilterType::Developer)
        .await;
    assert_eq!(ids(&kept), vec![1, 2, 3]);
}

#[tokio::test]
async fn stored_expansion_feeds_the_filter_after_write() {
    let dir = TempDir::new().unwrap();
    let service = build_service(create_test_database(&dir).await);

    let names = ["Team Ouroboros", "Hollow Moon Games"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    service
        .store(
            "Ouroboros Collective",
            names,
            "team-ouroboros,hollow-moon-games".to_string(),
        )
        .await;

    let expanded = service
        .expanded_studios("ouroboros collective")
        .await
        .expect("written expansion resolves");

    let catalog = vec![
        game(10, "Serpent Cycle", &["Team Ouroboros"], &["Ouroboros Collective"]),
        game(11, "Luna Hollow", &["Hollow Moon Games"], &["Ouroboros Collective"]),
        game(12, "Unrelated Racer", &["Speedline Arts"], &["Speedline Arts"]),
    ];

    let kept = engine()
        .filter_by_studios(catalog, &expanded, StudioFilterType::Developer)
        .await;
    assert_eq!(ids(&kept), vec![10, 11]);
}

#[tokio::test]
async fn game_series_lookup_feeds_the_developer_filter() {
    let registry = StudioRegistry::new();
    let studios = registry
        .studios_for_game_series("Elden Ring")
        .expect("known series");
    let expanded = studios
        .iter()
        .map(|s| s.display_name.clone())
        .collect();

    let catalog = vec![
        game(1, "Elden Ring", &["FromSoftware, Inc."], &["Bandai Namco"]),
        game(2, "Dark Souls III", &["FromSoftware"], &["Bandai Namco"]),
        game(3, "Lies of P", &["Round8 Studio"], &["Neowiz"]),
    ];

    let kept = engine()
        .filter_by_studios(catalog, &expanded, StudioFilterType::Developer)
        .await;
    assert_eq!(ids(&kept), vec![1, 2]);
}

#[tokio::test]
async fn catalog_json_tolerates_extra_and_missing_fields() {
    let payload = r#"[
        {
            "id": 1,
            "name": "Hi-Fi Rush",
            "developers": ["Tango Gameworks"],
            "publishers": ["Bethesda Softworks"],
            "rating": 89,
            "genres": ["action", "rhythm"]
        },
        {
            "id": 2,
            "name": "Mystery Demo",
            "developers": ["Tango Gameworks"]
        },
        {
            "id": 3,
            "name": "Unknown Jam Entry",
            "publishers": ["Self-Published"]
        }
    ]"#;

    let catalog: Vec<GameRecord> = serde_json::from_str(payload).expect("catalog parses");
    assert!(catalog[1].publishers.is_empty());
    assert!(catalog[2].developers.is_empty());

    let expanded = ["Tango Gameworks".to_string()].into_iter().collect();

    // Missing credit lists simply never match
    let by_developer = engine()
        .filter_by_studios(catalog.clone(), &expanded, StudioFilterType::Developer)
        .await;
    assert_eq!(ids(&by_developer), vec![1, 2]);

    let by_publisher = engine()
        .filter_by_studios(catalog, &expanded, StudioFilterType::Publisher)
        .await;
    assert!(by_publisher.is_empty());
}

#[tokio::test]
async fn filter_type_selects_which_credits_count() {
    let catalog = vec![
        game(1, "Published Only", &["External Partner"], &["Raven Software"]),
        game(2, "Developed Only", &["Raven Software"], &["Someone Else"]),
    ];
    let expanded = ["Raven Software".to_string()].into_iter().collect();

    let engine = engine();
    let by_publisher = engine
        .filter_by_studios(catalog.clone(), &expanded, StudioFilterType::Publisher)
        .await;
    assert_eq!(ids(&by_publisher), vec![1]);

    let by_developer = engine
        .filter_by_studios(catalog.clone(), &expanded, StudioFilterType::Developer)
        .await;
    assert_eq!(ids(&by_developer), vec![2]);

    let by_both = engine
        .filter_by_studios(catalog, &expanded, StudioFilterType::Both)
        .await;
    assert_eq!(ids(&by_both), vec![1, 2]);
}

#[tokio::test]
async fn stream_batches_match_the_bulk_filter() {
    let catalog: Vec<GameRecord> = (0..60)
        .map(|id| {
            let dev = if id % 2 == 0 { "FromSoftware" } else { "Spiders" };
            game(id, &format!("Entry {id}"), &[dev], &["Various"])
        })
        .collect();
    let expanded = ["FromSoftware".to_string()].into_iter().collect();

    let engine = engine();
    let bulk = engine
        .filter_by_studios(catalog.clone(), &expanded, StudioFilterType::Developer)
        .await;

    let stream =
        engine.filter_by_studios_stream(catalog, &expanded, StudioFilterType::Developer, 8);
    tokio::pin!(stream);

    let mut streamed = Vec::new();
    while let Some(batch) = stream.next().await {
        assert!(!batch.is_empty(), "empty batches must be suppressed");
        assert!(batch.len() <= 8);
        streamed.extend(batch);
    }

    assert_eq!(ids(&streamed), ids(&bulk));
    assert_eq!(streamed.len(), 30);
}
