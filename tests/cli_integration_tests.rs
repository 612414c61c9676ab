//! Integration Tests for the Command Loop
//!
//! Drives `execute` against a local mock of PokeAPI and counts upstream
//! requests to check that responses are served from the cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex::{
    api::CLIENT_USER_AGENT, execute, Outcome, PokeApiClient, PokedexError, Session, TimedCache,
};
use rand::rngs::mock::StepRng;
use serde::Deserialize;
use serde_json::json;

// == Mock PokeAPI ==

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<AtomicUsize>,
}

#[derive(Deserialize)]
struct PageParams {
    limit: u32,
    offset: u32,
}

async fn location_area_page(
    State(state): State<MockState>,
    Query(params): Query<PageParams>,
) -> Json<serde_json::Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let results: Vec<_> = (params.offset..params.offset + params.limit)
        .map(|i| json!({"name": format!("area-{i}"), "url": ""}))
        .collect();
    Json(json!({"count": 1000, "next": null, "previous": null, "results": results}))
}

async fn location_area_detail(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if name != "pastoria-city-area" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "name": name,
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": ""}},
            {"pokemon": {"name": "magikarp", "url": ""}}
        ]
    }))
    .into_response()
}

async fn pokemon(
    State(state): State<MockState>,
    Path(name): Path<String>,
    headers: axum::http::HeaderMap,
) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if headers.get("user-agent").and_then(|v| v.to_str().ok()) != Some(CLIENT_USER_AGENT) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let base_experience = match name.as_str() {
        "magikarp" => 40,
        "mewtwo" => 306,
        "missingno" => return "this is not json".into_response(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    Json(json!({
        "name": name,
        "base_experience": base_experience,
        "height": 9,
        "weight": 100,
        "stats": [{"base_stat": 20, "stat": {"name": "hp"}}],
        "types": [{"slot": 1, "type": {"name": "water"}}]
    }))
    .into_response()
}

// == Helper Functions ==

struct Harness {
    session: Session,
    cache: Arc<TimedCache>,
    requests: Arc<AtomicUsize>,
}

impl Harness {
    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    async fn run(&mut self, line: &str) -> pokedex::Result<String> {
        match execute(&mut self.session, line).await? {
            Outcome::Continue(text) | Outcome::Exit(text) => Ok(text),
        }
    }
}

async fn spawn_harness(ttl: Duration, rng: StepRng) -> Harness {
    let state = MockState::default();
    let requests = state.requests.clone();
    let app = Router::new()
        .route("/location-area", get(location_area_page))
        .route("/location-area/:name/", get(location_area_detail))
        .route("/pokemon/:name/", get(pokemon))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let cache = Arc::new(TimedCache::new(ttl).unwrap());
    let client = PokeApiClient::new(format!("http://{addr}"), cache.clone());
    Harness {
        session: Session::with_rng(client, 3, rng),
        cache,
        requests,
    }
}

/// A roll of 0.0: every throw succeeds
fn lucky() -> StepRng {
    StepRng::new(0, 0)
}

/// A roll just under 1.0: only certain catches succeed
fn unlucky() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

// == map / mapb ==

#[tokio::test]
async fn test_map_pages_forward_and_back_from_cache() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    assert!(Arc::ptr_eq(harness.session.client.cache(), &harness.cache));

    let first = harness.run("map").await.unwrap();
    assert_eq!(first, "\nLocation Areas:\narea-0\narea-1\narea-2\n");

    let second = harness.run("map").await.unwrap();
    assert!(second.contains("area-3\narea-4\narea-5\n"));
    assert_eq!(harness.requests(), 2);

    // Going back re-shows the first page without another request
    let back = harness.run("mapb").await.unwrap();
    assert_eq!(back, first);
    assert_eq!(harness.requests(), 2);
    assert!(harness.cache.get("location_areas_0").await.is_some());

    harness.cache.shutdown();
}

#[tokio::test]
async fn test_mapb_before_second_page_fails() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    let err = harness.run("mapb").await.unwrap_err();
    assert!(matches!(err, PokedexError::FirstPage));

    harness.run("map").await.unwrap();
    let err = harness.run("mapb").await.unwrap_err();
    assert!(matches!(err, PokedexError::FirstPage));

    // The offset was reset, so map starts over
    let text = harness.run("map").await.unwrap();
    assert!(text.contains("area-0"));

    harness.cache.shutdown();
}

// == explore ==

#[tokio::test]
async fn test_explore_is_cached() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    let text = harness.run("explore pastoria-city-area").await.unwrap();
    assert_eq!(
        text,
        "\nExploring pastoria-city-area...\nFound Pokemon:\n - tentacool\n - magikarp\n"
    );

    let again = harness.run("explore pastoria-city-area").await.unwrap();
    assert_eq!(again, text);
    assert_eq!(harness.requests(), 1);

    harness.cache.shutdown();
}

#[tokio::test]
async fn test_explore_refetches_after_expiry() {
    let mut harness = spawn_harness(Duration::from_millis(50), lucky()).await;

    harness.run("explore pastoria-city-area").await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;
    harness.run("explore pastoria-city-area").await.unwrap();

    assert_eq!(harness.requests(), 2);

    harness.cache.shutdown();
}

#[tokio::test]
async fn test_explore_unknown_area_is_not_cached() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    for _ in 0..2 {
        let err = harness.run("explore nowhere").await.unwrap_err();
        assert!(matches!(err, PokedexError::Status { status: 404, .. }));
    }
    assert_eq!(harness.requests(), 2);
    assert!(harness.cache.is_empty().await);

    harness.cache.shutdown();
}

// == catch / inspect / pokedex ==

#[tokio::test]
async fn test_catch_inspect_pokedex() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    let text = harness.run("catch magikarp").await.unwrap();
    assert_eq!(
        text,
        "Throwing a Pokeball at magikarp...\n\
         magikarp was caught!\n\
         You may now inspect it with the inspect command.\n"
    );

    let text = harness.run("catch magikarp").await.unwrap();
    assert_eq!(text, "You already caught magikarp!\n");

    let text = harness.run("inspect magikarp").await.unwrap();
    assert_eq!(
        text,
        "Name: magikarp\nHeight: 9\nWeight: 100\nStats:\n  -hp: 20\nTypes:\n  - water\n"
    );

    let text = harness.run("pokedex").await.unwrap();
    assert_eq!(text, "Your Pokedex:\n - magikarp\n");

    harness.cache.shutdown();
}

#[tokio::test]
async fn test_catch_escape_then_retry_uses_cache() {
    let mut harness = spawn_harness(Duration::from_secs(60), unlucky()).await;

    for _ in 0..2 {
        let text = harness.run("catch magikarp").await.unwrap();
        assert!(text.ends_with("magikarp escaped!\n"));
    }
    assert_eq!(harness.requests(), 1);
    assert_eq!(
        harness.run("pokedex").await.unwrap(),
        "You haven't caught any Pokemon yet\n"
    );

    // base_experience above 255 is a certain catch even on a bad roll
    let text = harness.run("catch mewtwo").await.unwrap();
    assert!(text.contains("mewtwo was caught!"));

    harness.cache.shutdown();
}

#[tokio::test]
async fn test_catch_undecodable_body_is_not_cached() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    let err = harness.run("catch missingno").await.unwrap_err();
    assert!(matches!(err, PokedexError::Decode(_)));
    assert!(harness.cache.get("pokemon_missingno").await.is_none());

    harness.cache.shutdown();
}

// == dispatch ==

#[tokio::test]
async fn test_unknown_blank_and_exit() {
    let mut harness = spawn_harness(Duration::from_secs(60), lucky()).await;

    let err = execute(&mut harness.session, "teleport").await.unwrap_err();
    assert!(matches!(err, PokedexError::UnknownCommand(_)));

    let outcome = execute(&mut harness.session, "   ").await.unwrap();
    assert_eq!(outcome, Outcome::Continue(String::new()));

    let outcome = execute(&mut harness.session, "exit").await.unwrap();
    assert!(matches!(outcome, Outcome::Exit(_)));
    assert_eq!(harness.requests(), 0);

    harness.cache.shutdown();
}
