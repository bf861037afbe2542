use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use buzzword_bingo::adapters::html::EMPTY_LEADERBOARD;
use buzzword_bingo::{
    router, AppState, BingoService, CardLayout, MemoryStorage, UsageStore, WordListDefaults,
    WordListLoader,
};
use std::sync::Arc;
use tower::ServiceExt;

const STATS: &str = "stats.json";

struct Fixture {
    app: Router,
    stats: MemoryStorage,
}

async fn fixture() -> Fixture {
    let words = MemoryStorage::new();
    words
        .insert(
            "meetings.json",
            br#"{"title": "Meeting Bingo", "shout": "BINGO", "words": ["synergy", "circle back", "<b>ping</b>"]}"#,
        )
        .await;
    words.insert("empty.json", br#"{"words": []}"#).await;
    words
        .insert("healthz.json", br#"{"title": "Ops Bingo", "words": ["pager"]}"#)
        .await;

    let stats = MemoryStorage::new();
    let service = BingoService::new(
        WordListLoader::new(words, WordListDefaults::default()),
        UsageStore::new(stats.clone(), STATS),
        CardLayout::default(),
    );
    let app = router(AppState::new(Arc::new(service), "https://cdn.example.com/parts"));
    Fixture { app, stats }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_empty_leaderboard_message() {
    let fx = fixture().await;
    let (status, body) = get(&fx.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, EMPTY_LEADERBOARD);
}

#[tokio::test]
async fn test_card_page_and_leaderboard() {
    let fx = fixture().await;

    let (status, body) = get(&fx.app, "/meetings").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Meeting Bingo</h1>"));
    assert!(body.contains("«BINGO»"));
    assert!(body.contains("https://cdn.example.com/parts/css/style.css"));
    assert_eq!(body.matches("<td>").count(), 25);
    assert_eq!(body.matches("<tr>").count(), 5);
    assert!(!body.contains("<b>ping</b>"));

    get(&fx.app, "/meetings").await;

    let (status, body) = get(&fx.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/meetings">meetings</a></td> <td>2</td>"#));

    let raw = fx.stats.get(STATS).await.unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stats, serde_json::json!({"meetings": 2}));
}

#[tokio::test]
async fn test_unknown_card_is_404() {
    let fx = fixture().await;
    let (status, _) = get(&fx.app, "/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&fx.app, "/..%2Fstats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert!(fx.stats.get(STATS).await.is_none());
}

#[tokio::test]
async fn test_empty_word_list_is_500() {
    let fx = fixture().await;
    let (status, _) = get(&fx.app, "/empty").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_stats_write_failure_is_500() {
    let fx = fixture().await;
    fx.stats.set_read_only(true).await;

    let (status, _) = get(&fx.app, "/meetings").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(&fx.app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, EMPTY_LEADERBOARD);
}

#[tokio::test]
async fn test_healthz() {
    let fx = fixture().await;
    let (status, body) = get(&fx.app, "/.well-known/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_healthz_is_an_ordinary_card_name() {
    let fx = fixture().await;
    let (status, body) = get(&fx.app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Ops Bingo</h1>"));
    assert_eq!(body.matches("<td>pager</td>").count(), 25);
}
