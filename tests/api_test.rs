mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use helpers::test_app;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, title: &str, content: &str) -> (StatusCode, Value) {
    let body = json!({ "title": title, "content": content }).to_string();
    send(app, post_json("/api/notes", &body)).await
}

#[tokio::test]
async fn health_reports_capacity() {
    let (app, _) = test_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["notes"], 0);
    assert_eq!(body["capacity"], 5);
}

#[tokio::test]
async fn create_returns_201_with_note_fields() {
    let (app, _) = test_app();
    let (status, body) = create(&app, "Groceries", "<p>milk</p>").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(body["title"], "Groceries");
    assert_eq!(body["content"], "<p>milk</p>");
    let created_at = body["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    assert!(body.get("seq").is_none());
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (app, _) = test_app();
    create(&app, "first", "a").await;
    create(&app, "second", "b").await;

    let (status, body) = send(&app, get("/api/notes")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[tokio::test]
async fn script_title_is_escaped() {
    let (app, _) = test_app();
    let (status, body) = create(&app, "<script>alert(1)</script>", "<b>ok</b>").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert_eq!(body["content"], "<b>ok</b>");
}

#[tokio::test]
async fn missing_or_non_string_fields_are_rejected() {
    let (app, state) = test_app();

    let cases = [
        (r#"{"content": "body"}"#, "Title is required and must be a string"),
        (r#"{"title": 42, "content": "body"}"#, "Title is required and must be a string"),
        (r#"{"title": "", "content": "body"}"#, "Title is required and must be a string"),
        (r#"{"title": "t", "content": null}"#, "Content is required and must be a string"),
        (r#"{"title": "t", "content": ""}"#, "Content is required and must be a string"),
    ];

    for (payload, expected) in cases {
        let (status, body) = send(&app, post_json("/api/notes", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["error"], expected, "payload: {payload}");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    assert!(state.store.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_invalid_payload() {
    let (app, _) = test_app();

    for payload in ["{not json", "[1, 2]", "\"just a string\"", "{}"] {
        let (status, body) = send(&app, post_json("/api/notes", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["error"], "Invalid JSON payload");
        assert_eq!(body["code"], "INVALID_PAYLOAD");
    }
}

#[tokio::test]
async fn capacity_scenario_over_http() {
    let (app, state) = test_app();
    for i in 1..=5 {
        let (status, _) = create(&app, &format!("note {i}"), "<p>x</p>").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = create(&app, "note 6", "<p>x</p>").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
    assert_eq!(
        body["error"],
        "Maximum of 5 notes reached. Consider upgrading to premium to add more."
    );
    assert_eq!(state.store.lock().unwrap().len(), 5);

    let (status, body) = send(&app, post_empty("/api/notes/evict-oldest")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);
    assert_eq!(body["deleted_note"]["title"], "note 1");
    assert_eq!(body["deleted_note_title"], "note 1");

    let (_, listed) = send(&app, get("/api/notes")).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 4);
    assert!(listed.iter().all(|n| n["title"] != "note 1"));
}

#[tokio::test]
async fn evict_on_empty_store_is_a_noop() {
    let (app, _) = test_app();
    let (status, body) = send(&app, post_empty("/api/notes/evict-oldest")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);
    assert_eq!(body["message"], "No notes to delete. Add some notes first!");
    assert!(body.get("deleted_note").is_none());
    assert!(body.get("deleted_note_title").is_none());
}

#[tokio::test]
async fn premium_upgrade_alias_explains_noop_below_capacity() {
    let (app, state) = test_app();
    create(&app, "only", "one").await;

    let (status, body) = send(&app, post_empty("/api/notes/premium-upgrade")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("You currently have 1 notes"));
    assert_eq!(state.store.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn stats_track_remaining_slots() {
    let (app, _) = test_app();
    create(&app, "a", "a").await;
    create(&app, "b", "b").await;

    let (status, body) = send(&app, get("/api/notes/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["capacity"], 5);
    assert_eq!(body["remaining"], 3);
    assert!(body["oldest"].is_string());
    assert!(body["newest"].is_string());
}

#[tokio::test]
async fn premium_upgrade_on_full_store_reports_deleted_title() {
    let (app, _) = test_app();
    for i in 1..=5 {
        create(&app, &format!("<b>note {i}</b>"), "x").await;
    }

    let (status, body) = send(&app, post_empty("/api/notes/premium-upgrade")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);
    assert_eq!(body["deleted_note_title"], "&lt;b&gt;note 1&lt;/b&gt;");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_exceed_capacity() {
    let (app, state) = test_app();

    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = json!({ "title": format!("racer {i}"), "content": "<p>go</p>" });
                app.oneshot(post_json("/api/notes", &body.to_string()))
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    let mut created = 0;
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            StatusCode::CREATED => created += 1,
            StatusCode::FORBIDDEN => rejected += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 5);
    assert_eq!(rejected, 35);
    assert_eq!(state.store.lock().unwrap().len(), 5);
}

#[tokio::test]
async fn poisoned_store_lock_returns_500() {
    let (app, state) = test_app();

    let store = state.store.clone();
    let joined = std::thread::spawn(move || {
        let _guard = store.lock().unwrap();
        panic!("writer died while holding the store");
    })
    .join();
    assert!(joined.is_err());
    assert!(state.store.is_poisoned());

    let (status, body) = send(&app, get("/api/notes")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "An internal error occurred", "code": "INTERNAL_ERROR" })
    );
}
