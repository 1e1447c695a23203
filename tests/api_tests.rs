mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{build_test_app, sample_headlines, StubNews, StubPrices};

fn stub_news(headlines: Vec<String>) -> StubNews {
    StubNews {
        headlines,
        fail: false,
    }
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    let resp = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["has_analysis"], false);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    let resp = app.oneshot(get("/metrics")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_analyze_returns_report() {
    let prices = Arc::new(StubPrices::default());
    let (app, state) = build_test_app(stub_news(sample_headlines()), prices.clone(), None);

    let resp = app
        .oneshot(post_json("/api/analyze", serde_json::json!({ "company": "Tesla" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["company"], "Tesla");
    assert_eq!(data["symbol"], "TSLA");
    assert_eq!(data["records"].as_array().unwrap().len(), 3);
    assert_eq!(data["records"][0]["headline"], "Company beats earnings expectations");
    assert_eq!(data["records"][0]["label"], "Positive");
    assert_eq!(data["records"][1]["label"], "Negative");
    assert_eq!(data["records"][2]["label"], "Neutral");
    assert_eq!(data["label_counts"]["positive"], 1);
    assert_eq!(data["label_counts"]["negative"], 1);
    assert_eq!(data["label_counts"]["neutral"], 1);
    assert_eq!(data["histogram"]["bins"].as_array().unwrap().len(), 10);
    assert_eq!(data["quote"]["price"], "177.50");
    assert_eq!(data["top_words"][0]["word"], "company");

    assert_eq!(*prices.requested.lock().unwrap(), vec!["TSLA".to_string()]);
    assert!(state.latest.read().await.is_some());
}

#[tokio::test]
async fn test_analyze_uses_explicit_symbol() {
    let prices = Arc::new(StubPrices::default());
    let (app, _state) = build_test_app(stub_news(sample_headlines()), prices.clone(), None);

    let resp = app
        .oneshot(post_json(
            "/api/analyze",
            serde_json::json!({ "company": "Apple", "symbol": "aapl" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["symbol"], "AAPL");
    assert_eq!(*prices.requested.lock().unwrap(), vec!["AAPL".to_string()]);
}

#[tokio::test]
async fn test_analyze_without_news_is_empty_report() {
    let prices = Arc::new(StubPrices::default());
    let news = StubNews {
        headlines: vec![],
        fail: true,
    };
    let (app, _state) = build_test_app(news, prices.clone(), None);

    let resp = app
        .oneshot(post_json("/api/analyze", serde_json::json!({ "company": "Nobody" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["records"].as_array().unwrap().len(), 0);
    assert!(json["data"]["histogram"].is_null());
    assert!(json["data"]["quote"].is_null());
    assert!(prices.requested.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_blank_company() {
    let (app, _state) = build_test_app(stub_news(sample_headlines()), Arc::default(), None);

    let resp = app
        .oneshot(post_json("/api/analyze", serde_json::json!({ "company": "   " })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_latest_analysis() {
    let (app, _state) = build_test_app(stub_news(sample_headlines()), Arc::default(), None);

    let resp = app.clone().oneshot(get("/api/analysis/latest")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(post_json("/api/analyze", serde_json::json!({ "company": "Tesla" })))
        .await
        .unwrap();
    let analyzed = body_json(resp).await;

    let resp = app.oneshot(get("/api/analysis/latest")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let latest = body_json(resp).await;
    assert_eq!(latest["data"]["id"], analyzed["data"]["id"]);
}

#[tokio::test]
async fn test_analyze_broadcasts_summary() {
    let (app, state) = build_test_app(stub_news(sample_headlines()), Arc::default(), None);
    let mut rx = state.ws_tx.subscribe();

    let resp = app
        .oneshot(post_json("/api/analyze", serde_json::json!({ "company": "Tesla" })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let msg = rx.try_recv().expect("summary should be broadcast");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "analysis_complete");
    assert_eq!(json["data"]["company"], "Tesla");
    assert_eq!(json["data"]["headlines"], 3);
}

#[tokio::test]
async fn test_score_endpoint() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    let resp = app
        .oneshot(post_json(
            "/api/sentiment/score",
            serde_json::json!({ "text": "Company faces major lawsuit" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["data"]["score"].as_f64().unwrap() < -0.05);
    assert_eq!(json["data"]["label"], "Negative");
}

#[tokio::test]
async fn test_score_endpoint_empty_text() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    let resp = app
        .oneshot(post_json("/api/sentiment/score", serde_json::json!({ "text": "" })))
        .await
        .unwrap();

    let json = body_json(resp).await;
    assert_eq!(json["data"]["score"], 0.0);
    assert_eq!(json["data"]["label"], "Neutral");
}

#[tokio::test]
async fn test_classify_endpoint_boundaries() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    for (score, expected) in [
        ("0.05", "Neutral"),
        ("0.050001", "Positive"),
        ("-0.05", "Neutral"),
        ("-0.2", "Negative"),
    ] {
        let resp = app
            .clone()
            .oneshot(get(&format!("/api/sentiment/classify?score={score}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["label"], expected, "score {score}");
    }
}

#[tokio::test]
async fn test_classify_rejects_non_finite() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), None);

    let resp = app
        .oneshot(get("/api/sentiment/classify?score=NaN"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_required_when_token_set() {
    let (app, _state) = build_test_app(stub_news(vec![]), Arc::default(), Some("s3cret"));

    let resp = app.clone().oneshot(get("/api/analysis/latest")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/analysis/latest")
                .header("authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/analysis/latest")
                .header("authorization", "Bearer s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // Authorized, but nothing analyzed yet.
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Public routes stay open.
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
