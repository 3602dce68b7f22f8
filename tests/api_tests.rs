use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

use fixcast::api::router::create_router;
use fixcast::config::{AppConfig, ScoringWeights};
use fixcast::AppState;

// The Prometheus recorder can only be installed once per process.
static METRICS: OnceLock<PrometheusHandle> = OnceLock::new();

fn metrics_handle() -> PrometheusHandle {
    METRICS.get_or_init(fixcast::metrics::init_metrics).clone()
}

/// Build the app in sample mode: no provider credential, built-in fixtures.
fn build_test_app() -> axum::Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        sports_api_key: None,
        sports_api_url: "https://localhost".into(),
        league_id: 39,
        season: 2025,
        lookahead: 10,
        recommend_threshold: 60.0,
        weights: ScoringWeights::default(),
    };

    let state = AppState {
        config,
        provider: None,
        metrics_handle: metrics_handle(),
    };

    create_router(state)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(build_test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mode"], "sample");
}

#[tokio::test]
async fn test_fixtures_are_scored() {
    let (status, json) = get_json(build_test_app(), "/api/fixtures").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let records = json["data"].as_array().unwrap();
    assert_eq!(records.len(), 5);

    for record in records {
        for triple in ["baseline", "adjusted"] {
            let home = record[triple]["home"].as_f64().unwrap();
            let draw = record[triple]["draw"].as_f64().unwrap();
            let away = record[triple]["away"].as_f64().unwrap();
            let sum = home + draw + away;
            assert!((sum - 100.0).abs() < 0.01, "{triple} sums to {sum}");
            for p in [home, draw, away] {
                assert!((0.0..=100.0).contains(&p));
            }
        }
        assert!(record["ratings"]["home"].is_string());
        assert!(record["features"]["tilt"].is_number());
    }
}

#[tokio::test]
async fn test_recommendations_respect_threshold() {
    let (status, json) = get_json(build_test_app(), "/api/recommendations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let picks = json["data"].as_array().unwrap();
    assert!(!picks.is_empty());
    for pick in picks {
        assert!(pick["adjusted"]["home"].as_f64().unwrap() >= 60.0);
    }
}

#[tokio::test]
async fn test_recommendations_html_table() {
    let resp = build_test_app()
        .oneshot(
            Request::builder()
                .uri("/recommendations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<table>"));
    assert!(html.contains("Liverpool vs Bournemouth"));
    // The sample set spans strong favourites and a struggling home side.
    assert!(html.contains("class=\"green\""));
    assert!(html.contains("class=\"red\""));
}

#[tokio::test]
async fn test_accumulator_top_legs() {
    let (status, json) = get_json(build_test_app(), "/api/accumulator?legs=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let legs = json["data"].as_array().unwrap();
    assert_eq!(legs.len(), 3);

    let probs: Vec<f64> = legs
        .iter()
        .map(|l| l["probability"].as_f64().unwrap())
        .collect();
    assert!(probs.windows(2).all(|w| w[0] >= w[1]), "legs not sorted: {probs:?}");
}

#[tokio::test]
async fn test_accumulator_default_legs() {
    let (status, json) = get_json(build_test_app(), "/api/accumulator").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_accumulator_rejects_zero_legs() {
    let (status, json) = get_json(build_test_app(), "/api/accumulator?legs=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let resp = build_test_app()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let _text = String::from_utf8(body.to_vec()).unwrap();
}
