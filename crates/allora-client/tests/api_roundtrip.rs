//! End-to-end client tests against a fake in-process Allora API.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use allora_client::{
    AlloraClient, ChainSlug, ClientConfig, ClientError, Inference, RetryConfig, Topic,
    TopicsResponse,
};

fn sample_topic(id: u64) -> Topic {
    Topic {
        id,
        metadata: format!("Topic {} Prediction", id),
        epoch_last_ended: 1_000_000,
        epoch_length: 120,
        ground_truth_lag: 120,
        default_arg: "ETH".to_string(),
        worker_submission_window: 12,
        alpha_regret: "0.1".to_string(),
        p_norm: "3".to_string(),
        epsilon_reputer: "0.01".to_string(),
        epsilon_safe_div: "0.0000001".to_string(),
        initial_regret: "0".to_string(),
        allow_negative: true,
        alpha_regret2: "0.1".to_string(),
        p_norm2: "3".to_string(),
        epsilon_reputer2: "0.01".to_string(),
        epsilon_safe_div2: "0.0000001".to_string(),
        min_stake: "100".to_string(),
        max_unmet_demand: "0".to_string(),
        initial_regret2: "0".to_string(),
    }
}

fn envelope(data: Value) -> Json<Value> {
    Json(json!({
        "request_id": "req-test",
        "status": true,
        "data": data,
    }))
}

/// Spin up a router on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

fn test_client(base_url: &str) -> AlloraClient {
    let config = ClientConfig::new("test-key", ChainSlug::Testnet)
        .with_base_url(base_url)
        .with_retry(RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
        });
    AlloraClient::new(config).expect("client")
}

#[tokio::test]
async fn list_topics_unwraps_envelope() {
    let topics = TopicsResponse {
        topics: vec![sample_topic(1), sample_topic(2)],
        pagination: None,
    };
    let body = serde_json::to_value(&topics).unwrap();
    let router = Router::new().route(
        "/allora/testnet/topics",
        get(move || {
            let body = body.clone();
            async move { envelope(body) }
        }),
    );
    let base_url = serve(router).await;

    let response = test_client(&base_url).list_topics().await.unwrap();
    assert_eq!(response.topics.len(), 2);
    assert_eq!(response.topics[0].id, 1);
}

#[tokio::test]
async fn get_inference_passes_topic_id() {
    #[derive(serde::Deserialize)]
    struct Params {
        allora_topic_id: u64,
    }

    let router = Router::new().route(
        "/allora/consumer/testnet",
        get(|Query(params): Query<Params>| async move {
            let inference = Inference {
                topic_id: params.allora_topic_id,
                block_height: 123_456,
                inferer: "allo1xyz".to_string(),
                value: "2087.35".to_string(),
                timestamp: "2024-05-01T12:00:00Z".to_string(),
            };
            envelope(serde_json::to_value(&inference).unwrap())
        }),
    );
    let base_url = serve(router).await;

    let inference = test_client(&base_url).get_inference(42).await.unwrap();
    assert_eq!(inference.topic_id, 42);
    assert_eq!(inference.value, "2087.35");
}

#[tokio::test]
async fn server_errors_are_retried_to_exhaustion() {
    let hits = Arc::new(AtomicU32::new(0));
    let hits_handler = Arc::clone(&hits);
    let router = Router::new().route(
        "/allora/testnet/topics",
        get(move || {
            let hits = Arc::clone(&hits_handler);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())
            }
        }),
    );
    let base_url = serve(router).await;

    let err = test_client(&base_url).list_topics().await.unwrap_err();
    assert_eq!(hits.load(Ordering::SeqCst), 3);
    match err {
        ClientError::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(last.contains("500"));
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_data_payload_is_an_error() {
    let router = Router::new().route(
        "/allora/testnet/topics",
        get(|| async { Json(json!({"request_id": "req-test", "status": false})) }),
    );
    let base_url = serve(router).await;

    let err = test_client(&base_url).list_topics().await.unwrap_err();
    assert!(matches!(err, ClientError::RetriesExhausted { .. }));
    assert!(err.to_string().contains("no topics data"));
}

#[tokio::test]
async fn health_check_is_true_against_live_api() {
    let topics = TopicsResponse {
        topics: vec![sample_topic(1)],
        pagination: None,
    };
    let body = serde_json::to_value(&topics).unwrap();
    let router = Router::new().route(
        "/allora/testnet/topics",
        get(move || {
            let body = body.clone();
            async move { envelope(body) }
        }),
    );
    let base_url = serve(router).await;
    let client = test_client(&base_url);

    // Idempotent: repeated probes report the same status
    assert!(client.health_check().await);
    assert!(client.health_check().await);
}
