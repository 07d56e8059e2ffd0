//! Integration tests for the REST API
//!
//! Runs the full router against the bundled snapshot files and against
//! in-memory sources:
//! - successful buy and sell plans
//! - parameter validation
//! - liquidity shortfalls and missing data

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use splitfill_core::{Exchange, FundStorage};
use splitfill_planner::GreedyExecutionPlanner;
use splitfill_service::{
    AppConfig, AppState, InMemoryExchangeRepository, JsonExchangeRepository, PlanServer,
    create_router,
};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

fn sample_directory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/exchanges")
}

/// Router over the snapshot files shipped with the service
fn sample_router() -> Router {
    let repo = JsonExchangeRepository::new(sample_directory()).unwrap();
    PlanServer::new(AppConfig::default(), repo).router()
}

fn in_memory_router(exchanges: Vec<Exchange>) -> Router {
    let state = Arc::new(AppState::new(
        Arc::new(InMemoryExchangeRepository::with_exchanges(exchanges)),
        Arc::new(GreedyExecutionPlanner::new()),
    ));
    create_router(state)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => Decimal::from_str(s).unwrap(),
        other => Decimal::from_str(&other.to_string()).unwrap(),
    }
}

/// (exchangeId, price, amount) per fill
fn fills(json: &Value) -> Vec<(String, Decimal, Decimal)> {
    json["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| {
            (
                o["exchangeId"].as_str().unwrap().to_string(),
                decimal(&o["price"]),
                decimal(&o["amount"]),
            )
        })
        .collect()
}

// ============================================================================
// Happy paths
// ============================================================================

#[tokio::test]
async fn test_ping() {
    let (status, json) = get(sample_router(), "/api/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn test_buy_plan_from_sample_files() {
    let (status, json) = get(
        sample_router(),
        "/api/executionplan?orderType=buy&orderAmount=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["side"], "Buy");
    assert_eq!(
        fills(&json),
        vec![
            ("exchange-03".to_string(), dec!(2957.45), dec!(1.25)),
            ("exchange-02".to_string(), dec!(2958.90), dec!(0.75)),
        ]
    );
    assert_eq!(decimal(&json["totalAmount"]), dec!(2));
    assert_eq!(decimal(&json["totalCost"]), dec!(5915.9875));
    assert!(json["orders"][0]["orderId"].is_string());
}

#[tokio::test]
async fn test_sell_plan_from_sample_files() {
    let (status, json) = get(
        sample_router(),
        "/api/executionplan?orderType=SELL&orderAmount=4",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["side"], "Sell");
    assert_eq!(
        fills(&json),
        vec![
            ("exchange-02".to_string(), dec!(2955), dec!(1)),
            ("exchange-01".to_string(), dec!(2954.32), dec!(0.5)),
            ("exchange-03".to_string(), dec!(2953.80), dec!(2.5)),
        ]
    );
    assert_eq!(decimal(&json["totalCost"]), dec!(11816.66));
}

#[tokio::test]
async fn test_buy_respects_euro_reserve() {
    let router = in_memory_router(vec![
        Exchange::new("cheap", FundStorage::new(dec!(0), dec!(150)))
            .with_asks([(dec!(100), dec!(5))]),
        Exchange::new("dear", FundStorage::new(dec!(0), dec!(10000)))
            .with_asks([(dec!(110), dec!(5))]),
    ]);

    let (status, json) = get(router, "/api/executionplan?orderType=buy&orderAmount=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fills(&json),
        vec![
            ("cheap".to_string(), dec!(100), dec!(1.5)),
            ("dear".to_string(), dec!(110), dec!(1.5)),
        ]
    );
    assert_eq!(decimal(&json["totalCost"]), dec!(315));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_missing_order_type() {
    let (status, json) = get(sample_router(), "/api/executionplan?orderAmount=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], -1102);
    assert!(json["msg"].as_str().unwrap().contains("orderType"));
}

#[tokio::test]
async fn test_invalid_order_type() {
    let (status, json) = get(
        sample_router(),
        "/api/executionplan?orderType=hold&orderAmount=1",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], -1100);
}

#[tokio::test]
async fn test_non_positive_amount() {
    for amount in ["0", "-2", "abc"] {
        let uri = format!("/api/executionplan?orderType=buy&orderAmount={}", amount);
        let (status, json) = get(sample_router(), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "amount {}", amount);
        assert_eq!(json["code"], -1100);
    }
}

#[tokio::test]
async fn test_insufficient_liquidity() {
    let (status, json) = get(
        sample_router(),
        "/api/executionplan?orderType=sell&orderAmount=10",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], -2010);
    assert!(json["msg"].as_str().unwrap().contains("9.55"));
}

#[tokio::test]
async fn test_no_data() {
    let (status, json) = get(
        in_memory_router(Vec::new()),
        "/api/executionplan?orderType=buy&orderAmount=1",
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], -1001);
}
