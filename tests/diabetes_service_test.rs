//! Integration tests for the diabetes prediction service
//!
//! Drives the full router: schema gate, encoding, inference, decision and
//! response formatting, including the constant-fallback path.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use clinirisk::api::{build_router, AppState};
use clinirisk::domain::Diabetes;
use clinirisk::model::{load_model, ConstantModel, ModelArtifact, ModelMetadata};
use common::{post_json, CountingModel, FixedModel};
use ndarray::Array1;
use std::sync::Arc;

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "pregnancies": 2.0,
        "glucose": 130.0,
        "bloodPressure": 80.0,
        "skinThickness": 25.0,
        "insulin": 100.0,
        "bmi": 28.5,
        "diabetesPedigree": 0.45,
        "age": 41.0
    })
}

fn router_with(probability: f64) -> axum::Router {
    build_router::<Diabetes>(AppState::new(Arc::new(FixedModel(probability))))
}

#[tokio::test]
async fn test_low_risk_response_contract() {
    let (status, body) = post_json(router_with(0.2), "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_diabetes"], false);
    assert_eq!(body["probability"], 0.2);
    assert_eq!(
        body["message"],
        "Low risk of diabetes. Maintain a healthy lifestyle."
    );
}

#[tokio::test]
async fn test_high_risk_response_contract() {
    let (status, body) = post_json(router_with(0.85), "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_diabetes"], true);
    assert_eq!(
        body["message"],
        "High risk of diabetes. Please consult with a healthcare professional."
    );
}

#[tokio::test]
async fn test_probability_within_bounds_and_consistent_with_risk() {
    for probability in [0.0, 0.3, 0.5, 0.7, 1.0] {
        let (status, body) = post_json(router_with(probability), "/predict", &sample_body()).await;

        assert_eq!(status, StatusCode::OK);
        let p = body["probability"].as_f64().unwrap();
        let risk = body["has_diabetes"].as_bool().unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert_eq!(risk, p >= 0.5);
    }
}

#[tokio::test]
async fn test_boundary_probability_counts_as_risk() {
    // a model emitting exactly [0.5, 0.5] must yield the high-risk verdict
    let (status, body) = post_json(router_with(0.5), "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["has_diabetes"], true);
    assert_eq!(body["probability"], 0.5);
    assert_eq!(
        body["message"],
        "High risk of diabetes. Please consult with a healthcare professional."
    );
}

#[tokio::test]
async fn test_identical_requests_get_identical_responses() {
    let (_, first) = post_json(router_with(0.42), "/predict", &sample_body()).await;
    let (_, second) = post_json(router_with(0.42), "/predict", &sample_body()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fallback_model_answers_every_request_with_half() {
    let router = build_router::<Diabetes>(AppState::new(Arc::new(ConstantModel)));

    let (status, body) = post_json(router, "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["probability"], 0.5);
    assert_eq!(body["has_diabetes"], true);
}

#[tokio::test]
async fn test_unloadable_artifact_serves_fallback_end_to_end() {
    let model = load_model(std::path::Path::new("no/such/artifact.bin"), 8);
    let router = build_router::<Diabetes>(AppState::new(model));

    let (status, body) = post_json(router, "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["probability"], 0.5);
    assert_eq!(body["has_diabetes"], true);
}

#[tokio::test]
async fn test_trained_artifact_serves_real_probability() {
    // zero weights and intercept make the logistic score exactly 0.5
    let artifact = ModelArtifact {
        metadata: ModelMetadata {
            name: "diabetes".to_string(),
            version: "1.0".to_string(),
            trained_at: Utc::now(),
            n_features: 8,
        },
        weights: Array1::zeros(8),
        intercept: 0.0,
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diabetes_model.bin");
    std::fs::write(&path, bincode::serialize(&artifact).unwrap()).unwrap();

    let model = load_model(&path, 8);
    assert_eq!(model.variant(), "trained");

    let router = build_router::<Diabetes>(AppState::new(model));
    let (status, body) = post_json(router, "/predict", &sample_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["probability"], 0.5);
    assert_eq!(body["has_diabetes"], true);
}

#[tokio::test]
async fn test_missing_field_is_rejected_before_inference() {
    let model = Arc::new(CountingModel::new(0.9));
    let router = build_router::<Diabetes>(AppState::new(model.clone()));

    let body = serde_json::json!({ "pregnancies": 2.0, "glucose": 130.0 });
    let (status, _) = post_json(router, "/predict", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_wrong_typed_field_is_rejected_before_inference() {
    let model = Arc::new(CountingModel::new(0.9));
    let router = build_router::<Diabetes>(AppState::new(model.clone()));

    let mut body = sample_body();
    body["glucose"] = "high".into();
    let (status, _) = post_json(router, "/predict", &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(model.call_count(), 0);
}
