//! Common test utilities for the prediction services
//!
//! Provides model test doubles and request helpers for driving the routers
//! without a running server.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use clinirisk::error::Result;
use clinirisk::model::ProbabilityModel;
use ndarray::Array2;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Test double emitting a fixed positive-class probability for every row
pub struct FixedModel(pub f64);

impl ProbabilityModel for FixedModel {
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        let mut proba = Array2::zeros((features.nrows(), 2));
        for i in 0..features.nrows() {
            proba[[i, 0]] = 1.0 - self.0;
            proba[[i, 1]] = self.0;
        }
        Ok(proba)
    }

    fn variant(&self) -> &'static str {
        "fixed"
    }
}

/// Test double counting how often the predict capability is invoked
pub struct CountingModel {
    pub calls: AtomicUsize,
    probability: f64,
}

impl CountingModel {
    pub fn new(probability: f64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            probability,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProbabilityModel for CountingModel {
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FixedModel(self.probability).predict_proba(features)
    }

    fn variant(&self) -> &'static str {
        "counting"
    }
}

/// POST a JSON body and return status plus parsed response body.
///
/// Framework-level rejections carry a plain-text body; those come back as a
/// JSON string value so callers can still assert on the status.
pub async fn post_json(
    router: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}

/// GET a path and return status plus parsed JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}
