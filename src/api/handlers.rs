use crate::api::AppState;
use crate::domain::PredictionDomain;
use crate::error::Result;
use crate::inference;
use axum::{extract::State, response::Html, Json};
use serde::Serialize;

const TEMPLATE_PATH: &str = "templates/index.html";

/// Serve the prediction form
///
/// Reads `templates/index.html` from the working directory; when no template
/// is deployed, falls back to a minimal inline page.
pub async fn home<D: PredictionDomain>() -> Html<String> {
    match tokio::fs::read_to_string(TEMPLATE_PATH).await {
        Ok(page) => Html(page),
        Err(_) => Html(fallback_page(D::TITLE, D::DESCRIPTION)),
    }
}

fn fallback_page(title: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <div class="container mt-5">
        <h1>{title}</h1>
        <p>{description}.</p>
        <p>To use this API, send a POST request to <code>/predict</code> with the required parameters.</p>

        <h3 class="mt-4">API Documentation</h3>
        <p>Visit <a href="/docs">/docs</a> for the API documentation.</p>
    </div>
</body>
</html>
"#
    )
}

/// Health check endpoint
///
/// Also reports which model variant was selected at startup, so a service
/// running on the constant fallback is detectable from the outside.
pub async fn health_check<D: PredictionDomain>(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: D::NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model.variant().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
}

/// Predict risk for one request
///
/// Schema failures are rejected by the `Json` extractor before this handler
/// runs; everything past that point surfaces as a prediction error.
pub async fn predict<D: PredictionDomain>(
    State(state): State<AppState>,
    Json(request): Json<D::Request>,
) -> Result<Json<D::Response>> {
    let features = D::encode(&request);
    let prediction = inference::decide(state.model.as_ref(), &features)?;

    tracing::debug!(
        service = D::NAME,
        probability = prediction.probability,
        risk = prediction.risk,
        "Prediction served"
    );

    Ok(Json(D::respond(&prediction)))
}
