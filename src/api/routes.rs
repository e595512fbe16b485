use crate::api::{handlers, AppState};
use crate::domain::PredictionDomain;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the service router for a prediction domain
pub fn build_router<D: PredictionDomain>(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home::<D>))
        .route("/health", get(handlers::health_check::<D>))
        .route("/predict", post(handlers::predict::<D>));

    // Static assets are optional; mount the directory only when deployed
    if Path::new("static").is_dir() {
        router = router.nest_service("/static", ServeDir::new("static"));
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
