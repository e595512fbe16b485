use crate::api::{build_router, AppState};
use crate::config::Config;
use crate::domain::PredictionDomain;
use crate::model::load_model;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared service bootstrap.
///
/// Each binary calls this with its domain: initialize tracing, load the
/// configuration, select the model variant once, and serve until ctrl-c.
pub async fn run<D: PredictionDomain>() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinirisk=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing::info!(
        "Starting {} v{}",
        D::TITLE,
        env!("CARGO_PKG_VERSION")
    );

    // Select the model variant, exactly once
    let model_path = config.model_path(D::DEFAULT_MODEL_PATH);
    let model = load_model(&model_path, D::FEATURE_NAMES.len());

    let state = AppState::new(model);
    let app = build_router::<D>(state);

    // Start HTTP server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("HTTP server listening on http://{}", addr);
    tracing::info!("   Prediction form: http://{}/", addr);
    tracing::info!("   Predict endpoint: http://{}/predict", addr);
    tracing::info!("   Health check: http://{}/health", addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}
