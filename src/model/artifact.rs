use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// On-disk model artifact.
///
/// Carries the coefficients of a binary logistic regression together with
/// enough metadata to identify the training run. Encoded with bincode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model metadata
    pub metadata: ModelMetadata,

    /// Per-feature weights, one per input column
    pub weights: Array1<f64>,

    /// Intercept term
    pub intercept: f64,
}

/// Metadata describing a trained model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name
    pub name: String,

    /// Model version
    pub version: String,

    /// When the model was trained
    pub trained_at: DateTime<Utc>,

    /// Expected feature vector width
    pub n_features: usize,
}
