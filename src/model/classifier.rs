use crate::error::{AppError, Result};
use crate::model::artifact::{ModelArtifact, ModelMetadata};
use ndarray::Array2;

/// The single capability the services need from a classifier.
///
/// Implementations must be safe for unsynchronized concurrent reads; the
/// chosen instance is shared across request handlers for the process
/// lifetime and never mutated.
pub trait ProbabilityModel: Send + Sync {
    /// Predict class probabilities, one `[p0, p1]` row per input row
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>>;

    /// Short variant label for logs and health reporting
    fn variant(&self) -> &'static str;
}

/// Binary logistic regression over stored coefficients
pub struct LogisticModel {
    metadata: ModelMetadata,
    weights: ndarray::Array1<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            metadata: artifact.metadata,
            weights: artifact.weights,
            intercept: artifact.intercept,
        }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Feature vector width this model was trained on
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }
}

impl ProbabilityModel for LogisticModel {
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        if features.ncols() != self.weights.len() {
            return Err(AppError::Prediction(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.ncols()
            )));
        }

        let mut proba = Array2::zeros((features.nrows(), 2));
        for (i, row) in features.rows().into_iter().enumerate() {
            let z = row.dot(&self.weights) + self.intercept;
            let p = Self::sigmoid(z);
            proba[[i, 0]] = 1.0 - p;
            proba[[i, 1]] = p;
        }

        Ok(proba)
    }

    fn variant(&self) -> &'static str {
        "trained"
    }
}

/// Stand-in model used when no artifact can be loaded.
///
/// Returns `[0.5, 0.5]` for every row so the service stays reachable with a
/// broken or missing artifact.
pub struct ConstantModel;

impl ProbabilityModel for ConstantModel {
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        Ok(Array2::from_elem((features.nrows(), 2), 0.5))
    }

    fn variant(&self) -> &'static str {
        "constant-fallback"
    }
}
