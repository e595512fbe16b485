use crate::error::{AppError, Result};
use crate::model::ProbabilityModel;
use ndarray::Array2;

/// Outcome of a single inference call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Positive-class decision, `probability >= 0.5` (closed boundary)
    pub risk: bool,

    /// Positive-class probability
    pub probability: f64,
}

/// Run a single feature vector through the model and apply the decision rule.
///
/// The vector is wrapped as a one-row batch; index 1 of the returned pair is
/// the positive-class probability. Exactly 0.5 counts as risk.
pub fn decide(model: &dyn ProbabilityModel, features: &[f64]) -> Result<Prediction> {
    let batch = Array2::from_shape_vec((1, features.len()), features.to_vec())
        .map_err(|e| AppError::Prediction(format!("failed to create feature batch: {}", e)))?;

    let proba = model.predict_proba(&batch)?;
    let probability = proba[[0, 1]];

    Ok(Prediction {
        risk: probability >= 0.5,
        probability,
    })
}
