use crate::error::{AppError, Result};
use crate::model::artifact::ModelArtifact;
use crate::model::classifier::{ConstantModel, LogisticModel, ProbabilityModel};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Load the model artifact for a service, falling back to the constant
/// stand-in on any failure.
///
/// This is the one place a model variant is selected; the returned handle is
/// stored as immutable process-wide state. Failures are absorbed here so a
/// broken or missing artifact degrades predictions instead of availability.
pub fn load_model(path: &Path, expected_features: usize) -> Arc<dyn ProbabilityModel> {
    match try_load(path, expected_features) {
        Ok(model) => {
            info!(
                path = %path.display(),
                model_name = %model.metadata().name,
                model_version = %model.metadata().version,
                n_features = model.n_features(),
                "Loaded model artifact"
            );
            Arc::new(model)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to load model artifact; serving constant 0.5 fallback"
            );
            Arc::new(ConstantModel)
        }
    }
}

fn try_load(path: &Path, expected_features: usize) -> Result<LogisticModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let artifact: ModelArtifact = bincode::deserialize_from(reader)
        .map_err(|e| AppError::ModelLoad(format!("failed to decode artifact: {}", e)))?;

    if artifact.weights.len() != expected_features {
        return Err(AppError::ModelLoad(format!(
            "artifact has {} weights, service expects {}",
            artifact.weights.len(),
            expected_features
        )));
    }

    Ok(LogisticModel::from_artifact(artifact))
}
