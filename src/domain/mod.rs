/// Prediction domains
///
/// Each service is a `PredictionDomain`: a fixed request schema, a
/// fixed-order feature encoding, and a pair of result messages. The HTTP
/// layer is generic over this trait; the three binaries only pick a domain.

pub mod categorical;
pub mod diabetes;
pub mod heart;
pub mod kidney;

pub use diabetes::Diabetes;
pub use heart::Heart;
pub use kidney::Kidney;

use crate::inference::Prediction;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single prediction service: schema, encoder and response shape.
pub trait PredictionDomain: Send + Sync + 'static {
    /// Request schema; deserialization failures reject the request before
    /// the model is reachable
    type Request: DeserializeOwned + Send;

    /// Response DTO carrying the domain's boolean key
    type Response: Serialize + Send;

    /// Short service name, used in logs and the health endpoint
    const NAME: &'static str;

    /// Human-facing page title
    const TITLE: &'static str;

    /// One-line service description
    const DESCRIPTION: &'static str;

    /// Feature vector layout, in encoding order. This order is part of the
    /// service contract: it must match the layout the model was trained on.
    const FEATURE_NAMES: &'static [&'static str];

    /// Artifact path used when neither `MODEL_PATH` nor the config file
    /// names one
    const DEFAULT_MODEL_PATH: &'static str;

    /// Map a validated request into the fixed-order feature vector
    fn encode(request: &Self::Request) -> Vec<f64>;

    /// Build the response body for a prediction outcome
    fn respond(prediction: &Prediction) -> Self::Response;
}
