use crate::domain::PredictionDomain;
use crate::inference::Prediction;
use serde::{Deserialize, Serialize};

/// Heart disease risk prediction service
pub struct Heart;

/// Cleveland-style cardiology measurements, 13 fields in clinical order.
///
/// Integer-coded fields (`sex`, `cp`, `fbs`, `restecg`, `exang`, `slope`,
/// `ca`, `thal`) reject non-integer JSON numbers at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct HeartRequest {
    pub age: f64,
    pub sex: i64,
    /// Chest pain type
    pub cp: i64,
    /// Resting blood pressure
    pub trestbps: f64,
    /// Serum cholesterol
    pub chol: f64,
    /// Fasting blood sugar > 120 mg/dl
    pub fbs: i64,
    /// Resting electrocardiographic results
    pub restecg: i64,
    /// Maximum heart rate achieved
    pub thalach: f64,
    /// Exercise induced angina
    pub exang: i64,
    /// ST depression induced by exercise relative to rest
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment
    pub slope: i64,
    /// Number of major vessels colored by fluoroscopy
    pub ca: i64,
    /// Thalassemia
    pub thal: i64,
}

#[derive(Debug, Serialize)]
pub struct HeartResponse {
    pub has_heart_disease: bool,
    pub probability: f64,
    pub message: String,
}

const HIGH_RISK_MESSAGE: &str =
    "High risk of heart disease. Please consult with a healthcare professional.";
const LOW_RISK_MESSAGE: &str = "Low risk of heart disease. Maintain a healthy lifestyle.";

impl PredictionDomain for Heart {
    type Request = HeartRequest;
    type Response = HeartResponse;

    const NAME: &'static str = "heart-disease-prediction";
    const TITLE: &'static str = "Heart Disease Prediction API";
    const DESCRIPTION: &'static str =
        "API for predicting heart disease risk using machine learning";
    const FEATURE_NAMES: &'static [&'static str] = &[
        "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
        "slope", "ca", "thal",
    ];
    const DEFAULT_MODEL_PATH: &'static str = "model/heart_model.bin";

    fn encode(request: &Self::Request) -> Vec<f64> {
        vec![
            request.age,
            request.sex as f64,
            request.cp as f64,
            request.trestbps,
            request.chol,
            request.fbs as f64,
            request.restecg as f64,
            request.thalach,
            request.exang as f64,
            request.oldpeak,
            request.slope as f64,
            request.ca as f64,
            request.thal as f64,
        ]
    }

    fn respond(prediction: &Prediction) -> Self::Response {
        let message = if prediction.risk {
            HIGH_RISK_MESSAGE
        } else {
            LOW_RISK_MESSAGE
        };

        HeartResponse {
            has_heart_disease: prediction.risk,
            probability: prediction.probability,
            message: message.to_string(),
        }
    }
}
