use crate::domain::PredictionDomain;
use crate::inference::Prediction;
use serde::{Deserialize, Serialize};

/// Diabetes risk prediction service
pub struct Diabetes;

/// Pima-style diabetes measurements, 8 numeric fields
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesRequest {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

#[derive(Debug, Serialize)]
pub struct DiabetesResponse {
    pub has_diabetes: bool,
    pub probability: f64,
    pub message: String,
}

const HIGH_RISK_MESSAGE: &str =
    "High risk of diabetes. Please consult with a healthcare professional.";
const LOW_RISK_MESSAGE: &str = "Low risk of diabetes. Maintain a healthy lifestyle.";

impl PredictionDomain for Diabetes {
    type Request = DiabetesRequest;
    type Response = DiabetesResponse;

    const NAME: &'static str = "diabetes-prediction";
    const TITLE: &'static str = "Diabetes Prediction API";
    const DESCRIPTION: &'static str = "API for predicting diabetes risk using machine learning";
    const FEATURE_NAMES: &'static [&'static str] = &[
        "pregnancies",
        "glucose",
        "bloodPressure",
        "skinThickness",
        "insulin",
        "bmi",
        "diabetesPedigree",
        "age",
    ];
    const DEFAULT_MODEL_PATH: &'static str = "model/diabetes_model.bin";

    fn encode(request: &Self::Request) -> Vec<f64> {
        vec![
            request.pregnancies,
            request.glucose,
            request.blood_pressure,
            request.skin_thickness,
            request.insulin,
            request.bmi,
            request.diabetes_pedigree,
            request.age,
        ]
    }

    fn respond(prediction: &Prediction) -> Self::Response {
        let message = if prediction.risk {
            HIGH_RISK_MESSAGE
        } else {
            LOW_RISK_MESSAGE
        };

        DiabetesResponse {
            has_diabetes: prediction.risk,
            probability: prediction.probability,
            message: message.to_string(),
        }
    }
}
