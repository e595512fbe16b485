use crate::domain::categorical::{Appetite, CellCondition, Presence, YesNo};
use crate::domain::PredictionDomain;
use crate::inference::Prediction;
use serde::{Deserialize, Serialize};

/// Chronic kidney disease risk prediction service
pub struct Kidney;

/// CKD panel: 15 numeric measurements and 9 two-token categoricals
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KidneyRequest {
    pub age: f64,
    pub blood_pressure: f64,
    pub specific_gravity: f64,
    pub albumin: f64,
    pub sugar: f64,
    pub red_blood_cells: CellCondition,
    pub pus: f64,
    pub pus_cell_clumps: Presence,
    pub bacteria: Presence,
    pub blood_glucose: f64,
    pub blood_urea: f64,
    pub serum_creatinine: f64,
    pub sodium: f64,
    pub potassium: f64,
    pub hemoglobin: f64,
    pub packed_cell_volume: f64,
    pub white_blood_cell_count: f64,
    pub red_blood_cell_count: f64,
    pub hypertension: YesNo,
    pub diabetes_mellitus: YesNo,
    pub coronary_artery_disease: YesNo,
    pub appetite: Appetite,
    pub pedal_edema: YesNo,
    pub anemia: YesNo,
}

#[derive(Debug, Serialize)]
pub struct KidneyResponse {
    pub has_kidney_disease: bool,
    pub probability: f64,
    pub message: String,
}

const HIGH_RISK_MESSAGE: &str =
    "High risk of chronic kidney disease. Please consult with a healthcare professional immediately.";
const LOW_RISK_MESSAGE: &str =
    "Low risk of chronic kidney disease. Maintain a healthy lifestyle and regular check-ups.";

impl PredictionDomain for Kidney {
    type Request = KidneyRequest;
    type Response = KidneyResponse;

    const NAME: &'static str = "kidney-disease-prediction";
    const TITLE: &'static str = "Kidney Disease Prediction API";
    const DESCRIPTION: &'static str =
        "API for predicting chronic kidney disease using machine learning";
    // All numeric fields in declared order, then the encoded categoricals.
    // The trained model expects exactly this layout; reordering corrupts
    // predictions without any detectable error.
    const FEATURE_NAMES: &'static [&'static str] = &[
        "age",
        "bloodPressure",
        "specificGravity",
        "albumin",
        "sugar",
        "pus",
        "bloodGlucose",
        "bloodUrea",
        "serumCreatinine",
        "sodium",
        "potassium",
        "hemoglobin",
        "packedCellVolume",
        "whiteBloodCellCount",
        "redBloodCellCount",
        "redBloodCells",
        "pusCellClumps",
        "bacteria",
        "hypertension",
        "diabetesMellitus",
        "coronaryArteryDisease",
        "pedalEdema",
        "anemia",
        "appetite",
    ];
    const DEFAULT_MODEL_PATH: &'static str = "model/kidney_model.bin";

    fn encode(request: &Self::Request) -> Vec<f64> {
        vec![
            request.age,
            request.blood_pressure,
            request.specific_gravity,
            request.albumin,
            request.sugar,
            request.pus,
            request.blood_glucose,
            request.blood_urea,
            request.serum_creatinine,
            request.sodium,
            request.potassium,
            request.hemoglobin,
            request.packed_cell_volume,
            request.white_blood_cell_count,
            request.red_blood_cell_count,
            request.red_blood_cells.as_feature(),
            request.pus_cell_clumps.as_feature(),
            request.bacteria.as_feature(),
            request.hypertension.as_feature(),
            request.diabetes_mellitus.as_feature(),
            request.coronary_artery_disease.as_feature(),
            request.pedal_edema.as_feature(),
            request.anemia.as_feature(),
            request.appetite.as_feature(),
        ]
    }

    fn respond(prediction: &Prediction) -> Self::Response {
        let message = if prediction.risk {
            HIGH_RISK_MESSAGE
        } else {
            LOW_RISK_MESSAGE
        };

        KidneyResponse {
            has_kidney_disease: prediction.risk,
            probability: prediction.probability,
            message: message.to_string(),
        }
    }
}
