use inferences::{diabetes, insurance};
use serde::Serialize;

pub const MODEL_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    pub model_type: String,
    pub version: String,
    pub input_shape: Vec<usize>,
    pub features: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub threshold: Option<f64>,
}

pub fn diabetes_model_info() -> ModelInfo {
    ModelInfo {
        name: "diabetes".to_string(),
        model_type: "Logistic Regression".to_string(),
        version: MODEL_VERSION.to_string(),
        input_shape: vec![1, diabetes::MODEL.feature_count()],
        features: diabetes::FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
        intercept: diabetes::MODEL.intercept,
        coefficients: diabetes::MODEL.coefficients.to_vec(),
        threshold: Some(diabetes::THRESHOLD),
    }
}

pub fn insurance_model_info() -> ModelInfo {
    ModelInfo {
        name: "insurance".to_string(),
        model_type: "Polynomial Regression (degree 2)".to_string(),
        version: MODEL_VERSION.to_string(),
        input_shape: vec![1, insurance::MODEL.feature_count()],
        features: insurance::FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
        intercept: insurance::MODEL.intercept,
        coefficients: insurance::MODEL.coefficients.to_vec(),
        threshold: None,
    }
}

pub fn get_models_info() -> Vec<ModelInfo> {
    vec![diabetes_model_info(), insurance_model_info()]
}
