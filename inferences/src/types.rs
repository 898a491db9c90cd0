use serde::{Deserialize, Serialize};

// Les champs numériques absents valent 0, comme dans les formulaires d'origine.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DiabetesInput {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesOutput {
    pub prediction: u8,
    /// `[sans diabète, diabète]`
    pub probabilities: [f64; 2],
    pub input_data: DiabetesInput,
}

impl DiabetesOutput {
    pub fn probability_no_diabetes(&self) -> f64 {
        self.probabilities[0]
    }

    pub fn probability_diabetes(&self) -> f64 {
        self.probabilities[1]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InsuranceInput {
    pub age: f64,
    pub sex: String,
    pub bmi: f64,
    pub children: u32,
    pub smoker: String,
    pub region: String,
}

impl Default for InsuranceInput {
    fn default() -> Self {
        InsuranceInput {
            age: 0.0,
            sex: "male".to_string(),
            bmi: 0.0,
            children: 0,
            smoker: "no".to_string(),
            region: "northeast".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceOutput {
    /// Montant brut, non arrondi. L'arrondi monétaire est fait par l'appelant.
    pub predicted_cost: f64,
    pub input_data: InsuranceInput,
}
