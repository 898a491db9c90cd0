//! Régression logistique pour le risque de diabète.

use crate::inference::{sigmoid, LinearModel};
use crate::types::{DiabetesInput, DiabetesOutput};

// Médianes et moyennes du jeu d'entraînement, utilisées pour remplacer les
// mesures à 0 (physiologiquement impossibles).
pub const GLUCOSE_MEDIAN: f64 = 131.0;
pub const INSULIN_MEDIAN: f64 = 175.0;
pub const SKIN_THICKNESS_MEDIAN: f64 = 33.0;
pub const BMI_MEAN: f64 = 32.32894703884422;
pub const BLOOD_PRESSURE_MEAN: f64 = 89.08794788273616;

pub const THRESHOLD: f64 = 0.5;

pub const FEATURE_NAMES: [&str; 9] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
    "BloodPressure*Insulin",
];

pub const MODEL: LinearModel<9> = LinearModel::new(
    0.3404258428017019,
    [
        0.33017640750093313,
        1.9464180116461807,
        0.3161478707356027,
        -0.09439815871113763,
        0.0,
        1.6124618253703344,
        0.0,
        1.4902135991042622,
        -0.15131742186682828,
    ],
);

fn or_default(value: f64, replacement: f64) -> f64 {
    if value == 0.0 {
        replacement
    } else {
        value
    }
}

/// Remplace les zéros de glucose, insuline, pli cutané, IMC et tension.
/// Grossesses, pedigree et âge ne sont jamais imputés : 0 y est une valeur valide.
pub fn impute(input: &DiabetesInput) -> DiabetesInput {
    DiabetesInput {
        glucose: or_default(input.glucose, GLUCOSE_MEDIAN),
        insulin: or_default(input.insulin, INSULIN_MEDIAN),
        skin_thickness: or_default(input.skin_thickness, SKIN_THICKNESS_MEDIAN),
        bmi: or_default(input.bmi, BMI_MEAN),
        blood_pressure: or_default(input.blood_pressure, BLOOD_PRESSURE_MEAN),
        ..*input
    }
}

/// Vecteur de features dans l'ordre des coefficients, interaction tension × insuline en dernier.
pub fn features(imputed: &DiabetesInput) -> [f64; 9] {
    [
        imputed.pregnancies,
        imputed.glucose,
        imputed.blood_pressure,
        imputed.skin_thickness,
        imputed.insulin,
        imputed.bmi,
        imputed.diabetes_pedigree_function,
        imputed.age,
        imputed.blood_pressure * imputed.insulin,
    ]
}

pub fn classify(probability: f64) -> u8 {
    if probability > THRESHOLD {
        1
    } else {
        0
    }
}

pub fn score(input: &DiabetesInput) -> DiabetesOutput {
    let imputed = impute(input);
    let probability = sigmoid(MODEL.decision(&features(&imputed)));

    DiabetesOutput {
        prediction: classify(probability),
        probabilities: [1.0 - probability, probability],
        input_data: *input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> DiabetesInput {
        DiabetesInput {
            pregnancies: 6.0,
            glucose: 148.0,
            blood_pressure: 72.0,
            skin_thickness: 35.0,
            insulin: 0.0,
            bmi: 33.6,
            diabetes_pedigree_function: 0.627,
            age: 50.0,
        }
    }

    #[test]
    fn imputes_every_zero_reading_except_age() {
        let input = DiabetesInput {
            age: 40.0,
            ..Default::default()
        };
        let imputed = impute(&input);

        assert_eq!(imputed.glucose, 131.0);
        assert_eq!(imputed.insulin, 175.0);
        assert_eq!(imputed.skin_thickness, 33.0);
        assert_eq!(imputed.bmi, 32.32894703884422);
        assert_eq!(imputed.blood_pressure, 89.08794788273616);
        assert_eq!(imputed.pregnancies, 0.0);
        assert_eq!(imputed.diabetes_pedigree_function, 0.0);
        assert_eq!(imputed.age, 40.0);
    }

    #[test]
    fn keeps_non_zero_readings() {
        let imputed = impute(&sample_patient());
        assert_eq!(imputed.glucose, 148.0);
        assert_eq!(imputed.blood_pressure, 72.0);
        assert_eq!(imputed.skin_thickness, 35.0);
        assert_eq!(imputed.bmi, 33.6);
        assert_eq!(imputed.insulin, 175.0);
    }

    #[test]
    fn interaction_uses_imputed_values() {
        let f = features(&impute(&sample_patient()));
        assert_eq!(f[4], 175.0);
        assert_eq!(f[8], 72.0 * 175.0);
        assert_eq!(f[7], 50.0);
    }

    #[test]
    fn sample_patient_is_low_risk_and_reproducible() {
        let first = score(&sample_patient());
        let second = score(&sample_patient());

        assert_eq!(first.prediction, 0);
        assert_eq!(first.probabilities, [1.0, 0.0]);
        assert_eq!(
            first.probabilities[0].to_bits(),
            second.probabilities[0].to_bits()
        );
        assert_eq!(
            first.probabilities[1].to_bits(),
            second.probabilities[1].to_bits()
        );
    }

    #[test]
    fn small_insulin_reading_is_high_risk() {
        let input = DiabetesInput {
            pregnancies: 0.0,
            glucose: 100.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 1.0,
            bmi: 30.0,
            diabetes_pedigree_function: 0.5,
            age: 30.0,
        };
        let output = score(&input);

        assert_eq!(output.prediction, 1);
        assert!(output.probability_diabetes() > 0.5);
        assert!(output.probability_no_diabetes() < 0.5);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(classify(0.5), 0);
        assert_eq!(classify(0.5000001), 1);
        assert_eq!(classify(0.0), 0);
    }

    #[test]
    fn echoes_raw_input() {
        let input = sample_patient();
        let output = score(&input);
        assert_eq!(output.input_data, input);
        assert_eq!(output.input_data.insulin, 0.0);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(score(&sample_patient())).unwrap();
        assert_eq!(json["prediction"], 0);
        assert_eq!(json["inputData"]["bloodPressure"], 72.0);
        assert_eq!(json["inputData"]["diabetesPedigreeFunction"], 0.627);
        assert!(json["probabilities"].is_array());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let input: DiabetesInput = serde_json::from_str(r#"{"glucose": 120, "age": 33}"#).unwrap();
        assert_eq!(input.glucose, 120.0);
        assert_eq!(input.age, 33.0);
        assert_eq!(input.insulin, 0.0);
        assert_eq!(input.bmi, 0.0);
    }
}
