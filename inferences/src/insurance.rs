//! Régression polynomiale (degré 2) pour le coût d'assurance.
//!
//! Seuls `age`, `bmi`, `children` et `smoker` entrent dans le modèle ;
//! `sex` et `region` sont conservés pour l'écho mais ignorés au calcul.

use crate::inference::LinearModel;
use crate::types::{InsuranceInput, InsuranceOutput};

pub const FEATURE_NAMES: [&str; 14] = [
    "age",
    "bmi",
    "children",
    "smoker",
    "age^2",
    "age*bmi",
    "age*children",
    "age*smoker",
    "bmi^2",
    "bmi*children",
    "bmi*smoker",
    "children^2",
    "children*smoker",
    "smoker^2",
];

pub const MODEL: LinearModel<14> = LinearModel::new(
    -4180.1423420562005,
    [
        -93.36209877984236,
        505.46857700879303,
        1208.8155838935104,
        -10140.499275169626,
        4.052371621822658,
        1.138881049028754,
        -4.067147563640193,
        7.446933868845254,
        -8.719301631492407,
        1.1658677477179618,
        1446.3438319267716,
        -111.85827715064728,
        -441.51630688345466,
        -10140.499275169652,
    ],
);

/// "yes" exact (sensible à la casse) → 1.0, tout le reste → 0.0.
pub fn encode_smoker(smoker: &str) -> f64 {
    if smoker == "yes" {
        1.0
    } else {
        0.0
    }
}

pub fn polynomial_features(age: f64, bmi: f64, children: f64, smoker: f64) -> [f64; 14] {
    [
        age,
        bmi,
        children,
        smoker,
        age * age,
        age * bmi,
        age * children,
        age * smoker,
        bmi * bmi,
        bmi * children,
        bmi * smoker,
        children * children,
        children * smoker,
        smoker * smoker,
    ]
}

pub fn score(input: &InsuranceInput) -> InsuranceOutput {
    let features = polynomial_features(
        input.age,
        input.bmi,
        f64::from(input.children),
        encode_smoker(&input.smoker),
    );
    let cost = MODEL.decision(&features);

    InsuranceOutput {
        predicted_cost: cost.max(0.0),
        input_data: input.clone(),
    }
}
