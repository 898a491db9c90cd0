use inferences::inference::round_to;
use inferences::{DiabetesInput, DiabetesOutput, InsuranceInput, InsuranceOutput};
use serde::Serialize;

pub const DIABETES_MODEL_TYPE: &str = "Native Rust ML Model (Logistic Regression)";
pub const INSURANCE_MODEL_TYPE: &str = "Native Rust ML Model (Polynomial Regression)";
pub const CURRENCY: &str = "USD";

const SEXES: &[&str] = &["male", "female"];
const SMOKER_VALUES: &[&str] = &["yes", "no"];
const REGIONS: &[&str] = &["northeast", "northwest", "southeast", "southwest"];

fn check_range(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!(
            "{} doit être entre {} et {} (valeur: {})",
            name, min, max, value
        ));
    }
}

fn check_choice(errors: &mut Vec<String>, name: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        errors.push(format!(
            "{} doit valoir {} (valeur: {})",
            name,
            allowed.join(", "),
            value
        ));
    }
}

// Bornes de saisie des formulaires. Le glucose et la tension acceptent 0,
// que le scoreur impute ensuite.
pub fn validate_diabetes(input: &DiabetesInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_range(&mut errors, "Grossesses", input.pregnancies, 0.0, 20.0);
    check_range(&mut errors, "Glucose", input.glucose, 0.0, 300.0);
    check_range(&mut errors, "Tension artérielle", input.blood_pressure, 0.0, 200.0);
    check_range(&mut errors, "IMC", input.bmi, 10.0, 70.0);
    check_range(&mut errors, "Âge", input.age, 18.0, 120.0);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_insurance(input: &InsuranceInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_range(&mut errors, "Âge", input.age, 18.0, 120.0);
    check_range(&mut errors, "IMC", input.bmi, 15.0, 50.0);
    check_range(&mut errors, "Enfants", f64::from(input.children), 0.0, 10.0);
    check_choice(&mut errors, "Sexe", &input.sex, SEXES);
    check_choice(&mut errors, "Fumeur", &input.smoker, SMOKER_VALUES);
    check_choice(&mut errors, "Région", &input.region, REGIONS);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RiskLevel {
    pub level: String,
    pub color: String,
    pub description: String,
}

impl RiskLevel {
    fn new(level: &str, color: &str, description: &str) -> Self {
        RiskLevel {
            level: level.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        }
    }

    pub fn for_diabetes(probability: f64) -> Self {
        match probability {
            p if p < 0.3 => Self::new("Low", "🟢", "Low risk of diabetes"),
            p if p < 0.7 => Self::new("Moderate", "🟡", "Moderate risk of diabetes"),
            _ => Self::new("High", "🔴", "High risk of diabetes"),
        }
    }

    pub fn for_insurance_cost(cost: f64) -> Self {
        match cost {
            c if c < 5000.0 => Self::new("Low", "🟢", "Below average insurance cost"),
            c if c < 15000.0 => Self::new("Average", "🔵", "Average insurance cost"),
            c if c < 30000.0 => Self::new("High", "🟠", "Above average insurance cost"),
            _ => Self::new("Very High", "🔴", "Very high insurance cost"),
        }
    }
}

pub fn risk_factors(input: &InsuranceInput) -> Vec<String> {
    let mut factors = Vec::new();

    if input.age > 45.0 {
        factors.push("Advanced age".to_string());
    }
    if input.bmi > 30.0 {
        factors.push("Obesity (BMI > 30)".to_string());
    }
    if input.bmi > 25.0 {
        factors.push("Overweight (BMI > 25)".to_string());
    }
    if input.smoker == "yes" {
        factors.push("Smoking".to_string());
    }
    if input.children > 3 {
        factors.push("Large family".to_string());
    }

    factors
}

/// `$1,234.57`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesResponse {
    pub prediction: u8,
    pub diabetes_risk: String,
    pub probability_no_diabetes: f64,
    pub probability_diabetes: f64,
    pub risk_level: RiskLevel,
    pub model_type: String,
    pub input_data: DiabetesInput,
}

impl DiabetesResponse {
    pub fn new(output: DiabetesOutput) -> Self {
        let diabetes_risk = if output.prediction == 1 {
            "High Risk"
        } else {
            "Low Risk"
        };

        DiabetesResponse {
            prediction: output.prediction,
            diabetes_risk: diabetes_risk.to_string(),
            probability_no_diabetes: output.probability_no_diabetes(),
            probability_diabetes: output.probability_diabetes(),
            risk_level: RiskLevel::for_diabetes(output.probability_diabetes()),
            model_type: DIABETES_MODEL_TYPE.to_string(),
            input_data: output.input_data,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceResponse {
    pub predicted_cost: f64,
    pub formatted_cost: String,
    pub currency: String,
    pub cost_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub model_type: String,
    pub input_data: InsuranceInput,
}

impl InsuranceResponse {
    pub fn new(output: InsuranceOutput) -> Self {
        let predicted_cost = round_to(output.predicted_cost, 2);

        InsuranceResponse {
            predicted_cost,
            formatted_cost: format_currency(predicted_cost),
            currency: CURRENCY.to_string(),
            cost_level: RiskLevel::for_insurance_cost(predicted_cost),
            risk_factors: risk_factors(&output.input_data),
            model_type: INSURANCE_MODEL_TYPE.to_string(),
            input_data: output.input_data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
    pub execution_time_ms: Option<u64>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
            execution_time_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inferences::{diabetes, insurance};

    fn valid_patient() -> DiabetesInput {
        DiabetesInput {
            pregnancies: 2.0,
            glucose: 120.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 28.0,
            diabetes_pedigree_function: 0.4,
            age: 35.0,
        }
    }

    fn valid_client() -> InsuranceInput {
        InsuranceInput {
            age: 30.0,
            bmi: 25.0,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_patient() {
        assert!(validate_diabetes(&valid_patient()).is_ok());
    }

    #[test]
    fn collects_every_patient_error() {
        let input = DiabetesInput {
            pregnancies: 25.0,
            age: 12.0,
            bmi: 5.0,
            ..valid_patient()
        };
        let errors = validate_diabetes(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("Grossesses"));
        assert!(errors.iter().any(|e| e.contains("valeur: 12")));
    }

    #[test]
    fn zero_glucose_passes_validation() {
        let input = DiabetesInput {
            glucose: 0.0,
            blood_pressure: 0.0,
            ..valid_patient()
        };
        assert!(validate_diabetes(&input).is_ok());
    }

    #[test]
    fn rejects_unknown_categories() {
        let input = InsuranceInput {
            sex: "other".to_string(),
            smoker: "Yes".to_string(),
            region: "north".to_string(),
            ..valid_client()
        };
        let errors = validate_insurance(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_out_of_range_client() {
        let input = InsuranceInput {
            bmi: 60.0,
            children: 11,
            ..valid_client()
        };
        assert_eq!(validate_insurance(&input).unwrap_err().len(), 2);
        assert!(validate_insurance(&valid_client()).is_ok());
    }

    #[test]
    fn diabetes_risk_tiers() {
        assert_eq!(RiskLevel::for_diabetes(0.1).level, "Low");
        assert_eq!(RiskLevel::for_diabetes(0.3).level, "Moderate");
        assert_eq!(RiskLevel::for_diabetes(0.69).level, "Moderate");
        assert_eq!(RiskLevel::for_diabetes(0.7).level, "High");
    }

    #[test]
    fn insurance_cost_tiers() {
        assert_eq!(RiskLevel::for_insurance_cost(4999.99).level, "Low");
        assert_eq!(RiskLevel::for_insurance_cost(5000.0).level, "Average");
        assert_eq!(RiskLevel::for_insurance_cost(20000.0).level, "High");
        assert_eq!(RiskLevel::for_insurance_cost(30000.0).level, "Very High");
    }

    #[test]
    fn risk_factor_list() {
        let input = InsuranceInput {
            age: 50.0,
            bmi: 32.0,
            children: 4,
            smoker: "yes".to_string(),
            ..Default::default()
        };
        assert_eq!(
            risk_factors(&input),
            vec![
                "Advanced age",
                "Obesity (BMI > 30)",
                "Overweight (BMI > 25)",
                "Smoking",
                "Large family"
            ]
        );
        assert!(risk_factors(&valid_client()).is_empty());
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(4707.44), "$4,707.44");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
    }

    #[test]
    fn percentage_formatting() {
        assert_eq!(format_percentage(0.42, 1), "42.0%");
        assert_eq!(format_percentage(1.0, 0), "100%");
    }

    #[test]
    fn insurance_response_rounds_cost() {
        let response = InsuranceResponse::new(insurance::score(&valid_client()));
        assert_eq!(response.predicted_cost, 4707.44);
        assert_eq!(response.formatted_cost, "$4,707.44");
        assert_eq!(response.currency, "USD");
        assert_eq!(response.cost_level.level, "Low");
        assert_eq!(response.input_data, valid_client());
    }

    #[test]
    fn diabetes_response_labels() {
        let response = DiabetesResponse::new(diabetes::score(&valid_patient()));
        let expected = if response.prediction == 1 {
            "High Risk"
        } else {
            "Low Risk"
        };
        assert_eq!(response.diabetes_risk, expected);
        assert!(
            (response.probability_no_diabetes + response.probability_diabetes - 1.0).abs() < 1e-12
        );
        assert_eq!(response.input_data, valid_patient());
    }

    #[test]
    fn envelope_fields() {
        let ok = serde_json::to_value(ApiResponse::success(3)).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"], 3);
        assert!(ok["executionTimeMs"].is_null());

        let err = serde_json::to_value(ApiResponse::<u8>::error("boom")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "boom");
    }
}
