use crate::error::ApiError;
use crate::inference::get_models_info;
use crate::models::{
    format_currency, format_percentage, validate_diabetes, validate_insurance, ApiResponse,
    DiabetesResponse, InsuranceResponse, StatusMessage,
};
use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::{web, HttpResponse, Responder};
use inferences::{diabetes, insurance, DiabetesInput, InsuranceInput};
use log::{error, info, warn};
use std::time::Instant;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health_check))
        .route("/api/model-info", web::get().to(model_info))
        .service(
            web::resource("/api/diabetes")
                .route(web::get().to(diabetes_status))
                .route(web::method(Method::OPTIONS).to(options_ok))
                .route(web::post().to(predict_diabetes))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/diabetes/batch")
                .route(web::post().to(batch_diabetes))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/insurance")
                .route(web::get().to(insurance_status))
                .route(web::method(Method::OPTIONS).to(options_ok))
                .route(web::post().to(predict_insurance))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/insurance/batch")
                .route(web::post().to(batch_insurance))
                .default_service(web::to(method_not_allowed)),
        );
}

// Comme les formulaires d'origine : `Access-Control-Allow-Origin: *`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .max_age(3600)
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            warn!("Corps JSON rejeté: {}", err);
            ApiError::BadPayload(err.to_string()).into()
        })
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::<String>::error("Endpoint non trouvé"))
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success("✅ API de prédiction médicale"))
}

async fn model_info() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(get_models_info()))
}

async fn options_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

async fn diabetes_status() -> impl Responder {
    HttpResponse::Ok().json(StatusMessage {
        message: "Diabetes prediction API is running (Native Rust ML Model)".to_string(),
    })
}

async fn insurance_status() -> impl Responder {
    HttpResponse::Ok().json(StatusMessage {
        message: "Insurance cost prediction API is running (Native Rust ML Model)".to_string(),
    })
}

async fn predict_diabetes(req: web::Json<DiabetesInput>) -> Result<HttpResponse, ApiError> {
    let input = req.into_inner();

    if let Err(details) = validate_diabetes(&input) {
        warn!("Validation diabète échouée: {}", details.join("; "));
        return Err(ApiError::Validation(details));
    }

    let output = diabetes::score(&input);
    info!(
        "Prédiction diabète: classe={} probabilité={}",
        output.prediction,
        format_percentage(output.probability_diabetes(), 1)
    );

    Ok(HttpResponse::Ok().json(DiabetesResponse::new(output)))
}

async fn predict_insurance(req: web::Json<InsuranceInput>) -> Result<HttpResponse, ApiError> {
    let input = req.into_inner();

    if let Err(details) = validate_insurance(&input) {
        warn!("Validation assurance échouée: {}", details.join("; "));
        return Err(ApiError::Validation(details));
    }

    let response = InsuranceResponse::new(insurance::score(&input));
    info!("Prédiction assurance: coût={}", response.formatted_cost);

    Ok(HttpResponse::Ok().json(response))
}

async fn batch_diabetes(req: web::Json<Vec<DiabetesInput>>) -> Result<HttpResponse, ApiError> {
    let start_time = Instant::now();
    let inputs = req.into_inner();

    info!("Nouvelle requête batch diabète: {} patients", inputs.len());

    if inputs.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    for (i, input) in inputs.iter().enumerate() {
        validate_diabetes(input).map_err(|details| ApiError::BatchItem {
            index: i + 1,
            details,
        })?;
    }

    let results = web::block(move || {
        inputs
            .iter()
            .map(|input| DiabetesResponse::new(diabetes::score(input)))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| {
        error!("Erreur d'exécution bloquante batch: {}", e);
        ApiError::Blocking(e.to_string())
    })?;

    info!("Batch diabète réussi: {} résultats", results.len());
    let mut response = ApiResponse::success(results);
    response.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
    Ok(HttpResponse::Ok().json(response))
}

async fn batch_insurance(req: web::Json<Vec<InsuranceInput>>) -> Result<HttpResponse, ApiError> {
    let start_time = Instant::now();
    let inputs = req.into_inner();

    info!("Nouvelle requête batch assurance: {} clients", inputs.len());

    if inputs.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    for (i, input) in inputs.iter().enumerate() {
        validate_insurance(input).map_err(|details| ApiError::BatchItem {
            index: i + 1,
            details,
        })?;
    }

    let results = web::block(move || {
        inputs
            .iter()
            .map(|input| InsuranceResponse::new(insurance::score(input)))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| {
        error!("Erreur d'exécution bloquante batch: {}", e);
        ApiError::Blocking(e.to_string())
    })?;

    let total: f64 = results.iter().map(|r| r.predicted_cost).sum();
    info!(
        "Batch assurance réussi: {} résultats, total {}",
        results.len(),
        format_currency(total)
    );
    let mut response = ApiResponse::success(results);
    response.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
    Ok(HttpResponse::Ok().json(response))
}
