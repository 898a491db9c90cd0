use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::routes;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Démarrage de l'API de prédiction (diabète, assurance)");

    let config = ServerConfig::from_env();
    let bind_address = config.bind_address();
    let json_limit = config.json_limit;

    info!("🌐 Serveur démarré sur: http://{}", bind_address);
    info!("👷 Workers: {}", config.workers);
    info!("🔧 Endpoints API:");
    info!("   GET  /api/health            - Vérification santé");
    info!("   GET  /api/model-info        - Information modèles");
    info!("   POST /api/diabetes          - Prédiction diabète");
    info!("   POST /api/diabetes/batch    - Prédiction diabète multiple");
    info!("   POST /api/insurance         - Coût assurance");
    info!("   POST /api/insurance/batch   - Coût assurance multiple");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(routes::cors())
            .app_data(routes::json_config(json_limit))
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
