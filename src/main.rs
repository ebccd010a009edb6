use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    AppState,
    db::{postgres::create_pool, schema::ensure_tables},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry,
};

fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.log_level);
    tracing::info!("Loaded configuration: {:?}", config);

    let pool = match create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {e}");
            std::process::exit(1);
        }
    };

    match ensure_tables(&pool).await {
        Ok(()) => tracing::info!("Database tables created"),
        Err(e) => tracing::warn!("Database connection failed, tables not created: {e}"),
    }

    let app_state = web::Data::new(AppState::new(pool));

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&config.cors_origins()))
            .configure(|cfg| configure_routes(cfg, &config.api_prefix))
    })
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
