use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use resume_api::{
    db::postgres::{create_pool, run_migrations},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Migration error: {}", e);
        std::process::exit(1);
    }

    let app_state = web::Data::new(
        AppState::new(&config, pool.clone())
            .expect("Failed to initialize application state")
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Resume API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let upload_dir = config.upload_dir.clone();
    let cors_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_config))
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}

fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    if origins.iter().any(|o| o == "*") {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
    } else {
        origins.iter().fold(
            Cors::default().allow_any_method().allow_any_header(),
            |cors, origin| cors.allowed_origin(origin),
        )
    }
}
