use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use ud_api::{config::Config, create_app, AppState};
use ud_core::services::token::TokenService;
use ud_infra::{DatabasePool, MySqlUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logger; RUST_LOG wins over the configured level
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(config.app.logging.level.as_str()),
    );
    logger.format_module_path(config.app.logging.module_path);
    if !config.app.logging.timestamp {
        logger.format_timestamp(None);
    }
    logger.init();

    info!(
        "Starting user directory API ({} environment)",
        config.app.environment
    );
    config.check_secret()?;

    let pool = DatabasePool::new(config.app.database.clone())
        .await
        .context("Failed to connect to the database")?;
    if !pool
        .health_check()
        .await
        .context("Database health check failed")?
    {
        anyhow::bail!("Database health check returned an unexpected value");
    }
    info!("{}", pool.get_statistics());
    if config.app.database.run_migrations {
        pool.run_migrations()
            .await
            .context("Failed to apply database migrations")?;
    }

    let token_service =
        Arc::new(TokenService::new(config.jwt()).context("Invalid JWT configuration")?);
    let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let app_state = web::Data::new(AppState::new(repository, token_service));

    let bind_address = config.app.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_config = config.app.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config))
        .keep_alive(std::time::Duration::from_secs(config.app.server.keep_alive));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    Ok(())
}
