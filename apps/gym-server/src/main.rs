use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tracing::{info, warn};

use gym_api::{app, AppState};
use gym_infrastructure::{
    create_pool, run_migrations, PgClassRepository, PgTenantRepository, PgUserRepository,
};
use gym_security::hasher_from_settings;
use gym_shared::config::AppConfig;
use gym_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read inside `load`)
    let config = AppConfig::load().context("failed to load configuration")?;

    // Held until shutdown so buffered file logs are flushed
    let _telemetry = init_telemetry(&config.log)?;

    info!(env = %config.app.env, "{} starting...", config.app.name);

    // Connect to Database
    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    if config.database.run_migrations {
        run_migrations(&pool).await.context("failed to run migrations")?;
    }

    let hasher = hasher_from_settings(&config.security)?;
    info!(algorithm = ?config.security.password_algorithm, "Password hasher configured");

    // Create App State
    let state = AppState {
        tenants: Arc::new(PgTenantRepository::new(pool.clone())),
        users: Arc::new(PgUserRepository::new(pool.clone())),
        classes: Arc::new(PgClassRepository::new(pool.clone())),
        hasher,
    };

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    // Start server
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
