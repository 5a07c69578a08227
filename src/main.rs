//!
//! User service HTTP server.
//! Reads configuration from TOML file (~/.config/user-service/config.toml
//! or the path in USER_SERVICE_CONFIG).

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use user_service::config::{AppConfig, LogFormat, LoggingSection};
use user_service::shared::ShutdownCoordinator;
use user_service::{
    close_database, create_api_router, default_config_path, init_database, run_migrations,
};

fn init_tracing(logging: &LoggingSection) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = default_config_path();
    let (app_cfg, load_err) = AppConfig::load_or_default(&config_path);
    init_tracing(&app_cfg.logging);
    match load_err {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    info!("Starting user service...");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = run_migrations(&db).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }

    // ── Shutdown ───────────────────────────────────────────────
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(db.clone());

    let api_addr = app_cfg.api_address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
        shutdown_signal.wait().await;
        info!("REST API server received shutdown signal");
    });

    let drained = shutdown
        .run_until_drained(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        })
        .await;
    if !drained {
        warn!("Some requests were still in flight at shutdown");
    }

    // ── Cleanup ────────────────────────────────────────────────
    if let Err(e) = close_database(db).await {
        warn!("Error closing database connection: {}", e);
    }

    info!("User service shutdown complete");
    Ok(())
}
