use axum::{http::Method, routing::get, Router};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auditkeeper_backend::{
    config::Config,
    db::{connection::create_pool, schema::ensure_schema},
    handlers,
    state::AppState,
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auditkeeper_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        db_host = %config.db_host,
        db_port = config.db_port,
        db_user = %config.db_user,
        db_password = %mask_secret(&config.db_password),
        db_database = %config.db_database,
        production_mode = config.production_mode,
        "Loaded configuration from environment/.env"
    );

    // Initialize database. A failed connection attempt is logged but not
    // fatal: the server starts anyway and handlers answer 503 until the
    // process is restarted with a reachable database.
    let pool = match create_pool(&config).await {
        Ok(pool) => {
            match ensure_schema(&pool).await {
                Ok(()) => {
                    tracing::info!("Database connection established and table 'audits' is ready")
                }
                Err(e) => tracing::error!(error = %e, "Failed to create 'audits' table"),
            }
            Some(pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "CRITICAL: failed to connect to database");
            None
        }
    };

    let state = AppState::new(pool, config.clone());

    // API routes
    let mut app = Router::new()
        .route(
            "/api/audits",
            get(handlers::audits::list_audits).post(handlers::audits::create_audit),
        )
        .route("/api/audits/{id}", get(handlers::audits::get_audit));

    // Production mode: serve the prebuilt frontend bundle, with the SPA
    // entry document as the GET-only fallback for client-side routed
    // paths.
    if config.production_mode {
        app = app
            .nest_service(
                "/static",
                ServeDir::new(config.frontend_build_dir.join("static")),
            )
            .fallback_service(get(handlers::spa::spa_fallback).with_state(state.clone()));
    }

    // Compose app with shared layers (CORS/Trace) and shared state
    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state.clone());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing connection pool");
    if let Ok(pool) = state.pool() {
        pool.close().await;
    }
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
