use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router,
    state::AppState,
};

/// Requests allowed per client IP within one rate limit window.
const RATE_LIMIT_BURST: u32 = 100;
/// Length of the rate limit window.
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);
/// How often stale rate limiter entries are purged.
const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations, which include the partial unique
/// index guarding active bookings. File databases are switched to WAL journaling so readers
/// don't block the writer.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if !config.database_url.contains(":memory:") {
        db.execute_unprepared("PRAGMA journal_mode=WAL").await?;
    }

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

/// Builds the CORS layer for the configured environment.
///
/// Development allows any origin; production only allows the booking web app.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the environment
/// - `Err(AppError::ConfigErr)` - `WEB_APP_URL` missing or not a valid header value in production
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if !config.is_production() {
        return Ok(cors.allow_origin(Any));
    }

    let url = config
        .web_app_url
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("WEB_APP_URL".to_string()))?;
    let origin = HeaderValue::from_str(url.trim_end_matches('/')).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "WEB_APP_URL".to_string(),
            value: url.to_string(),
        }
    })?;

    Ok(cors.allow_origin(AllowOrigin::exact(origin)))
}

/// Applies per-client-IP rate limiting to the given routes.
///
/// Each client may burst up to 100 requests and regains one request every nine seconds,
/// i.e. 100 requests per 15 minutes. Client IPs are read from proxy headers when present,
/// otherwise from the peer address. Spawns a task that periodically purges stale limiter
/// state.
///
/// # Returns
/// - `Ok(Router)` - Routes wrapped in the rate limiting layer
/// - `Err(AppError::InternalError)` - Rate limit configuration rejected
pub fn rate_limited(routes: Router<AppState>) -> Result<Router<AppState>, AppError> {
    let config = GovernorConfigBuilder::default()
        .period(RATE_LIMIT_WINDOW / RATE_LIMIT_BURST)
        .burst_size(RATE_LIMIT_BURST)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limit configuration".to_string()))?;
    let config = Arc::new(config);

    let limiter = config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    Ok(routes.layer(GovernorLayer::new(config)))
}

/// Assembles the full application: rate-limited API, docs, health, tracing, and CORS.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(AppError)` - Invalid CORS or rate limit configuration
pub fn build_app(state: AppState, config: &Config) -> Result<Router, AppError> {
    let app = router::router(rate_limited)?
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?)
        .with_state(state);

    Ok(app)
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received interrupt signal, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
