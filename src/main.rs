mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot, config::Config, error::AppError, service::admin::AdminService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let admins = AdminService::from_csv(&config.admin_ids);
    if admins.is_empty() {
        tracing::warn!("ADMIN_IDS is empty, no user can cancel other users' bookings");
    } else {
        tracing::info!("Loaded {} administrator(s)", admins.len());
    }

    match (&config.discord_bot_token, &config.web_app_url) {
        (Some(token), Some(web_app_url)) => {
            let client = bot::start::init_bot(token, web_app_url.clone()).await?;

            // Start Discord bot in a separate task
            tokio::spawn(async move {
                if let Err(e) = bot::start::start_bot(client).await {
                    tracing::error!("Discord bot error: {}", e);
                }
            });
        }
        _ => tracing::info!("DISCORD_BOT_TOKEN not set, chat bot disabled"),
    }

    let app = startup::build_app(AppState::new(db, admins), &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Server listening on {} ({})",
        addr,
        if config.is_production() {
            "production"
        } else {
            "development"
        }
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(startup::shutdown_signal())
    .await?;

    tracing::info!("Server has been gracefully shut down");

    Ok(())
}
