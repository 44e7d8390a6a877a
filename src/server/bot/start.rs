use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, error::AppError};

/// Builds the Discord bot client.
///
/// # Arguments
/// - `token` - Bot token from `DISCORD_BOT_TOKEN`
/// - `web_app_url` - URL opened by the launcher buttons
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(token: &str, web_app_url: String) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(token, intents)
        .event_handler(Handler::new(web_app_url))
        .await?;

    Ok(client)
}

/// Runs the bot until the gateway connection ends.
///
/// Should be called from within a `tokio::spawn` task since it only returns on shutdown
/// or error.
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connection to Discord failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
