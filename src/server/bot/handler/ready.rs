//! Ready event handler for bot initialization.
//!
//! Fired once the bot completes the gateway handshake. Registers the launcher's slash
//! commands globally so they are available in every guild and in direct messages.

use serenity::all::{Command, Context, Ready};

use crate::server::bot::menu::MenuCommand;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps running with whatever commands
/// Discord already knows about.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = MenuCommand::ALL
        .iter()
        .map(|command| command.registration())
        .collect();

    match Command::set_global_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
