//! Interaction handler for slash commands and launcher buttons.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse, Interaction,
};

use crate::server::bot::menu::{self, MenuCommand, HELP_BUTTON_ID};

/// Dispatches an interaction to the matching launcher response.
///
/// Unknown commands and components are ignored.
pub async fn handle_interaction(web_app_url: &str, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(web_app_url, &ctx, &command).await,
        Interaction::Component(component) => handle_component(&ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(web_app_url: &str, ctx: &Context, command: &CommandInteraction) {
    let Some(menu_command) = MenuCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command /{}", command.data.name);
        return;
    };

    let first_name = command
        .user
        .global_name
        .as_deref()
        .unwrap_or(&command.user.name);
    let message = menu::response_message(menu_command, first_name, web_app_url);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to answer /{}: {:?}", command.data.name, e);
    }
}

async fn handle_component(ctx: &Context, component: &ComponentInteraction) {
    if component.data.custom_id != HELP_BUTTON_ID {
        return;
    }

    let message = menu::help_message();

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to answer help button: {:?}", e);
    }
}
