//! Discord bot launcher for the booking web app.
//!
//! The bot registers the `/start`, `/book` and `/help` slash commands and answers them
//! with a greeting, a link button to the booking web app, and the help text. It carries
//! no booking logic; all reservations go through the HTTP API.
//!
//! The bot only runs when `DISCORD_BOT_TOKEN` is configured. It is started in a separate
//! tokio task so it never blocks the HTTP server.
//!
//! # Gateway Intents
//!
//! Slash commands arrive as interactions, so only `GUILDS` is requested.

pub mod handler;
pub mod menu;
pub mod start;
