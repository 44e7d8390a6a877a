//! Launcher menu content: slash command definitions, messages, and buttons.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateCommand, CreateInteractionResponseMessage,
};

/// Custom ID of the help button under the welcome message.
pub const HELP_BUTTON_ID: &str = "help";

pub const HELP_TEXT: &str = "\
**Help - Lounge Booking**

**How to book:**
1. Click \"Book a Slot\"
2. Select a date from the calendar
3. Choose a floor and one or more free hourly slots
4. Add a note (optional)
5. Confirm your booking

**Features:**
- See which slots are free or taken in real time
- Manage your bookings
- Cancel bookings you no longer need

**Commands:**
/start - Start the bot
/book - Open the booking app
/help - Show this help message

Need assistance? Contact the lounge administrator.";

const BOOK_PROMPT: &str = "Click the button below to open the booking app:";

/// Slash commands offered by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Start,
    Book,
    Help,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 3] = [Self::Start, Self::Book, Self::Help];

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Book => "book",
            Self::Help => "help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Start => "Start the bot",
            Self::Book => "Open the booking app",
            Self::Help => "Show help for booking the lounge",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Slash command definition sent to Discord on startup.
    pub fn registration(self) -> CreateCommand {
        CreateCommand::new(self.name()).description(self.description())
    }
}

/// Greeting shown for `/start`.
pub fn welcome_text(first_name: &str) -> String {
    let first_name = match first_name.trim() {
        "" => "there",
        name => name,
    };

    format!(
        "Welcome to the Lounge Booking Bot, {}!\n\n\
         This bot helps you book time slots in the lounge.\n\n\
         Click the button below to open the booking app:",
        first_name
    )
}

fn open_app_button(web_app_url: &str, label: &str) -> CreateButton {
    CreateButton::new_link(web_app_url).label(label)
}

/// Builds the reply for a slash command.
///
/// # Arguments
/// - `command` - Command that was invoked
/// - `first_name` - Name used in the `/start` greeting
/// - `web_app_url` - URL opened by the link button
pub fn response_message(
    command: MenuCommand,
    first_name: &str,
    web_app_url: &str,
) -> CreateInteractionResponseMessage {
    match command {
        MenuCommand::Start => CreateInteractionResponseMessage::new()
            .content(welcome_text(first_name))
            .components(vec![
                CreateActionRow::Buttons(vec![open_app_button(web_app_url, "Book a Slot")]),
                CreateActionRow::Buttons(vec![CreateButton::new(HELP_BUTTON_ID)
                    .label("Help")
                    .style(ButtonStyle::Secondary)]),
            ]),
        MenuCommand::Book => CreateInteractionResponseMessage::new()
            .content(BOOK_PROMPT)
            .components(vec![CreateActionRow::Buttons(vec![open_app_button(
                web_app_url,
                "Open Booking App",
            )])]),
        MenuCommand::Help => help_message(),
    }
}

/// Reply for `/help` and the help button, visible only to the requester.
pub fn help_message() -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(HELP_TEXT)
        .ephemeral(true)
}
