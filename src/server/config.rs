use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://lounge_bookings.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, selected with `ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Comma separated platform IDs with administrator rights.
    pub admin_ids: String,
    pub environment: Environment,

    /// Public URL of the booking web app, used for CORS and bot link buttons.
    pub web_app_url: Option<String>,
    /// Chat bot token; the bot is disabled when absent.
    pub discord_bot_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let environment = match var("ENVIRONMENT").as_deref().map(str::trim) {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let web_app_url = var("WEB_APP_URL");
        let discord_bot_token = var("DISCORD_BOT_TOKEN");

        if web_app_url.is_none()
            && (environment == Environment::Production || discord_bot_token.is_some())
        {
            return Err(ConfigError::MissingEnvVar("WEB_APP_URL".to_string()).into());
        }

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            admin_ids: var("ADMIN_IDS").unwrap_or_default(),
            environment,
            web_app_url,
            discord_bot_token,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
