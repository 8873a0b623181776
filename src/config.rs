use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://voicebot.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Guild to register `/vc` on instead of globally, for development.
    pub discord_guild_id: Option<u64>,

    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            discord_guild_id: parse_guild_id(std::env::var("DISCORD_GUILD_ID").ok())?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn parse_guild_id(value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "DISCORD_GUILD_ID".to_string(),
            reason: e.to_string(),
        })
}
