use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot in a blocking manner.
///
/// Creates the serenity client with the voice event handler and runs it until the
/// connection shuts down.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and optional dev guild
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if client initialization or the gateway connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(db, config.discord_guild_id);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
