//! Ready event handler for bot initialization.
//!
//! The ready event fires after the gateway handshake. It is used to build the voice
//! lifecycle service around the client's HTTP client and cache, and to register the
//! `/vc` command.

use sea_orm::DatabaseConnection;
use serenity::all::{Command, Context, GuildId, Ready};
use std::sync::{Arc, OnceLock};

use crate::{
    bot::{command::vc, platform::SerenityPlatform},
    service::voice_lifecycle::VoiceLifecycleService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// The lifecycle service is only created on the first ready event; reconnects keep
/// the existing service so pending deletion timers survive.
///
/// # Arguments
/// - `db` - Database connection handed to the lifecycle service
/// - `voice` - Slot holding the lifecycle service
/// - `guild_id` - Guild to register `/vc` on, or `None` to register it globally
/// - `ctx` - Discord context providing the HTTP client and cache
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    db: &DatabaseConnection,
    voice: &OnceLock<VoiceLifecycleService>,
    guild_id: Option<u64>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    voice.get_or_init(|| {
        let platform = SerenityPlatform::new(ctx.http.clone(), ctx.cache.clone());
        VoiceLifecycleService::new(db.clone(), Arc::new(platform))
    });

    let commands = vec![vc::register()];

    match guild_id {
        Some(guild_id) => {
            if let Err(e) = GuildId::new(guild_id)
                .set_commands(&ctx.http, commands)
                .await
            {
                tracing::error!("Failed to register commands for guild {}: {:?}", guild_id, e);
            } else {
                tracing::info!("Registered /vc for guild {}", guild_id);
            }
        }
        None => {
            if let Err(e) = Command::set_global_commands(&ctx.http, commands).await {
                tracing::error!("Failed to register global commands: {:?}", e);
            } else {
                tracing::info!("Registered /vc globally");
            }
        }
    }
}
