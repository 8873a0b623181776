use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready, VoiceState};
use serenity::async_trait;
use std::sync::OnceLock;

use crate::service::voice_lifecycle::VoiceLifecycleService;

pub mod interaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Set once the client is ready and its HTTP client and cache can be shared
    pub voice: OnceLock<VoiceLifecycleService>,
    /// Guild to register commands on instead of globally
    pub guild_id: Option<u64>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_id: Option<u64>) -> Self {
        Self {
            db,
            voice: OnceLock::new(),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.db, &self.voice, self.guild_id, ctx, ready).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self.voice.get(), ctx, old, new).await;
    }

    /// Called when a slash command is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, self.voice.get(), ctx, interaction).await;
    }
}
