use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::{bot::command::vc, service::voice_lifecycle::VoiceLifecycleService};

/// Handles the interaction_create event for slash commands.
///
/// Only `/vc` is registered; other interaction kinds are ignored.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    voice: Option<&VoiceLifecycleService>,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != vc::NAME {
        tracing::debug!("Ignoring unknown command /{}", command.data.name);
        return;
    }

    if let Err(e) = vc::run(db, voice, &ctx, &command).await {
        tracing::error!("Failed to respond to /{}: {:?}", vc::NAME, e);
    }
}
