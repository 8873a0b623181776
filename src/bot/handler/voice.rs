use serenity::all::{Context, VoiceState};

use crate::{
    model::voice_event::VoiceStateChange, service::voice_lifecycle::VoiceLifecycleService,
};

/// Handles the voice_state_update event when a member joins, leaves or moves.
///
/// Events that arrive before the lifecycle service exists, or that do not belong
/// to a guild, are dropped.
pub async fn handle_voice_state_update(
    voice: Option<&VoiceLifecycleService>,
    _ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(voice) = voice else {
        tracing::debug!("Voice state update received before the bot was ready");
        return;
    };

    let Some(change) = VoiceStateChange::from_serenity(old.as_ref(), &new) else {
        return;
    };

    voice.on_voice_state_change(&change).await;
}
