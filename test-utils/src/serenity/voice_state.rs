//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState for a guild member.
///
/// The state carries a full `member` payload so display and account names can be
/// read from it the same way they are for gateway events.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Member's user ID
/// - `username` - Account name
/// - `nick` - Optional guild nickname
/// - `channel_id` - Voice channel the member is in, `None` when disconnected
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    channel_id: Option<u64>,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "channel_id": channel_id.map(|id| id.to_string()),
        "guild_id": guild_id.to_string(),
        "user_id": user_id.to_string(),
        "member": {
            "guild_id": guild_id.to_string(),
            "user": {
                "id": user_id.to_string(),
                "username": username,
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": false,
            },
            "nick": nick,
            "avatar": null,
            "roles": [],
            "joined_at": "2024-01-01T00:00:00.000000+00:00",
            "premium_since": null,
            "deaf": false,
            "mute": false,
            "flags": 0,
            "pending": false,
            "communication_disabled_until": null,
        },
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state")
}
