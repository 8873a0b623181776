//! SeaORM entity models for the voice channel bot.
//!
//! One module per table. Discord snowflakes are stored as decimal strings and
//! converted at the repository boundary in the main crate.

pub mod prelude;

pub mod base_voice_channel;
pub mod generated_voice_channel;
pub mod guild_voice_settings;
