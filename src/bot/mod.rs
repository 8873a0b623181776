//! Discord bot integration for the voice channel lifecycle.
//!
//! This module connects the lifecycle service to Discord: the serenity client and
//! its event handlers, the `/vc` slash command, and `SerenityPlatform`, which
//! performs the channel operations the lifecycle asks for through serenity's HTTP
//! client and cache.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data for the cache
//! - `GUILD_VOICE_STATES` - Voice state updates, and voice states in the cache used
//!   to count channel occupants

pub mod command;
pub mod handler;
pub mod platform;
pub mod start;
