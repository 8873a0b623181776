//! Factory methods for creating test data.
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let settings = factory::create_settings(&db).await?;
//!     let base = factory::create_base_channel(&db, &settings.guild_id).await?;
//!     let clone = factory::create_generated_channel(&db, &base).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_voice_settings` - Per-guild voice configuration rows
//! - `base_voice_channel` - Registered base channels
//! - `generated_voice_channel` - Clones spawned from base channels
//! - `helpers` - ID generation and combined setup helpers

pub mod base_voice_channel;
pub mod generated_voice_channel;
pub mod guild_voice_settings;
pub mod helpers;

pub use base_voice_channel::create_base_channel;
pub use generated_voice_channel::create_generated_channel;
pub use guild_voice_settings::create_settings;
