//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating a base
//! channel together with the guild settings row it belongs to.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Starts well above zero so generated IDs look like Discord snowflakes and
/// never collide with the small literal IDs tests use directly.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild settings row and one base channel registered in that guild.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((settings, base))` - Created settings and base channel rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_base_channel(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::guild_voice_settings::Model,
        entity::base_voice_channel::Model,
    ),
    DbErr,
> {
    let settings = crate::factory::guild_voice_settings::create_settings(db).await?;
    let base =
        crate::factory::base_voice_channel::create_base_channel(db, &settings.guild_id).await?;

    Ok((settings, base))
}
