//! Database repository layer for the voice channel tables.
//!
//! Repositories use SeaORM entity models internally and return domain models, so the
//! string-encoded Discord IDs of the store never leak into services. All queries,
//! inserts and updates are performed through these repositories.

pub mod base_channel;
pub mod counter;
pub mod generated_channel;
pub mod guild_voice_settings;

#[cfg(test)]
mod test;
