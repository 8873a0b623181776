//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot layer and the data (repository) layer. They
//! implement validation rules, coordinate multiple repository calls and drive
//! Discord through the `VoicePlatform` seam.

pub mod naming;
pub mod voice_lifecycle;
pub mod voice_settings;
