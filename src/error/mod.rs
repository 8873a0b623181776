//! Error types for the voice channel bot.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Event
//! handlers and commands catch it at the serenity boundary, trace it, and turn it
//! into a user-facing reply where one is expected; it never crashes the bot.

pub mod config;
pub mod internal;
pub mod voice;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, voice::VoiceError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal state, such as a malformed ID stored in the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Raised by client setup; channel management calls
    /// are classified into `VoiceErr` instead.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Voice channel lifecycle error.
    #[error(transparent)]
    VoiceErr(#[from] VoiceError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message safe to show to the member who ran a command.
    ///
    /// Voice errors carry their own wording; anything else is reported generically
    /// and only traced in full.
    pub fn user_message(&self) -> String {
        match self {
            Self::VoiceErr(err) => err.to_string(),
            _ => "Something went wrong while handling that command.".to_string(),
        }
    }
}
