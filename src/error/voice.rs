//! Failures of voice channel management.
//!
//! Discord HTTP failures are classified by status code so callers can decide
//! whether a failure is worth telling the member about or only worth a log line.

use serenity::http::HttpError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    /// The bot lacks the Discord permission needed for the action.
    #[error("I don't have permission to do that: {0}")]
    PermissionDenied(String),

    /// Discord rejected or failed the request for another reason.
    #[error("Discord request failed: {0}")]
    RequestFailed(String),

    /// The target channel, member or base channel no longer exists.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The guild already has as many generated channels as it allows.
    #[error("This server already has {active} of {max} temporary voice channels.")]
    CapacityExceeded { active: u64, max: i32 },

    /// A command argument was outside of its accepted range.
    #[error("{0}")]
    ValidationFailed(String),

    /// A direct message could not be delivered, usually because the member closed DMs.
    #[error("Could not reach member: {0}")]
    Unreachable(String),
}

impl VoiceError {
    /// Classifies a serenity error raised by a channel management call.
    ///
    /// # Arguments
    /// - `err` - Error returned by serenity
    ///
    /// # Returns
    /// - `PermissionDenied` - Discord answered 403
    /// - `NotFound` - Discord answered 404
    /// - `RequestFailed` - Any other failure, including transport errors
    pub fn from_serenity(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                let message = response.error.message.clone();
                match response.status_code.as_u16() {
                    403 => Self::PermissionDenied(message),
                    404 => Self::NotFound(message),
                    _ => Self::RequestFailed(message),
                }
            }
            other => Self::RequestFailed(other.to_string()),
        }
    }
}
