//! Slash commands.
//!
//! - `vc` - Base channel creation, voice settings and help

pub mod vc;
