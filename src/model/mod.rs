//! Domain models and operation parameters.
//!
//! Entity models from the `entity` crate are converted into these types at the
//! repository boundary, parsing stored Discord IDs into `u64` on the way.

pub mod voice_channel;
pub mod voice_event;
pub mod voice_settings;
