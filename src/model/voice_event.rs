//! Voice state changes and the channel shapes exchanged with Discord.

use serenity::all::{PermissionOverwrite, VoiceState};

/// One voice state change of a guild member, reduced to what the lifecycle needs.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceStateChange {
    pub guild_id: u64,
    pub member_id: u64,
    /// Account name, substituted for `{user_name}`.
    pub member_name: String,
    /// Nickname or global name, used in log messages.
    pub display_name: String,
    /// Channel the member was in before the change.
    pub before: Option<u64>,
    /// Channel the member is in after the change.
    pub after: Option<u64>,
}

impl VoiceStateChange {
    /// Builds a change from the serenity `voice_state_update` arguments.
    ///
    /// # Arguments
    /// - `old` - Cached previous state, if serenity had one
    /// - `new` - State after the update
    ///
    /// # Returns
    /// - `Some(VoiceStateChange)` - The update belongs to a guild member
    /// - `None` - The update has no guild, such as a direct call
    pub fn from_serenity(old: Option<&VoiceState>, new: &VoiceState) -> Option<Self> {
        let guild_id = new.guild_id?.get();

        let (member_name, display_name) = match &new.member {
            Some(member) => (member.user.name.clone(), member.display_name().to_string()),
            None => {
                let id = new.user_id.to_string();
                (id.clone(), id)
            }
        };

        Some(Self {
            guild_id,
            member_id: new.user_id.get(),
            member_name,
            display_name,
            before: old.and_then(|state| state.channel_id).map(|id| id.get()),
            after: new.channel_id.map(|id| id.get()),
        })
    }

    /// Channel the member entered, if the change moved them into a new one.
    pub fn joined_channel(&self) -> Option<u64> {
        self.after.filter(|after| self.before != Some(*after))
    }

    /// Channel the member left, if the change moved them out of one.
    pub fn left_channel(&self) -> Option<u64> {
        self.before.filter(|before| self.after != Some(*before))
    }
}

/// What a join into a base channel resulted in.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// The channel is not a registered base channel.
    Ignored,
    /// The same member is already being handled for this channel.
    Duplicate,
    /// The guild is at its generated channel limit.
    CapacityReached { active: u64, max: i32 },
    /// A clone was created; `moved` tells whether the member ended up in it.
    Created {
        channel_id: u64,
        name: String,
        moved: bool,
    },
}

/// Properties of an existing voice channel that a clone copies.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceChannelSnapshot {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub category_id: Option<u64>,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub overwrites: Vec<PermissionOverwrite>,
}

/// Description of a voice channel to create.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceChannelSpec {
    pub guild_id: u64,
    pub name: String,
    pub category_id: Option<u64>,
    pub bitrate: Option<u32>,
    pub user_limit: Option<u32>,
    pub overwrites: Vec<PermissionOverwrite>,
}

impl VoiceChannelSpec {
    /// A plain channel with only a name and optional category.
    pub fn plain(guild_id: u64, name: impl Into<String>, category_id: Option<u64>) -> Self {
        Self {
            guild_id,
            name: name.into(),
            category_id,
            bitrate: None,
            user_limit: None,
            overwrites: Vec::new(),
        }
    }

    /// A copy of `source` under a new name.
    pub fn clone_of(source: &VoiceChannelSnapshot, name: impl Into<String>) -> Self {
        Self {
            guild_id: source.guild_id,
            name: name.into(),
            category_id: source.category_id,
            bitrate: source.bitrate,
            user_limit: source.user_limit,
            overwrites: source.overwrites.clone(),
        }
    }
}
