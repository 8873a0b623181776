//! Lifecycle tests driven by a recording in-memory Discord.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    error::voice::VoiceError,
    model::voice_event::{VoiceChannelSnapshot, VoiceChannelSpec, VoiceStateChange},
    service::voice_lifecycle::{platform::VoicePlatform, VoiceLifecycleService},
};


pub const GUILD_ID: u64 = 1;
pub const CATEGORY_ID: u64 = 5;

#[derive(Default)]
struct FakeState {
    channels: HashMap<u64, VoiceChannelSnapshot>,
    member_channels: HashMap<u64, u64>,
    created: Vec<VoiceChannelSpec>,
    deleted: Vec<u64>,
    moves: Vec<(u64, u64)>,
    direct_messages: Vec<(u64, String)>,
    channel_messages: Vec<(u64, String)>,
    refuse_create: bool,
    refuse_move: bool,
}

/// In-memory Discord that records every call made through `VoicePlatform`.
pub struct FakePlatform {
    state: Mutex<FakeState>,
    next_id: AtomicU64,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
            next_id: AtomicU64::new(10_000),
        }
    }

    /// ID the next created channel will get.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    pub fn add_voice_channel(&self, id: u64, name: &str) -> VoiceChannelSnapshot {
        let snapshot = VoiceChannelSnapshot {
            id,
            guild_id: GUILD_ID,
            name: name.to_string(),
            category_id: Some(CATEGORY_ID),
            bitrate: Some(96_000),
            user_limit: Some(4),
            overwrites: Vec::new(),
        };
        self.state
            .lock()
            .unwrap()
            .channels
            .insert(id, snapshot.clone());
        snapshot
    }

    /// Puts a member into a voice channel, or disconnects them with `None`.
    pub fn place(&self, member_id: u64, channel_id: Option<u64>) {
        let mut state = self.state.lock().unwrap();
        match channel_id {
            Some(channel_id) => state.member_channels.insert(member_id, channel_id),
            None => state.member_channels.remove(&member_id),
        };
    }

    pub fn remove_channel(&self, channel_id: u64) {
        self.state.lock().unwrap().channels.remove(&channel_id);
    }

    pub fn refuse_create(&self) {
        self.state.lock().unwrap().refuse_create = true;
    }

    pub fn refuse_move(&self) {
        self.state.lock().unwrap().refuse_move = true;
    }

    pub fn created(&self) -> Vec<VoiceChannelSpec> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn moves(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().moves.clone()
    }

    pub fn direct_messages(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().direct_messages.clone()
    }

    pub fn channel_messages(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().channel_messages.clone()
    }

    pub fn exists(&self, channel_id: u64) -> bool {
        self.state.lock().unwrap().channels.contains_key(&channel_id)
    }
}

#[async_trait]
impl VoicePlatform for FakePlatform {
    async fn create_voice_channel(
        &self,
        spec: VoiceChannelSpec,
    ) -> Result<VoiceChannelSnapshot, VoiceError> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_create {
            return Err(VoiceError::PermissionDenied("Missing Permissions".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let snapshot = VoiceChannelSnapshot {
            id,
            guild_id: spec.guild_id,
            name: spec.name.clone(),
            category_id: spec.category_id,
            bitrate: spec.bitrate,
            user_limit: spec.user_limit,
            overwrites: spec.overwrites.clone(),
        };
        state.channels.insert(id, snapshot.clone());
        state.created.push(spec);

        Ok(snapshot)
    }

    async fn delete_channel(&self, channel_id: u64, _reason: &str) -> Result<(), VoiceError> {
        let mut state = self.state.lock().unwrap();
        if state.channels.remove(&channel_id).is_none() {
            return Err(VoiceError::NotFound("Unknown Channel".to_string()));
        }
        state.deleted.push(channel_id);

        Ok(())
    }

    async fn move_member(
        &self,
        _guild_id: u64,
        member_id: u64,
        channel_id: u64,
    ) -> Result<(), VoiceError> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_move {
            return Err(VoiceError::PermissionDenied("Missing Permissions".to_string()));
        }
        state.member_channels.insert(member_id, channel_id);
        state.moves.push((member_id, channel_id));

        Ok(())
    }

    async fn send_direct_message(&self, member_id: u64, text: &str) -> Result<(), VoiceError> {
        self.state
            .lock()
            .unwrap()
            .direct_messages
            .push((member_id, text.to_string()));

        Ok(())
    }

    async fn send_channel_message(&self, channel_id: u64, text: &str) -> Result<(), VoiceError> {
        self.state
            .lock()
            .unwrap()
            .channel_messages
            .push((channel_id, text.to_string()));

        Ok(())
    }

    async fn voice_channel(
        &self,
        _guild_id: u64,
        channel_id: u64,
    ) -> Result<Option<VoiceChannelSnapshot>, VoiceError> {
        Ok(self.state.lock().unwrap().channels.get(&channel_id).cloned())
    }

    fn voice_occupants(&self, _guild_id: u64, channel_id: u64) -> usize {
        self.state
            .lock()
            .unwrap()
            .member_channels
            .values()
            .filter(|current| **current == channel_id)
            .count()
    }

    fn member_voice_channel(&self, _guild_id: u64, member_id: u64) -> Option<u64> {
        self.state
            .lock()
            .unwrap()
            .member_channels
            .get(&member_id)
            .copied()
    }
}

/// Database, fake Discord and a service wired to both.
pub struct Harness {
    pub test: TestContext,
    pub fake: Arc<FakePlatform>,
    pub service: VoiceLifecycleService,
}

impl Harness {
    pub async fn new() -> Self {
        let test = TestBuilder::new().with_voice_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let fake = Arc::new(FakePlatform::new());
        let service = VoiceLifecycleService::new(db, fake.clone())
            .with_join_release(Duration::from_millis(50));

        Self {
            test,
            fake,
            service,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }
}

pub fn change(
    member_id: u64,
    member_name: &str,
    before: Option<u64>,
    after: Option<u64>,
) -> VoiceStateChange {
    VoiceStateChange {
        guild_id: GUILD_ID,
        member_id,
        member_name: member_name.to_string(),
        display_name: member_name.to_string(),
        before,
        after,
    }
}
