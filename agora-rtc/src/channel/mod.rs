// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use agora_protocol::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::{
    error::RtcResult,
    events::{ChannelEvent, ChannelEventKind, EventRegistry, EventScope, Listener, Subscription},
    native::{self, native_args, NativeModule},
};

mod registry;
mod streaming;

pub use registry::ChannelRegistry;

struct ChannelInner {
    channel_id: String,
    native: Arc<dyn NativeModule>,
    events: Arc<EventRegistry<ChannelEvent>>,
    registry: Weak<ChannelRegistry>,
}

/// Handle to one native channel object.
///
/// Obtained from [`RtcEngine::create_channel`](crate::RtcEngine::create_channel).
/// Every call is routed to the channel module with the channel id as first
/// argument, listeners only see events scoped to this channel.
#[derive(Clone)]
pub struct RtcChannel {
    inner: Arc<ChannelInner>,
}

impl RtcChannel {
    pub(crate) async fn create(
        channel_id: &str,
        native: Arc<dyn NativeModule>,
        registry: &Arc<ChannelRegistry>,
    ) -> RtcResult<Self> {
        native::invoke::<Value>(native.as_ref(), "create", native_args![channel_id]).await?;

        let events = EventRegistry::new(
            native.emitter(),
            native.prefix(),
            EventScope::Channel(channel_id.to_owned()),
        );
        let channel = Self {
            inner: Arc::new(ChannelInner {
                channel_id: channel_id.to_owned(),
                native,
                events,
                registry: Arc::downgrade(registry),
            }),
        };
        registry.insert(channel.clone());
        log::info!("created channel {}", channel_id);
        Ok(channel)
    }

    pub fn channel_id(&self) -> &str {
        &self.inner.channel_id
    }

    pub fn ptr_eq(&self, other: &RtcChannel) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn add_listener(
        &self,
        kind: ChannelEventKind,
        listener: &Listener<ChannelEvent>,
    ) -> Subscription<ChannelEvent> {
        self.inner.events.add_listener(kind, listener)
    }

    pub fn listen<F>(&self, kind: ChannelEventKind, callback: F) -> Subscription<ChannelEvent>
    where
        F: Fn(&ChannelEvent) + Send + Sync + 'static,
    {
        self.inner.events.listen(kind, callback)
    }

    pub fn remove_listener(&self, kind: ChannelEventKind, listener: &Listener<ChannelEvent>) {
        self.inner.events.remove_listener(kind, listener)
    }

    pub fn remove_all_listeners(&self, kind: Option<ChannelEventKind>) {
        self.inner.events.remove_all_listeners(kind)
    }

    pub fn events(&self) -> mpsc::UnboundedReceiver<ChannelEvent> {
        self.inner.events.events()
    }

    pub fn event_registry(&self) -> &Arc<EventRegistry<ChannelEvent>> {
        &self.inner.events
    }

    /// Drop every listener, leave the engine's registry, then destroy the
    /// native channel object.
    pub async fn destroy(&self) -> RtcResult<()> {
        log::info!("destroying channel {}", self.channel_id());
        self.inner.events.remove_all_listeners(None);
        if let Some(registry) = self.inner.registry.upgrade() {
            registry.remove_channel(self);
        }
        self.call("destroy", native_args![]).await
    }

    /// Destroy path for handles already removed from the registry.
    pub(crate) async fn teardown(&self) -> RtcResult<()> {
        self.inner.events.remove_all_listeners(None);
        self.call("destroy", native_args![]).await
    }

    async fn call(&self, method: &'static str, args: Vec<Value>) -> RtcResult<()> {
        self.invoke::<Value>(method, args).await.map(|_| ())
    }

    async fn invoke<T>(&self, method: &'static str, mut args: Vec<Value>) -> RtcResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("channel {}: {}", self.inner.channel_id, method);
        args.insert(0, Value::String(self.inner.channel_id.clone()));
        native::invoke(self.inner.native.as_ref(), method, args).await
    }

    pub async fn set_client_role(&self, role: ClientRole) -> RtcResult<()> {
        self.call("setClientRole", native_args![role]).await
    }

    pub async fn join_channel(
        &self,
        token: Option<&str>,
        optional_info: Option<&str>,
        optional_uid: Uid,
        options: &ChannelMediaOptions,
    ) -> RtcResult<()> {
        self.call("joinChannel", native_args![token, optional_info, optional_uid, options]).await
    }

    pub async fn join_channel_with_user_account(
        &self,
        token: Option<&str>,
        user_account: &str,
        options: &ChannelMediaOptions,
    ) -> RtcResult<()> {
        self.call("joinChannelWithUserAccount", native_args![token, user_account, options]).await
    }

    pub async fn leave_channel(&self) -> RtcResult<()> {
        self.call("leaveChannel", native_args![]).await
    }

    pub async fn renew_token(&self, token: &str) -> RtcResult<()> {
        self.call("renewToken", native_args![token]).await
    }

    pub async fn get_connection_state(&self) -> RtcResult<ConnectionStateType> {
        self.invoke("getConnectionState", native_args![]).await
    }

    /// Publish the local streams to this channel. Only one channel of an
    /// engine can publish at a time.
    pub async fn publish(&self) -> RtcResult<()> {
        self.call("publish", native_args![]).await
    }

    pub async fn unpublish(&self) -> RtcResult<()> {
        self.call("unpublish", native_args![]).await
    }

    pub async fn get_call_id(&self) -> RtcResult<String> {
        self.invoke("getCallId", native_args![]).await
    }

    pub async fn adjust_user_playback_signal_volume(&self, uid: Uid, volume: u32) -> RtcResult<()> {
        self.call("adjustUserPlaybackSignalVolume", native_args![uid, volume]).await
    }

    pub async fn mute_remote_audio_stream(&self, uid: Uid, muted: bool) -> RtcResult<()> {
        self.call("muteRemoteAudioStream", native_args![uid, muted]).await
    }

    pub async fn mute_all_remote_audio_streams(&self, muted: bool) -> RtcResult<()> {
        self.call("muteAllRemoteAudioStreams", native_args![muted]).await
    }

    pub async fn set_default_mute_all_remote_audio_streams(&self, muted: bool) -> RtcResult<()> {
        self.call("setDefaultMuteAllRemoteAudioStreams", native_args![muted]).await
    }

    pub async fn mute_remote_video_stream(&self, uid: Uid, muted: bool) -> RtcResult<()> {
        self.call("muteRemoteVideoStream", native_args![uid, muted]).await
    }

    pub async fn mute_all_remote_video_streams(&self, muted: bool) -> RtcResult<()> {
        self.call("muteAllRemoteVideoStreams", native_args![muted]).await
    }

    pub async fn set_default_mute_all_remote_video_streams(&self, muted: bool) -> RtcResult<()> {
        self.call("setDefaultMuteAllRemoteVideoStreams", native_args![muted]).await
    }

    /// `pan` goes from -1.0 (left) to 1.0 (right), `gain` from 0 to 100.
    pub async fn set_remote_voice_position(&self, uid: Uid, pan: f64, gain: f64) -> RtcResult<()> {
        self.call("setRemoteVoicePosition", native_args![uid, pan, gain]).await
    }

    pub async fn set_remote_video_stream_type(
        &self,
        uid: Uid,
        stream_type: VideoStreamType,
    ) -> RtcResult<()> {
        self.call("setRemoteVideoStreamType", native_args![uid, stream_type]).await
    }

    pub async fn set_remote_default_video_stream_type(
        &self,
        stream_type: VideoStreamType,
    ) -> RtcResult<()> {
        self.call("setRemoteDefaultVideoStreamType", native_args![stream_type]).await
    }

    pub async fn set_remote_user_priority(&self, uid: Uid, priority: UserPriority) -> RtcResult<()> {
        self.call("setRemoteUserPriority", native_args![uid, priority]).await
    }
}

impl fmt::Debug for RtcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RtcChannel")
            .field("channel_id", &self.inner.channel_id)
            .field("events", &self.inner.events)
            .finish()
    }
}
