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
use tokio::sync::{mpsc, Mutex as AsyncMutex};

use crate::{
    channel::{ChannelRegistry, RtcChannel},
    error::RtcResult,
    events::{EngineEvent, EngineEventKind, EventRegistry, EventScope, Listener, Subscription},
    host::HostInner,
    native::{self, native_args, NativeModule},
};

mod media;
mod streaming;

struct EngineInner {
    host: Weak<HostInner>,
    native: Arc<dyn NativeModule>,
    channel_native: Arc<dyn NativeModule>,
    events: Arc<EventRegistry<EngineEvent>>,
    channels: Arc<ChannelRegistry>,
    channel_create_lock: AsyncMutex<()>,
}

/// Handle to the native media engine.
///
/// Cloning is cheap, every clone refers to the same engine. Calls are
/// forwarded to the engine module as-is: the returned future resolves when the
/// SDK accepted the request, the outcome itself is reported through events.
#[derive(Clone)]
pub struct RtcEngine {
    inner: Arc<EngineInner>,
}

impl RtcEngine {
    pub(crate) fn new(
        host: Weak<HostInner>,
        native: Arc<dyn NativeModule>,
        channel_native: Arc<dyn NativeModule>,
    ) -> Self {
        let events = EventRegistry::new(native.emitter(), native.prefix(), EventScope::Engine);
        Self {
            inner: Arc::new(EngineInner {
                host,
                native,
                channel_native,
                events,
                channels: Default::default(),
                channel_create_lock: Default::default(),
            }),
        }
    }

    pub fn ptr_eq(&self, other: &RtcEngine) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn add_listener(
        &self,
        kind: EngineEventKind,
        listener: &Listener<EngineEvent>,
    ) -> Subscription<EngineEvent> {
        self.inner.events.add_listener(kind, listener)
    }

    pub fn listen<F>(&self, kind: EngineEventKind, callback: F) -> Subscription<EngineEvent>
    where
        F: Fn(&EngineEvent) + Send + Sync + 'static,
    {
        self.inner.events.listen(kind, callback)
    }

    pub fn remove_listener(&self, kind: EngineEventKind, listener: &Listener<EngineEvent>) {
        self.inner.events.remove_listener(kind, listener)
    }

    pub fn remove_all_listeners(&self, kind: Option<EngineEventKind>) {
        self.inner.events.remove_all_listeners(kind)
    }

    pub fn events(&self) -> mpsc::UnboundedReceiver<EngineEvent> {
        self.inner.events.events()
    }

    pub fn event_registry(&self) -> &Arc<EventRegistry<EngineEvent>> {
        &self.inner.events
    }

    /// Create the channel object for `channel_id`, or return the existing one.
    pub async fn create_channel(&self, channel_id: &str) -> RtcResult<RtcChannel> {
        let _guard = self.inner.channel_create_lock.lock().await;
        if let Some(channel) = self.inner.channels.get(channel_id) {
            return Ok(channel);
        }

        RtcChannel::create(channel_id, self.inner.channel_native.clone(), &self.inner.channels).await
    }

    pub fn channel(&self, channel_id: &str) -> Option<RtcChannel> {
        self.inner.channels.get(channel_id)
    }

    pub fn channels(&self) -> &ChannelRegistry {
        &self.inner.channels
    }

    pub async fn destroy_all_channels(&self) -> RtcResult<()> {
        self.inner.channels.destroy_all().await
    }

    /// Destroy every channel, drop every listener, then destroy the native
    /// engine.
    ///
    /// Channel teardown failures don't stop the engine teardown, the first of
    /// them is returned once the engine is gone.
    pub async fn destroy(&self) -> RtcResult<()> {
        log::info!("destroying engine");
        let channels = self.inner.channels.destroy_all().await;
        self.inner.events.remove_all_listeners(None);

        self.call("destroy", native_args![]).await?;
        if let Some(host) = self.inner.host.upgrade() {
            host.release(self);
        }
        channels
    }

    async fn call(&self, method: &'static str, args: Vec<Value>) -> RtcResult<()> {
        self.invoke::<Value>(method, args).await.map(|_| ())
    }

    async fn invoke<T>(&self, method: &'static str, args: Vec<Value>) -> RtcResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("engine: {}", method);
        native::invoke(self.inner.native.as_ref(), method, args).await
    }

    pub async fn set_channel_profile(&self, profile: ChannelProfile) -> RtcResult<()> {
        self.call("setChannelProfile", native_args![profile]).await
    }

    pub async fn set_client_role(&self, role: ClientRole) -> RtcResult<()> {
        self.call("setClientRole", native_args![role]).await
    }

    /// Join `channel_name`. With `optional_uid` set to 0 the SDK assigns a
    /// uid, reported by [`EngineEvent::JoinChannelSuccess`].
    pub async fn join_channel(
        &self,
        token: Option<&str>,
        channel_name: &str,
        optional_info: Option<&str>,
        optional_uid: Uid,
    ) -> RtcResult<()> {
        self.call("joinChannel", native_args![token, channel_name, optional_info, optional_uid])
            .await
    }

    pub async fn switch_channel(&self, token: Option<&str>, channel_name: &str) -> RtcResult<()> {
        self.call("switchChannel", native_args![token, channel_name]).await
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

    pub async fn register_local_user_account(&self, app_id: &str, user_account: &str) -> RtcResult<()> {
        self.call("registerLocalUserAccount", native_args![app_id, user_account]).await
    }

    pub async fn join_channel_with_user_account(
        &self,
        token: Option<&str>,
        channel_name: &str,
        user_account: &str,
    ) -> RtcResult<()> {
        self.call("joinChannelWithUserAccount", native_args![token, channel_name, user_account])
            .await
    }

    pub async fn get_user_info_by_user_account(&self, user_account: &str) -> RtcResult<UserInfo> {
        self.invoke("getUserInfoByUserAccount", native_args![user_account]).await
    }

    pub async fn get_user_info_by_uid(&self, uid: Uid) -> RtcResult<UserInfo> {
        self.invoke("getUserInfoByUid", native_args![uid]).await
    }

    pub async fn get_call_id(&self) -> RtcResult<String> {
        self.invoke("getCallId", native_args![]).await
    }

    /// Rate a call from 1 (worst) to 5 (best).
    pub async fn rate(&self, call_id: &str, rating: i32, description: Option<&str>) -> RtcResult<()> {
        self.call("rate", native_args![call_id, rating, description]).await
    }

    pub async fn complain(&self, call_id: &str, description: &str) -> RtcResult<()> {
        self.call("complain", native_args![call_id, description]).await
    }

    pub async fn set_log_file(&self, file_path: &str) -> RtcResult<()> {
        self.call("setLogFile", native_args![file_path]).await
    }

    pub async fn set_log_filter(&self, filter: LogFilter) -> RtcResult<()> {
        self.call("setLogFilter", native_args![filter]).await
    }

    pub async fn set_log_file_size(&self, file_size_in_kb: u32) -> RtcResult<()> {
        self.call("setLogFileSize", native_args![file_size_in_kb]).await
    }

    /// Pass private JSON parameters to the SDK.
    pub async fn set_parameters(&self, parameters: &str) -> RtcResult<()> {
        self.call("setParameters", native_args![parameters]).await
    }

    pub async fn get_sdk_version(&self) -> RtcResult<String> {
        self.invoke("getSdkVersion", native_args![]).await
    }

    pub async fn get_error_description(&self, code: ErrorCode) -> RtcResult<String> {
        self.invoke("getErrorDescription", native_args![code]).await
    }

    pub async fn start_echo_test(&self, interval_in_seconds: i32) -> RtcResult<()> {
        self.call("startEchoTest", native_args![interval_in_seconds]).await
    }

    pub async fn stop_echo_test(&self) -> RtcResult<()> {
        self.call("stopEchoTest", native_args![]).await
    }

    pub async fn enable_lastmile_test(&self) -> RtcResult<()> {
        self.call("enableLastmileTest", native_args![]).await
    }

    pub async fn disable_lastmile_test(&self) -> RtcResult<()> {
        self.call("disableLastmileTest", native_args![]).await
    }

    pub async fn start_lastmile_probe_test(&self, config: &LastmileProbeConfig) -> RtcResult<()> {
        self.call("startLastmileProbeTest", native_args![config]).await
    }

    pub async fn stop_lastmile_probe_test(&self) -> RtcResult<()> {
        self.call("stopLastmileProbeTest", native_args![]).await
    }
}

impl fmt::Debug for RtcEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RtcEngine")
            .field("events", &self.inner.events)
            .field("channels", &self.inner.channels.len())
            .finish()
    }
}
