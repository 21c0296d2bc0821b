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

use agora_protocol::*;

use super::RtcEngine;
use crate::{error::RtcResult, native::native_args};

/// CDN publishing, media relay and stream injection
impl RtcEngine {
    pub async fn set_live_transcoding(&self, transcoding: &LiveTranscoding) -> RtcResult<()> {
        self.call("setLiveTranscoding", native_args![transcoding]).await
    }

    /// Publish to an RTMP url. With `transcoding_enabled` the stream is
    /// composed according to the last [`set_live_transcoding`](Self::set_live_transcoding).
    pub async fn add_publish_stream_url(&self, url: &str, transcoding_enabled: bool) -> RtcResult<()> {
        self.call("addPublishStreamUrl", native_args![url, transcoding_enabled]).await
    }

    pub async fn remove_publish_stream_url(&self, url: &str) -> RtcResult<()> {
        self.call("removePublishStreamUrl", native_args![url]).await
    }

    pub async fn start_channel_media_relay(
        &self,
        config: &ChannelMediaRelayConfiguration,
    ) -> RtcResult<()> {
        self.call("startChannelMediaRelay", native_args![config]).await
    }

    pub async fn update_channel_media_relay(
        &self,
        config: &ChannelMediaRelayConfiguration,
    ) -> RtcResult<()> {
        self.call("updateChannelMediaRelay", native_args![config]).await
    }

    pub async fn stop_channel_media_relay(&self) -> RtcResult<()> {
        self.call("stopChannelMediaRelay", native_args![]).await
    }

    pub async fn add_inject_stream_url(
        &self,
        url: &str,
        config: &LiveInjectStreamConfig,
    ) -> RtcResult<()> {
        self.call("addInjectStreamUrl", native_args![url, config]).await
    }

    pub async fn remove_inject_stream_url(&self, url: &str) -> RtcResult<()> {
        self.call("removeInjectStreamUrl", native_args![url]).await
    }
}

/// Data streams and encryption
impl RtcEngine {
    /// Returns the stream id to use with [`send_stream_message`](Self::send_stream_message).
    pub async fn create_data_stream(&self, reliable: bool, ordered: bool) -> RtcResult<i32> {
        self.invoke("createDataStream", native_args![reliable, ordered]).await
    }

    pub async fn send_stream_message(&self, stream_id: i32, message: &str) -> RtcResult<()> {
        self.call("sendStreamMessage", native_args![stream_id, message]).await
    }

    pub async fn set_encryption_secret(&self, secret: &str) -> RtcResult<()> {
        self.call("setEncryptionSecret", native_args![secret]).await
    }

    /// Legacy mode selection by name, e.g. `"aes-128-xts"`.
    pub async fn set_encryption_mode(&self, encryption_mode: &str) -> RtcResult<()> {
        self.call("setEncryptionMode", native_args![encryption_mode]).await
    }

    pub async fn enable_encryption(&self, enabled: bool, config: &EncryptionConfig) -> RtcResult<()> {
        self.call("enableEncryption", native_args![enabled, config]).await
    }
}
