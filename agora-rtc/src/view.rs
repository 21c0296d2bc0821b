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

//! Rendering records.
//!
//! The binding never draws anything itself. A view describes which stream a
//! platform surface shows and how, and [`RtcEngine::setup_local_video`] /
//! [`RtcEngine::setup_remote_video`] hand that description to the SDK.
//!
//! [`RtcEngine::setup_local_video`]: crate::RtcEngine::setup_local_video
//! [`RtcEngine::setup_remote_video`]: crate::RtcEngine::setup_remote_video

use agora_protocol::{Uid, VideoMirrorMode, VideoRenderMode};
use serde::{Deserialize, Serialize};

/// The canvas shape the native side expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCanvas {
    pub uid: Uid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    pub render_mode: VideoRenderMode,
    pub mirror_mode: VideoMirrorMode,
}

impl Default for VideoCanvas {
    fn default() -> Self {
        Self {
            uid: 0,
            channel_id: None,
            render_mode: VideoRenderMode::Hidden,
            mirror_mode: VideoMirrorMode::Auto,
        }
    }
}

/// View backed by a platform surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceView {
    #[serde(flatten)]
    pub canvas: VideoCanvas,
    pub z_order_on_top: bool,
    pub z_order_media_overlay: bool,
}

impl SurfaceView {
    /// The local preview, or a remote user when `uid` is non-zero.
    pub fn new(uid: Uid) -> Self {
        Self { canvas: VideoCanvas { uid, ..Default::default() }, ..Default::default() }
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.canvas.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_render_mode(mut self, render_mode: VideoRenderMode) -> Self {
        self.canvas.render_mode = render_mode;
        self
    }

    pub fn with_mirror_mode(mut self, mirror_mode: VideoMirrorMode) -> Self {
        self.canvas.mirror_mode = mirror_mode;
        self
    }

    pub fn with_z_order_on_top(mut self, on_top: bool) -> Self {
        self.z_order_on_top = on_top;
        self
    }

    pub fn with_z_order_media_overlay(mut self, media_overlay: bool) -> Self {
        self.z_order_media_overlay = media_overlay;
        self
    }

    pub fn canvas(&self) -> &VideoCanvas {
        &self.canvas
    }
}

/// View backed by a texture. Has no z-order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureView {
    #[serde(flatten)]
    pub canvas: VideoCanvas,
}

impl TextureView {
    pub fn new(uid: Uid) -> Self {
        Self { canvas: VideoCanvas { uid, ..Default::default() } }
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.canvas.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_render_mode(mut self, render_mode: VideoRenderMode) -> Self {
        self.canvas.render_mode = render_mode;
        self
    }

    pub fn with_mirror_mode(mut self, mirror_mode: VideoMirrorMode) -> Self {
        self.canvas.mirror_mode = mirror_mode;
        self
    }

    pub fn canvas(&self) -> &VideoCanvas {
        &self.canvas
    }
}
