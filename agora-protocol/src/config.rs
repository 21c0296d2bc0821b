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

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Record handed to the native `create` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtcEngineConfig {
    pub app_id: String,
    pub area_code: AreaCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_config: Option<LogConfig>,
}

impl RtcEngineConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self { app_id: app_id.into(), area_code: AreaCode::default(), log_config: None }
    }

    pub fn with_area_code(mut self, area_code: AreaCode) -> Self {
        self.area_code = area_code;
        self
    }

    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = Some(log_config);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Size of a single log file in KB.
    #[serde(rename = "fileSize", skip_serializing_if = "Option::is_none")]
    pub file_size_in_kb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDimensions {
    pub width: i32,
    pub height: i32,
}

impl Default for VideoDimensions {
    fn default() -> Self {
        Self { width: 640, height: 360 }
    }
}

/// Bitrate used by the SDK when `bitrate` is left at zero.
pub const BITRATE_STANDARD: i32 = 0;
/// Bitrate used by the SDK for a compatible (lower) encoding.
pub const BITRATE_COMPATIBLE: i32 = -1;
/// Use the SDK default for min bitrate/frame rate.
pub const DEFAULT_MIN_BITRATE: i32 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEncoderConfiguration {
    pub dimensions: VideoDimensions,
    pub frame_rate: i32,
    pub min_frame_rate: i32,
    pub bitrate: i32,
    pub min_bitrate: i32,
    pub orientation_mode: OrientationMode,
    pub degradation_prefer: DegradationPreference,
    pub mirror_mode: VideoMirrorMode,
}

impl Default for VideoEncoderConfiguration {
    fn default() -> Self {
        Self {
            dimensions: VideoDimensions::default(),
            frame_rate: 15,
            min_frame_rate: -1,
            bitrate: BITRATE_STANDARD,
            min_bitrate: DEFAULT_MIN_BITRATE,
            orientation_mode: OrientationMode::Adaptive,
            degradation_prefer: DegradationPreference::MaintainQuality,
            mirror_mode: VideoMirrorMode::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeautyOptions {
    pub lightening_contrast_level: LighteningContrastLevel,
    pub lightening_level: f32,
    pub smoothness_level: f32,
    pub redness_level: f32,
}

impl Default for BeautyOptions {
    fn default() -> Self {
        Self {
            lightening_contrast_level: LighteningContrastLevel::Normal,
            lightening_level: 0.7,
            smoothness_level: 0.5,
            redness_level: 0.1,
        }
    }
}

/// Image placed on a CDN live stream (watermark or background).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgoraImage {
    pub url: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscodingUser {
    pub uid: Uid,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_order: i32,
    pub alpha: f32,
    pub audio_channel: i32,
}

impl TranscodingUser {
    pub fn new(uid: Uid) -> Self {
        Self { uid, x: 0, y: 0, width: 360, height: 640, z_order: 0, alpha: 1.0, audio_channel: 0 }
    }
}

/// Layout and encoding of a transcoded CDN live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTranscoding {
    pub width: i32,
    pub height: i32,
    pub video_bitrate: i32,
    pub video_framerate: i32,
    pub low_latency: bool,
    pub video_gop: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watermark: Option<AgoraImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<AgoraImage>,
    pub audio_sample_rate: AudioSampleRateType,
    pub audio_bitrate: i32,
    pub audio_channels: i32,
    pub audio_codec_profile: AudioCodecProfileType,
    pub video_codec_profile: VideoCodecProfileType,
    pub background_color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_config_extra_info: Option<String>,
    pub transcoding_users: Vec<TranscodingUser>,
}

impl Default for LiveTranscoding {
    fn default() -> Self {
        Self {
            width: 360,
            height: 640,
            video_bitrate: 400,
            video_framerate: 15,
            low_latency: false,
            video_gop: 30,
            watermark: None,
            background_image: None,
            audio_sample_rate: AudioSampleRateType::Type44100,
            audio_bitrate: 48,
            audio_channels: 1,
            audio_codec_profile: AudioCodecProfileType::LcAac,
            video_codec_profile: VideoCodecProfileType::High,
            background_color: 0x000000,
            user_config_extra_info: None,
            transcoding_users: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMediaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub uid: Uid,
}

/// Source and destination channels of a cross-channel media relay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMediaRelayConfiguration {
    pub src_info: ChannelMediaInfo,
    pub dest_infos: Vec<ChannelMediaInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveInjectStreamConfig {
    pub width: i32,
    pub height: i32,
    pub video_gop: i32,
    pub video_framerate: i32,
    pub video_bitrate: i32,
    pub audio_sample_rate: AudioSampleRateType,
    pub audio_bitrate: i32,
    pub audio_channels: i32,
}

impl Default for LiveInjectStreamConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            video_gop: 30,
            video_framerate: 15,
            video_bitrate: 400,
            audio_sample_rate: AudioSampleRateType::Type44100,
            audio_bitrate: 48,
            audio_channels: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCapturerConfiguration {
    pub preference: CameraCaptureOutputPreference,
    pub camera_direction: CameraDirection,
}

impl Default for CameraCapturerConfiguration {
    fn default() -> Self {
        Self {
            preference: CameraCaptureOutputPreference::Auto,
            camera_direction: CameraDirection::Front,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMediaOptions {
    pub auto_subscribe_audio: bool,
    pub auto_subscribe_video: bool,
}

impl Default for ChannelMediaOptions {
    fn default() -> Self {
        Self { auto_subscribe_audio: true, auto_subscribe_video: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionConfig {
    pub encryption_mode: EncryptionMode,
    pub encryption_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastmileProbeConfig {
    pub probe_uplink: bool,
    pub probe_downlink: bool,
    /// In bps, between 100000 and 5000000.
    pub expected_uplink_bitrate: u32,
    pub expected_downlink_bitrate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub uid: Uid,
    pub user_account: String,
}

/// Media metadata sent alongside the video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub uid: Uid,
    pub buffer: String,
    pub time_stamp: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn engine_config_skips_missing_log_config() {
        let config = RtcEngineConfig::new("abc").with_area_code(AreaCode::EU);
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({"appId": "abc", "areaCode": 4}));

        let config = config.with_log_config(LogConfig {
            file_size_in_kb: Some(2048),
            level: Some(LogLevel::Warn),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&config).unwrap()["logConfig"],
            json!({"fileSize": 2048, "level": 2})
        );
    }

    #[test]
    fn encoder_configuration_wire_shape() {
        let value = serde_json::to_value(VideoEncoderConfiguration::default()).unwrap();
        assert_eq!(value["dimensions"], json!({"width": 640, "height": 360}));
        assert_eq!(value["frameRate"], 15);
        assert_eq!(value["degradationPrefer"], 0);
        assert_eq!(value["mirrorMode"], 0);
    }

    #[test]
    fn relay_configuration_wire_shape() {
        let config = ChannelMediaRelayConfiguration {
            src_info: ChannelMediaInfo { channel_name: None, token: None, uid: 0 },
            dest_infos: vec![ChannelMediaInfo {
                channel_name: Some("room2".into()),
                token: None,
                uid: 7,
            }],
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"srcInfo": {"uid": 0}, "destInfos": [{"channelName": "room2", "uid": 7}]})
        );
    }
}
