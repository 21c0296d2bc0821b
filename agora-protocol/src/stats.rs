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

//! Statistics records reported by the native SDK through events.
//!
//! The SDK adds fields between releases and omits some on certain platforms,
//! every record therefore decodes missing fields to their default.

use serde::{Deserialize, Serialize};

use crate::types::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RtcStats {
    pub duration: u32,
    pub tx_bytes: u32,
    pub rx_bytes: u32,
    pub tx_audio_bytes: u32,
    pub tx_video_bytes: u32,
    pub rx_audio_bytes: u32,
    pub rx_video_bytes: u32,
    pub tx_k_bit_rate: u32,
    pub rx_k_bit_rate: u32,
    pub tx_audio_k_bit_rate: u32,
    pub rx_audio_k_bit_rate: u32,
    pub tx_video_k_bit_rate: u32,
    pub rx_video_k_bit_rate: u32,
    pub users: u32,
    pub lastmile_delay: u32,
    pub tx_packet_loss_rate: u32,
    pub rx_packet_loss_rate: u32,
    pub cpu_total_usage: f64,
    pub cpu_app_usage: f64,
    pub gateway_rtt: u32,
    pub memory_app_usage_ratio: f64,
    pub memory_total_usage_ratio: f64,
    pub memory_app_usage_in_kbytes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalAudioStats {
    pub num_channels: u32,
    pub sent_sample_rate: u32,
    pub sent_bitrate: u32,
    pub tx_packet_loss_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalVideoStats {
    pub sent_bitrate: u32,
    pub sent_frame_rate: u32,
    pub encoder_output_frame_rate: u32,
    pub renderer_output_frame_rate: u32,
    pub target_bitrate: u32,
    pub target_frame_rate: u32,
    pub quality_adapt_indication: i32,
    pub encoded_bitrate: u32,
    pub encoded_frame_width: u32,
    pub encoded_frame_height: u32,
    pub encoded_frame_count: u32,
    pub codec_type: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteAudioStats {
    pub uid: Uid,
    pub quality: NetworkQuality,
    pub network_transport_delay: u32,
    pub jitter_buffer_delay: u32,
    pub audio_loss_rate: u32,
    pub num_channels: u32,
    pub received_sample_rate: u32,
    pub received_bitrate: u32,
    pub total_frozen_time: u32,
    pub frozen_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteVideoStats {
    pub uid: Uid,
    pub delay: u32,
    pub width: u32,
    pub height: u32,
    pub received_bitrate: u32,
    pub decoder_output_frame_rate: u32,
    pub renderer_output_frame_rate: u32,
    pub packet_loss_rate: u32,
    pub rx_stream_type: VideoStreamType,
    pub total_frozen_time: u32,
    pub frozen_rate: u32,
}

/// Volume of one speaker. `uid` 0 is the local user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioVolumeInfo {
    pub uid: Uid,
    pub volume: u32,
    pub vad: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastmileProbeOneWayResult {
    pub packet_loss_rate: u32,
    pub jitter: u32,
    pub available_bandwidth: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastmileProbeResult {
    pub state: LastmileProbeResultState,
    pub uplink_report: LastmileProbeOneWayResult,
    pub downlink_report: LastmileProbeOneWayResult,
    pub rtt: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_stats_decode_with_defaults() {
        let stats: RemoteVideoStats =
            serde_json::from_value(json!({"uid": 42, "width": 1280, "rxStreamType": 1})).unwrap();
        assert_eq!(stats.uid, 42);
        assert_eq!(stats.width, 1280);
        assert_eq!(stats.rx_stream_type, VideoStreamType::Low);
        assert_eq!(stats.delay, 0);
    }

    #[test]
    fn rtc_stats_field_names() {
        let stats: RtcStats =
            serde_json::from_value(json!({"txKBitRate": 512, "users": 3, "cpuAppUsage": 0.25}))
                .unwrap();
        assert_eq!(stats.tx_k_bit_rate, 512);
        assert_eq!(stats.users, 3);
        assert_eq!(stats.cpu_app_usage, 0.25);
    }
}
