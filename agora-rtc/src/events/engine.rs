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

use super::rtc_events;

rtc_events! {
    /// Events emitted by the engine module and not tied to a channel object.
    pub enum EngineEvent / EngineEventKind {
        Warning { warn: WarningCode },
        Error { err: ErrorCode },
        ApiCallExecuted { error: ErrorCode, api: String, result: String },
        JoinChannelSuccess { channel: String, uid: Uid, elapsed: i32 },
        RejoinChannelSuccess { channel: String, uid: Uid, elapsed: i32 },
        LeaveChannel { stats: RtcStats },
        LocalUserRegistered { uid: Uid, user_account: String },
        UserInfoUpdated { uid: Uid, user_info: UserInfo },
        ClientRoleChanged { old_role: ClientRole, new_role: ClientRole },
        UserJoined { uid: Uid, elapsed: i32 },
        UserOffline { uid: Uid, reason: UserOfflineReason },
        ConnectionStateChanged { state: ConnectionStateType, reason: ConnectionChangedReason },
        NetworkTypeChanged { network_type: NetworkType },
        ConnectionLost {},
        TokenPrivilegeWillExpire { token: String },
        RequestToken {},
        /// `speakers` is empty when nobody is speaking.
        AudioVolumeIndication { speakers: Vec<AudioVolumeInfo>, total_volume: i32 },
        ActiveSpeaker { uid: Uid },
        FirstLocalAudioFrame { elapsed: i32 },
        FirstLocalVideoFrame { width: i32, height: i32, elapsed: i32 },
        FirstRemoteVideoFrame { uid: Uid, width: i32, height: i32, elapsed: i32 },
        VideoSizeChanged { uid: Uid, width: i32, height: i32, rotation: i32 },
        RemoteVideoStateChanged {
            uid: Uid,
            state: RemoteVideoState,
            reason: RemoteVideoStateReason,
            elapsed: i32,
        },
        LocalVideoStateChanged { local_video_state: LocalVideoStreamState, error: LocalVideoStreamError },
        RemoteAudioStateChanged {
            uid: Uid,
            state: RemoteAudioState,
            reason: RemoteAudioStateReason,
            elapsed: i32,
        },
        LocalAudioStateChanged { state: LocalAudioStreamState, error: LocalAudioStreamError },
        AudioRouteChanged { routing: AudioOutputRouting },
        CameraFocusAreaChanged { rect: Rectangle },
        RtcStats { stats: RtcStats },
        LastmileQuality { quality: NetworkQuality },
        LastmileProbeResult { result: LastmileProbeResult },
        NetworkQuality { uid: Uid, tx_quality: NetworkQuality, rx_quality: NetworkQuality },
        LocalAudioStats { stats: LocalAudioStats },
        LocalVideoStats { stats: LocalVideoStats },
        RemoteAudioStats { stats: RemoteAudioStats },
        RemoteVideoStats { stats: RemoteVideoStats },
        AudioMixingStateChanged { state: AudioMixingStateCode, error_code: AudioMixingErrorCode },
        AudioEffectFinished { sound_id: i32 },
        RtmpStreamingStateChanged { url: String, state: RtmpStreamingState, err_code: RtmpStreamingErrorCode },
        TranscodingUpdated {},
        StreamInjectedStatus { url: String, uid: Uid, status: InjectStreamStatus },
        StreamMessage { uid: Uid, stream_id: i32, data: String },
        StreamMessageError { uid: Uid, stream_id: i32, error: ErrorCode, missed: i32, cached: i32 },
        ChannelMediaRelayStateChanged { state: ChannelMediaRelayState, code: ChannelMediaRelayError },
        ChannelMediaRelayEvent { code: ChannelMediaRelayEvent },
        CameraReady {},
        VideoStopped {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventKind, RtcEvent};
    use serde_json::json;

    #[test]
    fn decode_positional_arguments() {
        let event = EngineEvent::decode(
            EngineEventKind::JoinChannelSuccess,
            &[json!("room1"), json!(42), json!(120)],
        )
        .unwrap();
        assert_eq!(
            event,
            EngineEvent::JoinChannelSuccess { channel: "room1".into(), uid: 42, elapsed: 120 }
        );
        assert_eq!(event.kind(), EngineEventKind::JoinChannelSuccess);
    }

    #[test]
    fn decode_records_and_codes() {
        let event = EngineEvent::decode(
            EngineEventKind::AudioVolumeIndication,
            &[json!([{"uid": 0, "volume": 120, "vad": 1}]), json!(120)],
        )
        .unwrap();
        let EngineEvent::AudioVolumeIndication { speakers, total_volume } = event else {
            panic!("unexpected event");
        };
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].volume, 120);
        assert_eq!(total_volume, 120);

        let event = EngineEvent::decode(EngineEventKind::Warning, &[json!(1052)]).unwrap();
        assert_eq!(event, EngineEvent::Warning { warn: WarningCode::ADM_GLITCH_STATE });
    }

    #[test]
    fn decode_rejects_malformed_arguments() {
        assert!(EngineEvent::decode(EngineEventKind::UserJoined, &[json!("not a uid")]).is_err());
        assert!(EngineEvent::decode(EngineEventKind::UserOffline, &[json!(1)]).is_err());
    }

    #[test]
    fn decode_keeps_unrecognized_codes() {
        let event = EngineEvent::decode(
            EngineEventKind::ConnectionStateChanged,
            &[json!(99), json!(1)],
        )
        .unwrap();
        assert_eq!(
            event,
            EngineEvent::ConnectionStateChanged {
                state: ConnectionStateType::Unrecognized(99),
                reason: ConnectionChangedReason::JoinSuccess,
            }
        );
    }

    #[test]
    fn fieldless_events_ignore_extra_arguments() {
        let event = EngineEvent::decode(EngineEventKind::ConnectionLost, &[json!(1)]).unwrap();
        assert_eq!(event, EngineEvent::ConnectionLost {});
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in EngineEventKind::ALL {
            assert_eq!(kind.name().parse::<EngineEventKind>().unwrap(), *kind);
        }
        assert_eq!(EngineEventKind::UserJoined.to_string(), "UserJoined");
        assert!("userJoined".parse::<EngineEventKind>().is_err());
    }
}
