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
    /// Events emitted by the channel module for one channel object.
    pub enum ChannelEvent / ChannelEventKind {
        Warning { warn: WarningCode },
        Error { err: ErrorCode },
        JoinChannelSuccess { channel: String, uid: Uid, elapsed: i32 },
        RejoinChannelSuccess { channel: String, uid: Uid, elapsed: i32 },
        LeaveChannel { stats: RtcStats },
        ClientRoleChanged { old_role: ClientRole, new_role: ClientRole },
        UserJoined { uid: Uid, elapsed: i32 },
        UserOffline { uid: Uid, reason: UserOfflineReason },
        ConnectionStateChanged { state: ConnectionStateType, reason: ConnectionChangedReason },
        ConnectionLost {},
        TokenPrivilegeWillExpire { token: String },
        RequestToken {},
        ActiveSpeaker { uid: Uid },
        VideoSizeChanged { uid: Uid, width: i32, height: i32, rotation: i32 },
        RemoteVideoStateChanged {
            uid: Uid,
            state: RemoteVideoState,
            reason: RemoteVideoStateReason,
            elapsed: i32,
        },
        RemoteAudioStateChanged {
            uid: Uid,
            state: RemoteAudioState,
            reason: RemoteAudioStateReason,
            elapsed: i32,
        },
        RtcStats { stats: RtcStats },
        NetworkQuality { uid: Uid, tx_quality: NetworkQuality, rx_quality: NetworkQuality },
        RemoteVideoStats { stats: RemoteVideoStats },
        RemoteAudioStats { stats: RemoteAudioStats },
        RtmpStreamingStateChanged { url: String, state: RtmpStreamingState, err_code: RtmpStreamingErrorCode },
        TranscodingUpdated {},
        StreamInjectedStatus { url: String, uid: Uid, status: InjectStreamStatus },
        StreamMessage { uid: Uid, stream_id: i32, data: String },
        StreamMessageError { uid: Uid, stream_id: i32, error: ErrorCode, missed: i32, cached: i32 },
        ChannelMediaRelayStateChanged { state: ChannelMediaRelayState, code: ChannelMediaRelayError },
        ChannelMediaRelayEvent { code: ChannelMediaRelayEvent },
        MetadataReceived { metadata: Metadata },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RtcEvent;
    use serde_json::json;

    #[test]
    fn decode_user_joined() {
        let event = ChannelEvent::decode(ChannelEventKind::UserJoined, &[json!(42), json!(0)]).unwrap();
        assert_eq!(event, ChannelEvent::UserJoined { uid: 42, elapsed: 0 });
    }

    #[test]
    fn decode_relay_and_metadata() {
        let event = ChannelEvent::decode(
            ChannelEventKind::ChannelMediaRelayStateChanged,
            &[json!(3), json!(5)],
        )
        .unwrap();
        assert_eq!(
            event,
            ChannelEvent::ChannelMediaRelayStateChanged {
                state: ChannelMediaRelayState::Failure,
                code: ChannelMediaRelayError::FailedJoinDestinationChannel,
            }
        );

        let event = ChannelEvent::decode(
            ChannelEventKind::MetadataReceived,
            &[json!({"uid": 7, "buffer": "cue", "timeStamp": 1000})],
        )
        .unwrap();
        assert_eq!(
            event,
            ChannelEvent::MetadataReceived {
                metadata: Metadata { uid: 7, buffer: "cue".into(), time_stamp: 1000 }
            }
        );
    }
}
