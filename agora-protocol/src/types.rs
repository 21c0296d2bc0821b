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

//! Integer-coded constants exchanged with the native SDK.
//!
//! Documented sets are enums that serialize as their integer code. Codes added
//! by newer SDK releases decode into an `Unrecognized(code)` variant instead of
//! failing. Error and warning codes are open sets kept as integer newtypes.

use std::{fmt, ops::BitOr};

use serde::{Deserialize, Serialize};

/// User id as assigned by the SDK or chosen by the application.
pub type Uid = u32;

macro_rules! int_enum {
    ($(
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(into = "i32", from = "i32")]
            pub enum $name {
                $($(#[$vmeta])* $variant,)+
                /// A code this crate does not name, kept as sent by the SDK.
                Unrecognized(i32),
            }

            impl $name {
                pub fn is_known(&self) -> bool {
                    !matches!(self, $name::Unrecognized(_))
                }
            }

            impl From<$name> for i32 {
                fn from(value: $name) -> i32 {
                    match value {
                        $($name::$variant => $value,)+
                        $name::Unrecognized(code) => code,
                    }
                }
            }

            impl From<i32> for $name {
                fn from(code: i32) -> Self {
                    match code {
                        $(c if c == $value => $name::$variant,)+
                        code => $name::Unrecognized(code),
                    }
                }
            }
        )+
    };
}

int_enum! {
    pub enum ChannelProfile {
        Communication = 0,
        LiveBroadcasting = 1,
        Game = 2,
    }

    pub enum ClientRole {
        Broadcaster = 1,
        Audience = 2,
    }

    pub enum AudioProfile {
        Default = 0,
        SpeechStandard = 1,
        MusicStandard = 2,
        MusicStandardStereo = 3,
        MusicHighQuality = 4,
        MusicHighQualityStereo = 5,
    }

    pub enum AudioScenario {
        Default = 0,
        ChatRoomEntertainment = 1,
        Education = 2,
        GameStreaming = 3,
        ShowRoom = 4,
        ChatRoomGaming = 5,
        Iot = 6,
        Meeting = 8,
    }

    pub enum ConnectionStateType {
        Disconnected = 1,
        Connecting = 2,
        Connected = 3,
        Reconnecting = 4,
        Failed = 5,
    }

    pub enum ConnectionChangedReason {
        Connecting = 0,
        JoinSuccess = 1,
        Interrupted = 2,
        BannedByServer = 3,
        JoinFailed = 4,
        LeaveChannel = 5,
        InvalidAppId = 6,
        InvalidChannelName = 7,
        InvalidToken = 8,
        TokenExpired = 9,
        RejectedByServer = 10,
        SettingProxyServer = 11,
        RenewToken = 12,
        ClientIpAddressChanged = 13,
        KeepAliveTimeout = 14,
    }

    pub enum UserOfflineReason {
        Quit = 0,
        Dropped = 1,
        BecomeAudience = 2,
    }

    pub enum VideoStreamType {
        High = 0,
        Low = 1,
    }

    pub enum StreamFallbackOptions {
        Disabled = 0,
        VideoStreamLow = 1,
        AudioOnly = 2,
    }

    pub enum UserPriority {
        High = 50,
        Normal = 100,
    }

    pub enum EncryptionMode {
        Aes128Xts = 1,
        Aes128Ecb = 2,
        Aes256Xts = 3,
        Sm4128Ecb = 4,
    }

    pub enum NetworkQuality {
        Unknown = 0,
        Excellent = 1,
        Good = 2,
        Poor = 3,
        Bad = 4,
        VBad = 5,
        Down = 6,
        Unsupported = 7,
        Detecting = 8,
    }

    pub enum NetworkType {
        Unknown = -1,
        Disconnected = 0,
        Lan = 1,
        Wifi = 2,
        Mobile2G = 3,
        Mobile3G = 4,
        Mobile4G = 5,
    }

    pub enum AudioOutputRouting {
        Default = -1,
        Headset = 0,
        Earpiece = 1,
        HeadsetNoMic = 2,
        Speakerphone = 3,
        Loudspeaker = 4,
        HeadsetBluetooth = 5,
    }

    pub enum LocalVideoStreamState {
        Stopped = 0,
        Capturing = 1,
        Encoding = 2,
        Failed = 3,
    }

    pub enum LocalVideoStreamError {
        Ok = 0,
        Failure = 1,
        DeviceNoPermission = 2,
        DeviceBusy = 3,
        CaptureFailure = 4,
        EncodeFailure = 5,
    }

    pub enum RemoteVideoState {
        Stopped = 0,
        Starting = 1,
        Decoding = 2,
        Frozen = 3,
        Failed = 4,
    }

    pub enum RemoteVideoStateReason {
        Internal = 0,
        NetworkCongestion = 1,
        NetworkRecovery = 2,
        LocalMuted = 3,
        LocalUnmuted = 4,
        RemoteMuted = 5,
        RemoteUnmuted = 6,
        RemoteOffline = 7,
        AudioFallback = 8,
        AudioFallbackRecovery = 9,
    }

    pub enum LocalAudioStreamState {
        Stopped = 0,
        Recording = 1,
        Encoding = 2,
        Failed = 3,
    }

    pub enum LocalAudioStreamError {
        Ok = 0,
        Failure = 1,
        DeviceNoPermission = 2,
        DeviceBusy = 3,
        RecordFailure = 4,
        EncodeFailure = 5,
    }

    pub enum RemoteAudioState {
        Stopped = 0,
        Starting = 1,
        Decoding = 2,
        Frozen = 3,
        Failed = 4,
    }

    pub enum RemoteAudioStateReason {
        Internal = 0,
        NetworkCongestion = 1,
        NetworkRecovery = 2,
        LocalMuted = 3,
        LocalUnmuted = 4,
        RemoteMuted = 5,
        RemoteUnmuted = 6,
        RemoteOffline = 7,
    }

    pub enum AudioMixingStateCode {
        Playing = 710,
        Paused = 711,
        Stopped = 713,
        Failed = 714,
    }

    pub enum AudioMixingErrorCode {
        Ok = 0,
        CanNotOpen = 701,
        TooFrequentCall = 702,
        InterruptedEof = 703,
    }

    pub enum AudioEffectPreset {
        Off = 0x00000000,
        RoomAcousticsKtv = 0x02010100,
        RoomAcousticsVocalConcert = 0x02010200,
        RoomAcousticsStudio = 0x02010300,
        RoomAcousticsPhonograph = 0x02010400,
        VoiceChangerEffectUncle = 0x02020100,
        VoiceChangerEffectOldman = 0x02020200,
        VoiceChangerEffectBoy = 0x02020300,
    }

    pub enum RtmpStreamingState {
        Idle = 0,
        Connecting = 1,
        Running = 2,
        Recovering = 3,
        Failure = 4,
    }

    pub enum RtmpStreamingErrorCode {
        Ok = 0,
        InvalidParameters = 1,
        EncryptedStreamNotAllowed = 2,
        ConnectionTimeout = 3,
        InternalServerError = 4,
        RtmpServerError = 5,
        TooOften = 6,
        ReachLimit = 7,
        NotAuthorized = 8,
        StreamNotFound = 9,
        FormatNotSupported = 10,
    }

    pub enum ChannelMediaRelayState {
        Idle = 0,
        Connecting = 1,
        Running = 2,
        Failure = 3,
    }

    pub enum ChannelMediaRelayError {
        None = 0,
        ServerErrorResponse = 1,
        ServerNoResponse = 2,
        NoResourceAvailable = 3,
        FailedJoinSourceChannel = 4,
        FailedJoinDestinationChannel = 5,
        FailedPacketReceivedFromSource = 6,
        FailedPacketSentToDestination = 7,
        ServerConnectionLost = 8,
        InternalError = 9,
        SourceTokenExpired = 10,
        DestinationTokenExpired = 11,
    }

    pub enum ChannelMediaRelayEvent {
        Disconnect = 0,
        Connected = 1,
        JoinedSourceChannel = 2,
        JoinedDestinationChannel = 3,
        SentToDestinationChannel = 4,
        ReceivedVideoPacketFromSource = 5,
        ReceivedAudioPacketFromSource = 6,
        UpdateDestinationChannel = 7,
        UpdateDestinationChannelRefused = 8,
        UpdateDestinationChannelNotChange = 9,
        UpdateDestinationChannelIsNil = 10,
        VideoProfileUpdate = 11,
    }

    pub enum InjectStreamStatus {
        StartSuccess = 0,
        StartAlreadyExists = 1,
        StartUnauthorized = 2,
        StartTimedout = 3,
        StartFailed = 4,
        StopSuccess = 5,
        StopNotFound = 6,
        StopUnauthorized = 7,
        StopTimedout = 8,
        StopFailed = 9,
        Broken = 10,
    }

    pub enum LastmileProbeResultState {
        Complete = 1,
        IncompleteNoBwe = 2,
        Unavailable = 3,
    }

    pub enum VideoRenderMode {
        Hidden = 1,
        Fit = 2,
        Adaptive = 3,
        Fill = 4,
    }

    pub enum VideoMirrorMode {
        Auto = 0,
        Enabled = 1,
        Disabled = 2,
    }

    pub enum OrientationMode {
        Adaptive = 0,
        FixedLandscape = 1,
        FixedPortrait = 2,
    }

    pub enum DegradationPreference {
        MaintainQuality = 0,
        MaintainFramerate = 1,
        MaintainBalanced = 2,
    }

    pub enum LighteningContrastLevel {
        Low = 0,
        Normal = 1,
        High = 2,
    }

    pub enum CameraCaptureOutputPreference {
        Auto = 0,
        Performance = 1,
        Preview = 2,
    }

    pub enum CameraDirection {
        Rear = 0,
        Front = 1,
    }

    pub enum AudioSampleRateType {
        Type32000 = 32000,
        Type44100 = 44100,
        Type48000 = 48000,
    }

    pub enum AudioCodecProfileType {
        LcAac = 0,
        HeAac = 1,
    }

    pub enum VideoCodecProfileType {
        BaseLine = 66,
        Main = 77,
        High = 100,
    }

    /// Severity of the SDK log file output.
    pub enum LogLevel {
        None = 0x0000,
        Info = 0x0001,
        Warn = 0x0002,
        Error = 0x0004,
        Fatal = 0x0008,
    }

    pub enum LogFilter {
        Off = 0x0000,
        Debug = 0x080f,
        Info = 0x000f,
        Warning = 0x000e,
        Error = 0x000c,
        Critical = 0x0008,
    }
}

impl Default for NetworkQuality {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for VideoStreamType {
    fn default() -> Self {
        Self::High
    }
}

impl Default for LastmileProbeResultState {
    fn default() -> Self {
        Self::Unavailable
    }
}

/// Region(s) the SDK is allowed to connect to. Values can be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(pub u32);

impl AreaCode {
    pub const CN: AreaCode = AreaCode(0x0000_0001);
    pub const NA: AreaCode = AreaCode(0x0000_0002);
    pub const EU: AreaCode = AreaCode(0x0000_0004);
    pub const AS: AreaCode = AreaCode(0x0000_0008);
    pub const JP: AreaCode = AreaCode(0x0000_0010);
    pub const IN: AreaCode = AreaCode(0x0000_0020);
    pub const GLOB: AreaCode = AreaCode(0xFFFF_FFFF);

    pub fn contains(self, other: AreaCode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for AreaCode {
    fn default() -> Self {
        Self::GLOB
    }
}

impl BitOr for AreaCode {
    type Output = AreaCode;

    fn bitor(self, rhs: AreaCode) -> AreaCode {
        AreaCode(self.0 | rhs.0)
    }
}

macro_rules! code_set {
    ($name:ident { $($(#[$cmeta:meta])* $konst:ident = $value:expr => $desc:expr,)+ }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            $($(#[$cmeta])* pub const $konst: $name = $name($value);)+

            /// Short description of a known code, `None` for codes this crate
            /// does not name.
            pub fn description(&self) -> Option<&'static str> {
                match self.0 {
                    $(c if c == $value => Some($desc),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.description() {
                    Some(desc) => write!(f, "{} ({})", self.0, desc),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    };
}

code_set!(ErrorCode {
    NO_ERROR = 0 => "no error",
    FAILED = 1 => "general error",
    INVALID_ARGUMENT = 2 => "invalid argument",
    NOT_READY = 3 => "sdk not ready",
    NOT_SUPPORTED = 4 => "not supported",
    REFUSED = 5 => "request refused",
    BUFFER_TOO_SMALL = 6 => "buffer too small",
    NOT_INITIALIZED = 7 => "sdk not initialized",
    NO_PERMISSION = 9 => "no permission",
    TIMED_OUT = 10 => "timed out",
    CANCELED = 11 => "request canceled",
    TOO_OFTEN = 12 => "called too often",
    BIND_SOCKET = 13 => "failed to bind socket",
    NET_DOWN = 14 => "network unavailable",
    NO_BUFS = 15 => "no buffer available",
    JOIN_CHANNEL_REJECTED = 17 => "join channel rejected",
    LEAVE_CHANNEL_REJECTED = 18 => "leave channel rejected",
    ALREADY_IN_USE = 19 => "resource already in use",
    ABORT = 20 => "request aborted",
    INIT_NET = 21 => "failed to initialize network",
    RESOURCE_LIMITED = 22 => "resource limited",
    INVALID_APP_ID = 101 => "invalid app id",
    INVALID_CHANNEL_ID = 102 => "invalid channel name",
    NO_SERVER_RESOURCES = 103 => "no server resources",
    TOKEN_EXPIRED = 109 => "token expired",
    INVALID_TOKEN = 110 => "invalid token",
    CONNECTION_INTERRUPTED = 111 => "connection interrupted",
    CONNECTION_LOST = 112 => "connection lost",
    NOT_IN_CHANNEL = 113 => "not in channel",
    SIZE_TOO_LARGE = 114 => "data size too large",
    BITRATE_LIMIT = 115 => "bitrate limit exceeded",
    TOO_MANY_DATA_STREAMS = 116 => "too many data streams",
    DECRYPTION_FAILED = 120 => "decryption failed",
    INVALID_USER_ACCOUNT = 134 => "invalid user account",
    ADM_INIT_PLAYOUT = 1008 => "failed to initialize playout",
    ADM_START_PLAYOUT = 1009 => "failed to start playout",
    ADM_INIT_RECORDING = 1011 => "failed to initialize recording",
    ADM_START_RECORDING = 1012 => "failed to start recording",
    VDM_CAMERA_NOT_AUTHORIZED = 1501 => "camera not authorized",
});

code_set!(WarningCode {
    INVALID_VIEW = 8 => "invalid view",
    INIT_VIDEO = 16 => "failed to initialize video",
    PENDING = 20 => "request pending",
    NO_AVAILABLE_CHANNEL = 103 => "no channel resources",
    LOOKUP_CHANNEL_TIMEOUT = 104 => "channel lookup timed out",
    LOOKUP_CHANNEL_REJECTED = 105 => "channel lookup rejected",
    OPEN_CHANNEL_TIMEOUT = 106 => "open channel timed out",
    OPEN_CHANNEL_REJECTED = 107 => "open channel rejected",
    SWITCH_LIVE_VIDEO_TIMEOUT = 111 => "switch live video timed out",
    SET_CLIENT_ROLE_TIMEOUT = 118 => "set client role timed out",
    OPEN_CHANNEL_INVALID_TICKET = 121 => "invalid ticket",
    OPEN_CHANNEL_TRY_NEXT_VOS = 122 => "trying another server",
    AUDIO_MIXING_OPEN_ERROR = 701 => "failed to open mixing file",
    ADM_RUNTIME_PLAYOUT_WARNING = 1014 => "playout device warning",
    ADM_RUNTIME_RECORDING_WARNING = 1016 => "recording device warning",
    ADM_RECORD_AUDIO_SILENCE = 1019 => "no recorded audio",
    ADM_PLAYBACK_MALFUNCTION = 1020 => "playback device malfunction",
    ADM_RECORD_MALFUNCTION = 1021 => "recording device malfunction",
    ADM_RECORD_AUDIO_LOWLEVEL = 1031 => "recorded audio volume too low",
    ADM_PLAYOUT_AUDIO_LOWLEVEL = 1032 => "playout audio volume too low",
    APM_HOWLING = 1051 => "howling detected",
    ADM_GLITCH_STATE = 1052 => "audio glitch",
    APM_RESIDUAL_ECHO = 1053 => "residual echo detected",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_enum_uses_native_codes() {
        assert_eq!(serde_json::to_value(ClientRole::Audience).unwrap(), 2);
        assert_eq!(i32::from(AudioMixingStateCode::Stopped), 713);
        assert_eq!(NetworkType::from(-1), NetworkType::Unknown);
        assert_eq!(
            serde_json::from_value::<UserPriority>(serde_json::json!(50)).unwrap(),
            UserPriority::High
        );
    }

    #[test]
    fn unknown_codes_are_kept() {
        let state = ConnectionStateType::from(42);
        assert_eq!(state, ConnectionStateType::Unrecognized(42));
        assert!(!state.is_known());
        assert_eq!(i32::from(state), 42);

        let role: ClientRole = serde_json::from_value(serde_json::json!(0)).unwrap();
        assert_eq!(role, ClientRole::Unrecognized(0));
        assert_eq!(serde_json::to_value(role).unwrap(), 0);
    }

    #[test]
    fn error_variants_convert() {
        assert_eq!(LogLevel::from(i32::from(LogLevel::Error)), LogLevel::Error);
        assert_eq!(LogFilter::from(0x000c), LogFilter::Error);
        assert!(LogFilter::Error.is_known());
        assert_eq!(
            serde_json::from_value::<LogFilter>(serde_json::to_value(LogFilter::Error).unwrap()).unwrap(),
            LogFilter::Error
        );
    }

    #[test]
    fn open_code_sets_keep_unknown_values() {
        let code: ErrorCode = serde_json::from_value(serde_json::json!(110)).unwrap();
        assert_eq!(code, ErrorCode::INVALID_TOKEN);
        assert_eq!(code.to_string(), "110 (invalid token)");

        let unknown = WarningCode(9999);
        assert!(unknown.description().is_none());
        assert_eq!(unknown.to_string(), "9999");
    }

    #[test]
    fn area_codes_combine() {
        let area = AreaCode::CN | AreaCode::JP;
        assert!(area.contains(AreaCode::CN));
        assert!(!area.contains(AreaCode::EU));
        assert!(AreaCode::default().contains(area));
        assert_eq!(serde_json::to_value(area).unwrap(), 0x11);
    }
}
