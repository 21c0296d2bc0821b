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
use crate::{error::RtcResult, native::native_args, view::VideoCanvas};

/// Audio
impl RtcEngine {
    pub async fn enable_audio(&self) -> RtcResult<()> {
        self.call("enableAudio", native_args![]).await
    }

    pub async fn disable_audio(&self) -> RtcResult<()> {
        self.call("disableAudio", native_args![]).await
    }

    pub async fn set_audio_profile(
        &self,
        profile: AudioProfile,
        scenario: AudioScenario,
    ) -> RtcResult<()> {
        self.call("setAudioProfile", native_args![profile, scenario]).await
    }

    /// `volume` goes from 0 to 400, 100 keeps the original volume.
    pub async fn adjust_recording_signal_volume(&self, volume: u32) -> RtcResult<()> {
        self.call("adjustRecordingSignalVolume", native_args![volume]).await
    }

    pub async fn adjust_playback_signal_volume(&self, volume: u32) -> RtcResult<()> {
        self.call("adjustPlaybackSignalVolume", native_args![volume]).await
    }

    pub async fn enable_local_audio(&self, enabled: bool) -> RtcResult<()> {
        self.call("enableLocalAudio", native_args![enabled]).await
    }

    pub async fn mute_local_audio_stream(&self, muted: bool) -> RtcResult<()> {
        self.call("muteLocalAudioStream", native_args![muted]).await
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

    /// Report the loudest speakers every `interval` ms through
    /// [`EngineEvent::AudioVolumeIndication`](crate::EngineEvent::AudioVolumeIndication).
    /// An interval of 0 or less disables the indication.
    pub async fn enable_audio_volume_indication(
        &self,
        interval: i32,
        smooth: i32,
        report_vad: bool,
    ) -> RtcResult<()> {
        self.call("enableAudioVolumeIndication", native_args![interval, smooth, report_vad]).await
    }

    pub async fn set_local_voice_pitch(&self, pitch: f64) -> RtcResult<()> {
        self.call("setLocalVoicePitch", native_args![pitch]).await
    }

    pub async fn set_audio_effect_preset(&self, preset: AudioEffectPreset) -> RtcResult<()> {
        self.call("setAudioEffectPreset", native_args![preset]).await
    }
}

/// Video
impl RtcEngine {
    pub async fn enable_video(&self) -> RtcResult<()> {
        self.call("enableVideo", native_args![]).await
    }

    pub async fn disable_video(&self) -> RtcResult<()> {
        self.call("disableVideo", native_args![]).await
    }

    pub async fn set_video_encoder_configuration(
        &self,
        config: &VideoEncoderConfiguration,
    ) -> RtcResult<()> {
        self.call("setVideoEncoderConfiguration", native_args![config]).await
    }

    pub async fn start_preview(&self) -> RtcResult<()> {
        self.call("startPreview", native_args![]).await
    }

    pub async fn stop_preview(&self) -> RtcResult<()> {
        self.call("stopPreview", native_args![]).await
    }

    pub async fn enable_local_video(&self, enabled: bool) -> RtcResult<()> {
        self.call("enableLocalVideo", native_args![enabled]).await
    }

    pub async fn mute_local_video_stream(&self, muted: bool) -> RtcResult<()> {
        self.call("muteLocalVideoStream", native_args![muted]).await
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

    pub async fn set_beauty_effect_options(
        &self,
        enabled: bool,
        options: &BeautyOptions,
    ) -> RtcResult<()> {
        self.call("setBeautyEffectOptions", native_args![enabled, options]).await
    }

    pub async fn setup_local_video(&self, canvas: &VideoCanvas) -> RtcResult<()> {
        self.call("setupLocalVideo", native_args![canvas]).await
    }

    pub async fn setup_remote_video(&self, canvas: &VideoCanvas) -> RtcResult<()> {
        self.call("setupRemoteVideo", native_args![canvas]).await
    }

    pub async fn enable_dual_stream_mode(&self, enabled: bool) -> RtcResult<()> {
        self.call("enableDualStreamMode", native_args![enabled]).await
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

    pub async fn set_local_publish_fallback_option(
        &self,
        option: StreamFallbackOptions,
    ) -> RtcResult<()> {
        self.call("setLocalPublishFallbackOption", native_args![option]).await
    }

    pub async fn set_remote_subscribe_fallback_option(
        &self,
        option: StreamFallbackOptions,
    ) -> RtcResult<()> {
        self.call("setRemoteSubscribeFallbackOption", native_args![option]).await
    }

    pub async fn set_remote_user_priority(&self, uid: Uid, priority: UserPriority) -> RtcResult<()> {
        self.call("setRemoteUserPriority", native_args![uid, priority]).await
    }
}

/// Audio mixing and effects
impl RtcEngine {
    /// Mix a local or online audio file into the microphone stream.
    /// `cycle` of -1 loops forever.
    pub async fn start_audio_mixing(
        &self,
        file_path: &str,
        loopback: bool,
        replace: bool,
        cycle: i32,
    ) -> RtcResult<()> {
        self.call("startAudioMixing", native_args![file_path, loopback, replace, cycle]).await
    }

    pub async fn stop_audio_mixing(&self) -> RtcResult<()> {
        self.call("stopAudioMixing", native_args![]).await
    }

    pub async fn pause_audio_mixing(&self) -> RtcResult<()> {
        self.call("pauseAudioMixing", native_args![]).await
    }

    pub async fn resume_audio_mixing(&self) -> RtcResult<()> {
        self.call("resumeAudioMixing", native_args![]).await
    }

    pub async fn adjust_audio_mixing_volume(&self, volume: u32) -> RtcResult<()> {
        self.call("adjustAudioMixingVolume", native_args![volume]).await
    }

    pub async fn adjust_audio_mixing_playout_volume(&self, volume: u32) -> RtcResult<()> {
        self.call("adjustAudioMixingPlayoutVolume", native_args![volume]).await
    }

    pub async fn adjust_audio_mixing_publish_volume(&self, volume: u32) -> RtcResult<()> {
        self.call("adjustAudioMixingPublishVolume", native_args![volume]).await
    }

    pub async fn get_audio_mixing_playout_volume(&self) -> RtcResult<i32> {
        self.invoke("getAudioMixingPlayoutVolume", native_args![]).await
    }

    pub async fn get_audio_mixing_publish_volume(&self) -> RtcResult<i32> {
        self.invoke("getAudioMixingPublishVolume", native_args![]).await
    }

    /// Duration of the mixed file in ms.
    pub async fn get_audio_mixing_duration(&self) -> RtcResult<i32> {
        self.invoke("getAudioMixingDuration", native_args![]).await
    }

    pub async fn get_audio_mixing_current_position(&self) -> RtcResult<i32> {
        self.invoke("getAudioMixingCurrentPosition", native_args![]).await
    }

    pub async fn set_audio_mixing_position(&self, position_ms: i32) -> RtcResult<()> {
        self.call("setAudioMixingPosition", native_args![position_ms]).await
    }

    pub async fn set_audio_mixing_pitch(&self, pitch: i32) -> RtcResult<()> {
        self.call("setAudioMixingPitch", native_args![pitch]).await
    }

    pub async fn get_effects_volume(&self) -> RtcResult<f64> {
        self.invoke("getEffectsVolume", native_args![]).await
    }

    pub async fn set_effects_volume(&self, volume: f64) -> RtcResult<()> {
        self.call("setEffectsVolume", native_args![volume]).await
    }

    pub async fn set_volume_of_effect(&self, sound_id: i32, volume: f64) -> RtcResult<()> {
        self.call("setVolumeOfEffect", native_args![sound_id, volume]).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn play_effect(
        &self,
        sound_id: i32,
        file_path: &str,
        loop_count: i32,
        pitch: f64,
        pan: f64,
        gain: f64,
        publish: bool,
    ) -> RtcResult<()> {
        self.call("playEffect", native_args![sound_id, file_path, loop_count, pitch, pan, gain, publish])
            .await
    }

    pub async fn stop_effect(&self, sound_id: i32) -> RtcResult<()> {
        self.call("stopEffect", native_args![sound_id]).await
    }

    pub async fn stop_all_effects(&self) -> RtcResult<()> {
        self.call("stopAllEffects", native_args![]).await
    }

    pub async fn preload_effect(&self, sound_id: i32, file_path: &str) -> RtcResult<()> {
        self.call("preloadEffect", native_args![sound_id, file_path]).await
    }

    pub async fn unload_effect(&self, sound_id: i32) -> RtcResult<()> {
        self.call("unloadEffect", native_args![sound_id]).await
    }

    pub async fn pause_effect(&self, sound_id: i32) -> RtcResult<()> {
        self.call("pauseEffect", native_args![sound_id]).await
    }

    pub async fn pause_all_effects(&self) -> RtcResult<()> {
        self.call("pauseAllEffects", native_args![]).await
    }

    pub async fn resume_effect(&self, sound_id: i32) -> RtcResult<()> {
        self.call("resumeEffect", native_args![sound_id]).await
    }

    pub async fn resume_all_effects(&self) -> RtcResult<()> {
        self.call("resumeAllEffects", native_args![]).await
    }
}

/// Devices
impl RtcEngine {
    pub async fn switch_camera(&self) -> RtcResult<()> {
        self.call("switchCamera", native_args![]).await
    }

    pub async fn is_camera_zoom_supported(&self) -> RtcResult<bool> {
        self.invoke("isCameraZoomSupported", native_args![]).await
    }

    pub async fn set_camera_zoom_factor(&self, factor: f64) -> RtcResult<()> {
        self.call("setCameraZoomFactor", native_args![factor]).await
    }

    pub async fn get_camera_max_zoom_factor(&self) -> RtcResult<f64> {
        self.invoke("getCameraMaxZoomFactor", native_args![]).await
    }

    pub async fn is_camera_torch_supported(&self) -> RtcResult<bool> {
        self.invoke("isCameraTorchSupported", native_args![]).await
    }

    pub async fn set_camera_torch_on(&self, on: bool) -> RtcResult<()> {
        self.call("setCameraTorchOn", native_args![on]).await
    }

    pub async fn set_camera_capturer_configuration(
        &self,
        config: &CameraCapturerConfiguration,
    ) -> RtcResult<()> {
        self.call("setCameraCapturerConfiguration", native_args![config]).await
    }

    pub async fn set_default_audio_routeto_speakerphone(&self, enabled: bool) -> RtcResult<()> {
        self.call("setDefaultAudioRoutetoSpeakerphone", native_args![enabled]).await
    }

    pub async fn set_enable_speakerphone(&self, enabled: bool) -> RtcResult<()> {
        self.call("setEnableSpeakerphone", native_args![enabled]).await
    }

    pub async fn is_speakerphone_enabled(&self) -> RtcResult<bool> {
        self.invoke("isSpeakerphoneEnabled", native_args![]).await
    }
}
