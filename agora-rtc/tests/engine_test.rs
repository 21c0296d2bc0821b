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

use std::sync::Arc;

use agora_rtc::{
    protocol::{AreaCode, ClientRole, ConnectionStateType, RtcEngineConfig},
    NativeError, RtcError, SurfaceView,
};
use anyhow::Result;
use common::test_env;
use parking_lot::Mutex;
use serde_json::json;

mod common;

#[test_log::test(tokio::test)]
async fn create_is_idempotent() -> Result<()> {
    let env = test_env();

    let first = env.host.create("abc").await?;
    let second = env.host.create_with_area_code("other", AreaCode::EU).await?;

    assert!(first.ptr_eq(&second));
    assert!(env.host.instance()?.ptr_eq(&first));
    assert_eq!(env.engine_module.call_count("create"), 1);
    assert_eq!(
        env.engine_module.calls_to("create")[0],
        vec![json!({ "appId": "abc", "areaCode": 0xFFFF_FFFFu32 })]
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn concurrent_create_calls_native_once() -> Result<()> {
    let env = test_env();

    let (a, b) = tokio::join!(env.host.create("abc"), env.host.create("abc"));

    assert!(a?.ptr_eq(&b?));
    assert_eq!(env.engine_module.call_count("create"), 1);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn create_with_config_forwards_area_code() -> Result<()> {
    let env = test_env();

    env.host.create_with_config(RtcEngineConfig::new("abc").with_area_code(AreaCode::CN | AreaCode::AS)).await?;

    assert_eq!(env.engine_module.calls_to("create")[0][0]["areaCode"], json!(0x9));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn instance_before_create_fails() {
    let env = test_env();
    assert!(matches!(env.host.instance(), Err(RtcError::NotInitialized)));
}

#[test_log::test(tokio::test)]
async fn failed_creation_leaves_no_engine() {
    let env = test_env();
    env.engine_module.reject("create", NativeError::new(101, "invalid app id"));

    let err = env.host.create("").await.unwrap_err();

    assert_eq!(err.native(), Some(&NativeError::new(101, "invalid app id")));
    assert!(matches!(env.host.instance(), Err(RtcError::NotInitialized)));
}

#[test_log::test(tokio::test)]
async fn destroy_releases_singleton() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;

    engine.destroy().await?;

    assert!(matches!(env.host.instance(), Err(RtcError::NotInitialized)));
    let recreated = env.host.create("abc").await?;
    assert!(!recreated.ptr_eq(&engine));
    assert_eq!(env.engine_module.call_count("create"), 2);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn destroy_without_channels() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;

    engine.destroy().await?;

    assert!(engine.channels().is_empty());
    assert_eq!(env.engine_module.call_count("destroy"), 1);
    assert_eq!(env.channel_module.call_count("destroy"), 0);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn destroy_tears_down_channels_first() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;
    engine.create_channel("room1").await?;
    engine.create_channel("room2").await?;
    engine.listen(agora_rtc::EngineEventKind::ConnectionLost, |_| {});

    let still_registered = Arc::new(Mutex::new(Vec::new()));
    {
        let observed = engine.clone();
        let still_registered = still_registered.clone();
        env.channel_module.on_call(move |method, args| {
            if method == "destroy" {
                let id = args[0].as_str().unwrap_or_default();
                still_registered.lock().push(observed.channels().contains(id));
            }
        });
    }

    let at_engine_destroy = Arc::new(Mutex::new(None));
    {
        let observed = engine.clone();
        let channel_module = env.channel_module.clone();
        let at_engine_destroy = at_engine_destroy.clone();
        env.engine_module.on_call(move |method, _| {
            if method == "destroy" {
                *at_engine_destroy.lock() = Some((
                    observed.channels().is_empty(),
                    observed.event_registry().is_empty(),
                    channel_module.call_count("destroy"),
                ));
            }
        });
    }

    engine.destroy().await?;

    assert_eq!(*still_registered.lock(), vec![false, false]);
    assert_eq!(*at_engine_destroy.lock(), Some((true, true, 2)));
    assert_eq!(env.channel_module.subscription_count(), 0);
    assert_eq!(env.engine_module.subscription_count(), 0);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn failed_native_destroy_keeps_engine() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;
    env.engine_module.reject("destroy", NativeError::new(7, "not initialized"));

    assert!(engine.destroy().await.is_err());
    assert!(env.host.instance()?.ptr_eq(&engine));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn forwards_arguments_positionally() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;

    engine.set_client_role(ClientRole::Broadcaster).await?;
    engine.join_channel(None, "lobby", None, 0).await?;
    engine.mute_remote_audio_stream(42, true).await?;
    engine.setup_remote_video(SurfaceView::new(42).with_channel_id("lobby").canvas()).await?;
    engine.leave_channel().await?;

    let calls: Vec<_> = env.engine_module.calls().into_iter().skip(1).collect();
    assert_eq!(
        calls,
        vec![
            ("setClientRole".to_owned(), vec![json!(1)]),
            ("joinChannel".to_owned(), vec![json!(null), json!("lobby"), json!(null), json!(0)]),
            ("muteRemoteAudioStream".to_owned(), vec![json!(42), json!(true)]),
            (
                "setupRemoteVideo".to_owned(),
                vec![json!({ "uid": 42, "channelId": "lobby", "renderMode": 1, "mirrorMode": 0 })]
            ),
            ("leaveChannel".to_owned(), vec![]),
        ]
    );
    Ok(())
}

#[test_log::test(tokio::test)]
async fn native_rejection_is_surfaced_unchanged() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;
    env.engine_module.reject("enableVideo", NativeError::new(-7, "engine not ready"));

    let err = engine.enable_video().await.unwrap_err();

    assert_eq!(err.native(), Some(&NativeError::new(-7, "engine not ready")));
    Ok(())
}

#[test_log::test(tokio::test)]
async fn decodes_return_values() -> Result<()> {
    let env = test_env();
    let engine = env.host.create("abc").await?;
    env.engine_module.respond("getConnectionState", json!(3));
    env.engine_module.respond("createDataStream", json!(5));
    env.engine_module.respond("getSdkVersion", json!(42));

    assert_eq!(engine.get_connection_state().await?, ConnectionStateType::Connected);
    assert_eq!(engine.create_data_stream(true, true).await?, 5);
    assert!(matches!(engine.get_sdk_version().await, Err(RtcError::Serde(_))));
    Ok(())
}
