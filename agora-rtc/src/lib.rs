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

//! Rust binding of the Agora RTC SDK.
//!
//! The SDK itself lives behind [`NativeModule`]: one module for the engine and
//! one for channels. [`RtcHost`] owns the engine singleton, the engine owns its
//! channels, and every facade forwards its calls unchanged to the native side
//! and surfaces the native events as typed enums.

mod channel;
mod engine;
mod error;
mod host;
mod native;
mod view;

pub mod events;

pub use agora_protocol as protocol;

pub use channel::{ChannelRegistry, RtcChannel};
pub use engine::RtcEngine;
pub use error::{NativeError, RtcError, RtcResult};
pub use events::{
    ChannelEvent, ChannelEventKind, EngineEvent, EngineEventKind, EventKind, EventScope, Listener,
    ListenerId, RtcEvent, Subscription,
};
pub use host::RtcHost;
pub use native::{EventEmitter, NativeEvent, NativeHandler, NativeModule, NativeResult, SubscriptionId};
pub use view::{SurfaceView, TextureView, VideoCanvas};

/// `use agora_rtc::prelude::*;` to import the common types
pub mod prelude;
