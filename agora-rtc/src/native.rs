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

//! Boundary with the native SDK.
//!
//! Calls go out through [`NativeModule::call`] with positional JSON arguments.
//! Events come back through the module's [`EventEmitter`], keyed by the
//! module prefix followed by the event name.

use std::{collections::HashMap, fmt, sync::Arc};

use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NativeError, RtcResult};

pub type NativeResult<T> = Result<T, NativeError>;

/// Callback registered on an [`EventEmitter`].
pub type NativeHandler = Arc<dyn Fn(&NativeEvent) + Send + Sync>;

/// Raw event payload as emitted by the SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeEvent {
    /// Prefixed event key, e.g. `io.agora.rtc.UserJoined`.
    pub name: String,
    /// Set for events that belong to a single channel.
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub data: Vec<Value>,
}

impl NativeEvent {
    pub fn new(name: impl Into<String>, data: Vec<Value>) -> Self {
        Self { name: name.into(), channel_id: None, data }
    }

    pub fn scoped(channel_id: impl Into<String>, name: impl Into<String>, data: Vec<Value>) -> Self {
        Self { name: name.into(), channel_id: Some(channel_id.into()), data }
    }
}

/// One native module (engine level or channel level) of the SDK.
pub trait NativeModule: Send + Sync {
    /// Prefix of every event key this module emits.
    fn prefix(&self) -> &str;

    /// Emitter shared by every listener of this module.
    fn emitter(&self) -> Arc<EventEmitter>;

    /// Invoke `method` with positional arguments. The future resolves once the
    /// SDK resolves or rejects the call.
    fn call(&self, method: &'static str, args: Vec<Value>) -> BoxFuture<'static, NativeResult<Value>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct EmitterInner {
    next_id: u64,
    handlers: HashMap<String, Vec<(SubscriptionId, NativeHandler)>>,
    keys: HashMap<SubscriptionId, String>,
}

/// Fan-out of native events to subscribed handlers.
///
/// Handlers run outside of the emitter lock, so they may subscribe or
/// unsubscribe while being dispatched.
#[derive(Default)]
pub struct EventEmitter {
    inner: Mutex<EmitterInner>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, event: impl Into<String>, handler: NativeHandler) -> SubscriptionId {
        let event = event.into();
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.handlers.entry(event.clone()).or_default().push((id, handler));
        inner.keys.insert(id, event);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn remove_subscription(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let Some(event) = inner.keys.remove(&id) else {
            return false;
        };

        if let Some(handlers) = inner.handlers.get_mut(&event) {
            handlers.retain(|(sub, _)| *sub != id);
            if handlers.is_empty() {
                inner.handlers.remove(&event);
            }
        }
        true
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.lock().handlers.get(event).map_or(0, Vec::len)
    }

    /// Total number of live subscriptions, all keys included.
    pub fn subscription_count(&self) -> usize {
        self.inner.lock().keys.len()
    }

    pub fn emit(&self, event: &NativeEvent) {
        let handlers: Vec<NativeHandler> = match self.inner.lock().handlers.get(&event.name) {
            Some(handlers) => handlers.iter().map(|(_, handler)| handler.clone()).collect(),
            None => return,
        };

        for handler in handlers {
            handler(event);
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

/// Serialize positional arguments for [`NativeModule::call`], returning early
/// with `RtcError::Serde` if one of them can't be encoded.
macro_rules! native_args {
    () => {
        Vec::<serde_json::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$(serde_json::to_value($arg)?),+]
    };
}

pub(crate) use native_args;

pub(crate) async fn invoke<T>(
    native: &dyn NativeModule,
    method: &'static str,
    args: Vec<Value>,
) -> RtcResult<T>
where
    T: DeserializeOwned,
{
    let value = native.call(method, args).await?;
    Ok(serde_json::from_value(value)?)
}
