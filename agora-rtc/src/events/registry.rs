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

use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Weak,
    },
};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::{EventKind, RtcEvent};
use crate::native::{EventEmitter, NativeEvent, NativeHandler, SubscriptionId};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Listener`], shared by all of its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Application callback with a stable identity.
///
/// Registering the same listener (or a clone of it) twice for one event keeps
/// a single registration.
pub struct Listener<E> {
    id: ListenerId,
    callback: Arc<dyn Fn(&E) + Send + Sync>,
}

impl<E> Listener<E> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self::with_id(ListenerId::next(), callback)
    }

    fn with_id<F>(id: ListenerId, callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        Self { id, callback: Arc::new(callback) }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<E> Clone for Listener<E> {
    fn clone(&self) -> Self {
        Self { id: self.id, callback: self.callback.clone() }
    }
}

impl<E> fmt::Debug for Listener<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.id.0).finish()
    }
}

/// Which native events a registry accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventScope {
    /// Only events without a channel id.
    Engine,
    /// Only events scoped to this channel id.
    Channel(String),
}

impl EventScope {
    pub fn accepts(&self, channel_id: Option<&str>) -> bool {
        match (self, channel_id) {
            (EventScope::Engine, None) => true,
            (EventScope::Channel(id), Some(channel_id)) => id == channel_id,
            _ => false,
        }
    }
}

/// Listeners of one facade instance.
///
/// Every registration owns exactly one subscription on the native emitter.
/// The subscription runs a trampoline which drops events outside of this
/// registry's scope, decodes the positional arguments and calls the listener.
pub struct EventRegistry<E: RtcEvent> {
    emitter: Arc<EventEmitter>,
    prefix: String,
    scope: EventScope,
    listeners: Mutex<HashMap<E::Kind, HashMap<ListenerId, SubscriptionId>>>,
}

impl<E: RtcEvent> EventRegistry<E> {
    pub fn new(emitter: Arc<EventEmitter>, prefix: impl Into<String>, scope: EventScope) -> Arc<Self> {
        Arc::new(Self { emitter, prefix: prefix.into(), scope, listeners: Default::default() })
    }

    pub fn scope(&self) -> &EventScope {
        &self.scope
    }

    /// Emitter key of `kind`.
    pub fn key(&self, kind: E::Kind) -> String {
        format!("{}{}", self.prefix, kind.name())
    }

    pub fn add_listener(self: &Arc<Self>, kind: E::Kind, listener: &Listener<E>) -> Subscription<E> {
        let handler = self.trampoline(kind, listener);
        let sub = self.emitter.add_listener(self.key(kind), handler);

        let mut listeners = self.listeners.lock();
        if let Some(previous) = listeners.entry(kind).or_default().insert(listener.id, sub) {
            self.emitter.remove_subscription(previous);
        }
        log::debug!("{:?}: added listener {:?} for {}", self.scope, listener.id, kind.name());

        Subscription { registry: Arc::downgrade(self), kind, id: listener.id }
    }

    /// Register a closure, shorthand for `add_listener(kind, &Listener::new(f))`.
    pub fn listen<F>(self: &Arc<Self>, kind: E::Kind, callback: F) -> Subscription<E>
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.add_listener(kind, &Listener::new(callback))
    }

    /// No-op if `listener` isn't registered for `kind`.
    pub fn remove_listener(&self, kind: E::Kind, listener: &Listener<E>) {
        self.remove_listener_id(kind, listener.id);
    }

    fn remove_listener_id(&self, kind: E::Kind, id: ListenerId) {
        let mut listeners = self.listeners.lock();
        let Some(by_id) = listeners.get_mut(&kind) else {
            return;
        };

        if let Some(sub) = by_id.remove(&id) {
            self.emitter.remove_subscription(sub);
            log::debug!("{:?}: removed listener {:?} for {}", self.scope, id, kind.name());
        }

        if by_id.is_empty() {
            listeners.remove(&kind);
        }
    }

    /// Remove every listener of `kind`, or every listener at all when `kind`
    /// is `None`.
    pub fn remove_all_listeners(&self, kind: Option<E::Kind>) {
        let mut listeners = self.listeners.lock();
        let removed: Vec<HashMap<ListenerId, SubscriptionId>> = match kind {
            Some(kind) => listeners.remove(&kind).into_iter().collect(),
            None => listeners.drain().map(|(_, by_id)| by_id).collect(),
        };

        for sub in removed.into_iter().flat_map(HashMap::into_values) {
            self.emitter.remove_subscription(sub);
        }
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners.lock().get(&kind).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Receive every event in scope on a channel.
    ///
    /// The backing registrations are removed once the receiver is dropped,
    /// each of them on the first event of its kind that can't be delivered.
    pub fn events(self: &Arc<Self>) -> mpsc::UnboundedReceiver<E> {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = ListenerId::next();
        let registry = Arc::downgrade(self);

        let listener = Listener::with_id(id, move |event: &E| {
            if tx.send(event.clone()).is_err() {
                if let Some(registry) = registry.upgrade() {
                    registry.remove_listener_id(event.kind(), id);
                }
            }
        });

        for kind in <E::Kind as EventKind>::ALL {
            self.add_listener(*kind, &listener);
        }
        rx
    }

    fn trampoline(&self, kind: E::Kind, listener: &Listener<E>) -> NativeHandler {
        let scope = self.scope.clone();
        let callback = listener.callback.clone();

        Arc::new(move |event: &NativeEvent| {
            if !scope.accepts(event.channel_id.as_deref()) {
                return;
            }

            match E::decode(kind, &event.data) {
                Ok(event) => callback(&event),
                Err(err) => log::warn!("{:?}: dropping malformed {} event: {}", scope, kind.name(), err),
            }
        })
    }
}

impl<E: RtcEvent> fmt::Debug for EventRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("prefix", &self.prefix)
            .field("scope", &self.scope)
            .field("kinds", &self.listeners.lock().len())
            .finish()
    }
}

/// Handle returned when adding a listener.
///
/// Dropping it keeps the listener registered, call [`Subscription::remove`] to
/// unregister.
pub struct Subscription<E: RtcEvent> {
    registry: Weak<EventRegistry<E>>,
    kind: E::Kind,
    id: ListenerId,
}

impl<E: RtcEvent> Subscription<E> {
    pub fn kind(&self) -> E::Kind {
        self.kind
    }

    pub fn listener_id(&self) -> ListenerId {
        self.id
    }

    pub fn remove(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_listener_id(self.kind, self.id);
        }
    }
}

impl<E: RtcEvent> fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("kind", &self.kind).field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ChannelEvent, ChannelEventKind, EngineEvent, EngineEventKind};
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    const PREFIX: &str = "AgoraRtcChannelModule_";

    fn channel_registry(emitter: &Arc<EventEmitter>, id: &str) -> Arc<EventRegistry<ChannelEvent>> {
        EventRegistry::new(emitter.clone(), PREFIX, EventScope::Channel(id.to_owned()))
    }

    fn user_joined(channel_id: &str) -> NativeEvent {
        NativeEvent::scoped(channel_id, format!("{PREFIX}UserJoined"), vec![json!(42), json!(0)])
    }

    fn counting_listener() -> (Arc<AtomicUsize>, Listener<ChannelEvent>) {
        let count = Arc::new(AtomicUsize::new(0));
        let listener_count = count.clone();
        let listener = Listener::new(move |_: &ChannelEvent| {
            listener_count.fetch_add(1, Ordering::SeqCst);
        });
        (count, listener)
    }

    #[test]
    fn scope_filtering() {
        assert!(EventScope::Engine.accepts(None));
        assert!(!EventScope::Engine.accepts(Some("room1")));
        assert!(EventScope::Channel("room1".into()).accepts(Some("room1")));
        assert!(!EventScope::Channel("room1".into()).accepts(Some("room2")));
        assert!(!EventScope::Channel("room1".into()).accepts(None));
    }

    #[test]
    fn each_registration_owns_one_native_subscription() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");

        let (_, first) = counting_listener();
        let (_, second) = counting_listener();
        registry.add_listener(ChannelEventKind::UserJoined, &first);
        registry.add_listener(ChannelEventKind::UserJoined, &second);
        registry.add_listener(ChannelEventKind::UserOffline, &first);

        assert_eq!(emitter.listener_count("AgoraRtcChannelModule_UserJoined"), 2);
        assert_eq!(emitter.subscription_count(), 3);
        assert_eq!(registry.listener_count(ChannelEventKind::UserJoined), 2);
    }

    #[test]
    fn re_registration_replaces_subscription() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (count, listener) = counting_listener();

        registry.add_listener(ChannelEventKind::UserJoined, &listener);
        registry.add_listener(ChannelEventKind::UserJoined, &listener.clone());
        assert_eq!(emitter.subscription_count(), 1);

        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn removing_unknown_listener_is_a_no_op() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (count, registered) = counting_listener();
        let (_, stranger) = counting_listener();
        registry.add_listener(ChannelEventKind::UserJoined, &registered);

        registry.remove_listener(ChannelEventKind::UserJoined, &stranger);
        registry.remove_listener(ChannelEventKind::Warning, &registered);
        registry.remove_all_listeners(Some(ChannelEventKind::LeaveChannel));

        assert_eq!(registry.listener_count(ChannelEventKind::UserJoined), 1);
        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn subscription_handle_removes_listener() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (count, listener) = counting_listener();

        let sub = registry.add_listener(ChannelEventKind::UserJoined, &listener);
        assert_eq!(sub.kind(), ChannelEventKind::UserJoined);
        assert_eq!(sub.listener_id(), listener.id());
        sub.remove();
        sub.remove();

        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(registry.is_empty());
        assert_eq!(emitter.subscription_count(), 0);
    }

    #[test]
    fn remove_all_by_kind_keeps_other_kinds() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (joined, joined_listener) = counting_listener();
        let (_, offline_listener) = counting_listener();
        registry.add_listener(ChannelEventKind::UserJoined, &joined_listener);
        registry.add_listener(ChannelEventKind::UserOffline, &offline_listener);

        registry.remove_all_listeners(Some(ChannelEventKind::UserJoined));

        assert_eq!(registry.listener_count(ChannelEventKind::UserJoined), 0);
        assert_eq!(registry.listener_count(ChannelEventKind::UserOffline), 1);
        emitter.emit(&user_joined("room1"));
        assert_eq!(joined.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn remove_all_clears_everything() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (count, listener) = counting_listener();
        for kind in [ChannelEventKind::UserJoined, ChannelEventKind::Warning, ChannelEventKind::RequestToken] {
            registry.add_listener(kind, &listener);
        }

        registry.remove_all_listeners(None);

        assert!(registry.is_empty());
        assert_eq!(emitter.subscription_count(), 0);
        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn engine_scope_ignores_channel_events() {
        let emitter = Arc::new(EventEmitter::new());
        let registry: Arc<EventRegistry<EngineEvent>> =
            EventRegistry::new(emitter.clone(), PREFIX, EventScope::Engine);
        let count = Arc::new(AtomicUsize::new(0));
        let listener_count = count.clone();
        registry.listen(EngineEventKind::UserJoined, move |_| {
            listener_count.fetch_add(1, Ordering::SeqCst);
        });

        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 0);

        emitter.emit(&NativeEvent::new(format!("{PREFIX}UserJoined"), vec![json!(42), json!(0)]));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn malformed_events_are_dropped() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let (count, listener) = counting_listener();
        registry.add_listener(ChannelEventKind::UserJoined, &listener);

        emitter.emit(&NativeEvent::scoped("room1", format!("{PREFIX}UserJoined"), vec![json!("x")]));
        assert_eq!(count.load(Ordering::SeqCst), 0);

        emitter.emit(&user_joined("room1"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn events_stream_receives_scoped_events() {
        let emitter = Arc::new(EventEmitter::new());
        let registry = channel_registry(&emitter, "room1");
        let mut events = registry.events();
        assert_eq!(emitter.subscription_count(), ChannelEventKind::ALL.len());

        emitter.emit(&user_joined("room2"));
        emitter.emit(&user_joined("room1"));

        assert_eq!(events.try_recv().unwrap(), ChannelEvent::UserJoined { uid: 42, elapsed: 0 });
        assert!(events.try_recv().is_err());

        drop(events);
        emitter.emit(&user_joined("room1"));
        assert_eq!(registry.listener_count(ChannelEventKind::UserJoined), 0);
        assert_eq!(emitter.subscription_count(), ChannelEventKind::ALL.len() - 1);
    }
}
