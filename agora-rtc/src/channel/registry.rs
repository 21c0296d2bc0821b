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

use std::collections::HashMap;

use futures_util::future;
use parking_lot::Mutex;

use super::RtcChannel;
use crate::error::RtcResult;

/// Channel handles of one engine, keyed by channel id.
///
/// At most one handle exists per channel id. The lock is never held while
/// calling into a handle or the native layer.
#[derive(Default)]
pub struct ChannelRegistry {
    channels: Mutex<HashMap<String, RtcChannel>>,
}

impl ChannelRegistry {
    pub fn get(&self, channel_id: &str) -> Option<RtcChannel> {
        self.channels.lock().get(channel_id).cloned()
    }

    /// Returns the handle previously stored under the same channel id.
    pub fn insert(&self, channel: RtcChannel) -> Option<RtcChannel> {
        self.channels.lock().insert(channel.channel_id().to_owned(), channel)
    }

    pub fn remove(&self, channel_id: &str) -> Option<RtcChannel> {
        self.channels.lock().remove(channel_id)
    }

    /// Remove `channel` only if it is still the registered handle for its id.
    pub(crate) fn remove_channel(&self, channel: &RtcChannel) -> bool {
        let mut channels = self.channels.lock();
        match channels.get(channel.channel_id()) {
            Some(current) if current.ptr_eq(channel) => {
                channels.remove(channel.channel_id());
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, channel_id: &str) -> bool {
        self.channels.lock().contains_key(channel_id)
    }

    pub fn len(&self) -> usize {
        self.channels.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.lock().is_empty()
    }

    /// Sorted channel ids.
    pub fn channel_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.channels.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run `f` on a snapshot of the handles.
    pub fn for_each(&self, mut f: impl FnMut(&RtcChannel)) {
        let channels: Vec<_> = self.channels.lock().values().cloned().collect();
        channels.iter().for_each(|channel| f(channel));
    }

    /// Forget every handle without destroying it.
    pub fn clear(&self) {
        self.channels.lock().clear();
    }

    fn drain(&self) -> Vec<RtcChannel> {
        self.channels.lock().drain().map(|(_, channel)| channel).collect()
    }

    /// Destroy every registered channel.
    ///
    /// The registry is empty before the first native teardown is issued. All
    /// teardowns run concurrently and are awaited, the first failure is
    /// returned.
    pub async fn destroy_all(&self) -> RtcResult<()> {
        let channels = self.drain();
        if channels.is_empty() {
            return Ok(());
        }

        log::info!("destroying {} channel(s)", channels.len());
        let results = future::join_all(channels.iter().map(|channel| channel.teardown())).await;
        results.into_iter().collect()
    }
}
