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

//! Typed events and the per-facade listener registry.
//!
//! Native events arrive as a name plus positional JSON arguments. Each facade
//! type has a closed enum of events ([`EngineEvent`], [`ChannelEvent`]) and a
//! fieldless kind enum used to subscribe. Decoding happens in a single match
//! generated by `rtc_events!`.

use std::{fmt::Debug, hash::Hash};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

mod channel;
mod engine;
mod registry;

pub use channel::*;
pub use engine::*;
pub use registry::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown event name: {0}")]
pub struct UnknownEvent(pub String);

/// Subscription key of an event.
pub trait EventKind: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Name of the event as emitted by the SDK, without the module prefix.
    fn name(&self) -> &'static str;
}

pub trait RtcEvent: Clone + Debug + Send + Sync + 'static {
    type Kind: EventKind;

    fn kind(&self) -> Self::Kind;

    /// Build the event of the given kind from its positional arguments.
    fn decode(kind: Self::Kind, data: &[Value]) -> serde_json::Result<Self>;
}

/// Positional argument `index`, missing arguments decode as `null`.
pub(crate) fn arg<T>(data: &[Value], index: usize) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    match data.get(index) {
        Some(value) => T::deserialize(value),
        None => T::deserialize(&Value::Null),
    }
}

macro_rules! rtc_events {
    (
        $(#[$meta:meta])*
        pub enum $event:ident / $kind:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident { $($field:ident: $ty:ty),* $(,)? },
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $event {
            $(
                $(#[$vmeta])*
                $variant { $($field: $ty),* },
            )+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $kind {
            $($variant,)+
        }

        impl $crate::events::EventKind for $kind {
            const ALL: &'static [Self] = &[$($kind::$variant,)+];

            fn name(&self) -> &'static str {
                match self {
                    $($kind::$variant => stringify!($variant),)+
                }
            }
        }

        impl std::str::FromStr for $kind {
            type Err = $crate::events::UnknownEvent;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $(stringify!($variant) => Ok($kind::$variant),)+
                    _ => Err($crate::events::UnknownEvent(name.to_owned())),
                }
            }
        }

        impl std::fmt::Display for $kind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::events::EventKind::name(self))
            }
        }

        impl $crate::events::RtcEvent for $event {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $($event::$variant { .. } => $kind::$variant,)+
                }
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn decode(kind: $kind, data: &[serde_json::Value]) -> serde_json::Result<Self> {
                match kind {
                    $(
                        $kind::$variant => {
                            let mut index = 0usize;
                            Ok($event::$variant {
                                $($field: {
                                    let value = $crate::events::arg::<$ty>(data, index)?;
                                    index += 1;
                                    value
                                }),*
                            })
                        }
                    )+
                }
            }
        }
    };
}

pub(crate) use rtc_events;
