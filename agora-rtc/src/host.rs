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

//! Owner of the engine singleton.
//!
//! One host wraps one loaded pair of native modules. At most one
//! [`RtcEngine`] exists per host. [`RtcEngine::destroy`] releases the slot so a
//! later `create` starts over.

use std::{fmt, sync::Arc};

use agora_protocol::{AreaCode, RtcEngineConfig};
use parking_lot::Mutex;
use tokio::sync::Mutex as AsyncMutex;

use crate::{
    engine::RtcEngine,
    error::{RtcError, RtcResult},
    native::{self, native_args, NativeModule},
};

pub(crate) struct HostInner {
    engine_module: Arc<dyn NativeModule>,
    channel_module: Arc<dyn NativeModule>,
    engine: Mutex<Option<RtcEngine>>,
    create_lock: AsyncMutex<()>,
}

impl HostInner {
    /// Clear the slot if it still holds `engine`.
    pub(crate) fn release(&self, engine: &RtcEngine) {
        let mut slot = self.engine.lock();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(engine)) {
            *slot = None;
        }
    }
}

#[derive(Clone)]
pub struct RtcHost {
    inner: Arc<HostInner>,
}

impl RtcHost {
    pub fn new(engine_module: Arc<dyn NativeModule>, channel_module: Arc<dyn NativeModule>) -> Self {
        Self {
            inner: Arc::new(HostInner {
                engine_module,
                channel_module,
                engine: Default::default(),
                create_lock: Default::default(),
            }),
        }
    }

    pub async fn create(&self, app_id: &str) -> RtcResult<RtcEngine> {
        self.create_with_config(RtcEngineConfig::new(app_id)).await
    }

    pub async fn create_with_area_code(&self, app_id: &str, area_code: AreaCode) -> RtcResult<RtcEngine> {
        self.create_with_config(RtcEngineConfig::new(app_id).with_area_code(area_code)).await
    }

    /// Create the engine, or return the existing one untouched (the new config
    /// is then ignored). The handle only exists once the native engine has
    /// been created successfully.
    pub async fn create_with_config(&self, config: RtcEngineConfig) -> RtcResult<RtcEngine> {
        let _guard = self.inner.create_lock.lock().await;
        if let Some(engine) = self.inner.engine.lock().clone() {
            return Ok(engine);
        }

        log::info!("creating engine (area code {:#x})", config.area_code.0);
        native::invoke::<serde_json::Value>(
            self.inner.engine_module.as_ref(),
            "create",
            native_args![&config],
        )
        .await?;

        let engine = RtcEngine::new(
            Arc::downgrade(&self.inner),
            self.inner.engine_module.clone(),
            self.inner.channel_module.clone(),
        );
        *self.inner.engine.lock() = Some(engine.clone());
        Ok(engine)
    }

    /// The current engine, fails if none was created.
    pub fn instance(&self) -> RtcResult<RtcEngine> {
        self.inner.engine.lock().clone().ok_or(RtcError::NotInitialized)
    }
}

impl fmt::Debug for RtcHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RtcHost")
            .field("engine_prefix", &self.inner.engine_module.prefix())
            .field("channel_prefix", &self.inner.channel_module.prefix())
            .field("created", &self.inner.engine.lock().is_some())
            .finish()
    }
}
