#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use agora_rtc::{EventEmitter, NativeError, NativeEvent, NativeModule, NativeResult, RtcHost};
use futures_util::{
    future::{self, BoxFuture},
    FutureExt,
};
use parking_lot::Mutex;
use serde_json::Value;

pub const ENGINE_PREFIX: &str = "AgoraRtcEngineModule:";
pub const CHANNEL_PREFIX: &str = "AgoraRtcChannelModule:";

type CallHook = Arc<dyn Fn(&str, &[Value]) + Send + Sync>;

/// In-memory stand-in for one native module.
///
/// Records every call, resolves with `null` unless a response or a rejection
/// was configured for the method.
pub struct MockNativeModule {
    prefix: &'static str,
    emitter: Arc<EventEmitter>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    responses: Mutex<HashMap<String, Value>>,
    rejections: Mutex<HashMap<String, NativeError>>,
    hook: Mutex<Option<CallHook>>,
}

impl MockNativeModule {
    pub fn new(prefix: &'static str) -> Arc<Self> {
        Arc::new(Self {
            prefix,
            emitter: Arc::new(EventEmitter::new()),
            calls: Default::default(),
            responses: Default::default(),
            rejections: Default::default(),
            hook: Default::default(),
        })
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Vec<Value>> {
        self.calls
            .lock()
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, args)| args.clone())
            .collect()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls_to(method).len()
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.responses.lock().insert(method.to_owned(), value);
    }

    pub fn reject(&self, method: &str, error: NativeError) {
        self.rejections.lock().insert(method.to_owned(), error);
    }

    /// Run `hook` synchronously on every call, before it resolves.
    pub fn on_call(&self, hook: impl Fn(&str, &[Value]) + Send + Sync + 'static) {
        *self.hook.lock() = Some(Arc::new(hook));
    }

    pub fn emit(&self, name: &str, data: Vec<Value>) {
        self.emitter.emit(&NativeEvent::new(format!("{}{}", self.prefix, name), data));
    }

    pub fn emit_scoped(&self, channel_id: &str, name: &str, data: Vec<Value>) {
        self.emitter.emit(&NativeEvent::scoped(channel_id, format!("{}{}", self.prefix, name), data));
    }

    pub fn subscription_count(&self) -> usize {
        self.emitter.subscription_count()
    }
}

impl NativeModule for MockNativeModule {
    fn prefix(&self) -> &str {
        self.prefix
    }

    fn emitter(&self) -> Arc<EventEmitter> {
        self.emitter.clone()
    }

    fn call(&self, method: &'static str, args: Vec<Value>) -> BoxFuture<'static, NativeResult<Value>> {
        let hook = self.hook.lock().clone();
        if let Some(hook) = hook {
            hook(method, &args);
        }
        self.calls.lock().push((method.to_owned(), args));

        let result = match self.rejections.lock().get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(self.responses.lock().get(method).cloned().unwrap_or(Value::Null)),
        };
        future::ready(result).boxed()
    }
}

pub struct TestEnv {
    pub host: RtcHost,
    pub engine_module: Arc<MockNativeModule>,
    pub channel_module: Arc<MockNativeModule>,
}

pub fn test_env() -> TestEnv {
    let engine_module = MockNativeModule::new(ENGINE_PREFIX);
    let channel_module = MockNativeModule::new(CHANNEL_PREFIX);
    let host = RtcHost::new(engine_module.clone(), channel_module.clone());
    TestEnv { host, engine_module, channel_module }
}
