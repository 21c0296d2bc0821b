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

use agora_protocol::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RtcResult<T> = Result<T, RtcError>;

/// Rejection value produced by the native SDK, carried through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("native call rejected with code {code}: {message}")]
pub struct NativeError {
    pub code: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn error_code(&self) -> ErrorCode {
        ErrorCode(self.code)
    }
}

#[derive(Error, Debug)]
pub enum RtcError {
    #[error(transparent)]
    Native(#[from] NativeError),
    #[error("the engine has not been created")]
    NotInitialized,
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RtcError {
    /// The native rejection, if this error came from the SDK.
    pub fn native(&self) -> Option<&NativeError> {
        match self {
            RtcError::Native(err) => Some(err),
            _ => None,
        }
    }
}
