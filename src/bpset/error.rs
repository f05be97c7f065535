// BPSet: best-practice compliance checks for Amazon S3
// Copyright 2026 BPSet Contributors
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

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The single failure kind of a BPSet run.
///
/// Transport, permission and not-found errors are all flattened into a
/// message; the timestamp is taken when the failure is created.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationFailure {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl OperationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

impl From<crate::s3::error::Error> for OperationFailure {
    fn from(e: crate::s3::error::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<crate::s3::error::ValidationErr> for OperationFailure {
    fn from(e: crate::s3::error::ValidationErr) -> Self {
        Self::new(e.to_string())
    }
}
