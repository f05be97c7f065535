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

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// An API call a BPSet makes, with the reason it needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCallReason {
    pub api_call: String,
    pub reason: String,
}

impl ApiCallReason {
    pub fn new(api_call: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            api_call: api_call.into(),
            reason: reason.into(),
        }
    }
}

/// Static description of a BPSet, for discovery and reporting tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct BpSetMetadata {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub description: String,
    pub priority: u32,
    #[builder(setter(into))]
    pub priority_reason: String,
    #[builder(setter(into))]
    pub aws_service: String,
    #[builder(setter(into))]
    pub aws_service_category: String,
    #[builder(setter(into))]
    pub bp_category: String,
    /// Names of the parameters `fix` requires; values are not typed here.
    #[builder(default)]
    pub fix_parameters: Vec<String>,
    #[builder(default)]
    pub is_fix_destructive: bool,
    #[builder(default)]
    pub check_api_calls: Vec<ApiCallReason>,
    #[builder(default)]
    pub fix_api_calls: Vec<ApiCallReason>,
    /// Shown to the operator before remediation.
    #[builder(default, setter(into))]
    pub fix_advisory: String,
}
