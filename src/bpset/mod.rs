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

//! Best-practice sets: compliance checks that can also fix what they find.

mod api;
mod error;
mod metadata;
mod s3_bucket_versioning;
mod stats;

pub use api::VersioningApi;
pub use error::OperationFailure;
pub use metadata::{ApiCallReason, BpSetMetadata};
pub use s3_bucket_versioning::{
    BUCKET_ARN_PREFIX, S3BucketVersioning, bucket_arn, bucket_name_from_arn,
};
pub use stats::{ComplianceRun, ErrorRecord, RunStatus, StatsTracker};

use async_trait::async_trait;
use std::collections::HashMap;

/// One rule applied to one kind of resource.
///
/// `check` and `fix` record their outcome in the set's [`StatsTracker`] and
/// also return it, so failures are visible at the call site.
#[async_trait]
pub trait BpSet: Send {
    fn metadata(&self) -> BpSetMetadata;

    /// Classifies every resource as compliant or non-compliant.
    async fn check(&mut self) -> Result<(), OperationFailure>;

    /// Remediates the given resources, stopping at the first failure.
    async fn fix(
        &mut self,
        resource_ids: &[String],
        parameters: &HashMap<String, String>,
    ) -> Result<(), OperationFailure>;

    fn stats(&self) -> &ComplianceRun;

    fn clear_stats(&mut self);
}

/// Fails if any parameter listed in `metadata.fix_parameters` is missing.
pub fn validate_fix_parameters(
    metadata: &BpSetMetadata,
    parameters: &HashMap<String, String>,
) -> Result<(), OperationFailure> {
    match metadata
        .fix_parameters
        .iter()
        .find(|name| !parameters.contains_key(name.as_str()))
    {
        Some(name) => Err(OperationFailure::new(format!(
            "missing required fix parameter '{name}' for {}",
            metadata.name
        ))),
        None => Ok(()),
    }
}
