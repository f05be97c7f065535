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

//! Checks that every S3 bucket has versioning enabled.

use crate::bpset::api::VersioningApi;
use crate::bpset::error::OperationFailure;
use crate::bpset::metadata::{ApiCallReason, BpSetMetadata};
use crate::bpset::stats::{ComplianceRun, StatsTracker};
use crate::bpset::{BpSet, validate_fix_parameters};
use crate::s3::error::Error;
use crate::s3::types::VersioningStatus;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub const BUCKET_ARN_PREFIX: &str = "arn:aws:s3:::";

/// Returns the ARN of `bucket`.
///
/// ```
/// use bpset::bpset::bucket_arn;
/// assert_eq!(bucket_arn("logs"), "arn:aws:s3:::logs");
/// ```
pub fn bucket_arn(bucket: &str) -> String {
    format!("{BUCKET_ARN_PREFIX}{bucket}")
}

/// Extracts the bucket name from an `arn:aws:s3:::<name>` identifier.
pub fn bucket_name_from_arn(arn: &str) -> Result<&str, OperationFailure> {
    match arn.strip_prefix(BUCKET_ARN_PREFIX) {
        Some(name) if !name.is_empty() && !name.contains(['/', ':']) => Ok(name),
        _ => Err(OperationFailure::new(format!(
            "invalid S3 bucket ARN: {arn}"
        ))),
    }
}

/// The versioning BPSet.
///
/// A bucket is compliant only when its versioning status is exactly
/// `Enabled`; suspended and never-configured buckets are not.
#[derive(Debug)]
pub struct S3BucketVersioning<C> {
    client: Arc<C>,
    tracker: StatsTracker,
}

impl<C: VersioningApi> S3BucketVersioning<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            tracker: StatsTracker::new(),
        }
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Partitions bucket ARNs into (compliant, non-compliant), in listing order.
    async fn classify(&self) -> Result<(Vec<String>, Vec<String>), Error> {
        let mut compliant = Vec::new();
        let mut non_compliant = Vec::new();

        for bucket in self.client.list_buckets().await? {
            let status = self.client.get_bucket_versioning(&bucket).await?;
            log::debug!("bucket {bucket}: versioning {status:?}");
            if status == Some(VersioningStatus::Enabled) {
                compliant.push(bucket_arn(&bucket));
            } else {
                non_compliant.push(bucket_arn(&bucket));
            }
        }
        Ok((compliant, non_compliant))
    }

    async fn enable_versioning(&self, resource_ids: &[String]) -> Result<(), OperationFailure> {
        for arn in resource_ids {
            let bucket = bucket_name_from_arn(arn)?;
            self.client
                .put_bucket_versioning(bucket, VersioningStatus::Enabled)
                .await?;
            log::info!("enabled versioning on bucket {bucket}");
        }
        Ok(())
    }
}

#[async_trait]
impl<C: VersioningApi + 'static> BpSet for S3BucketVersioning<C> {
    fn metadata(&self) -> BpSetMetadata {
        BpSetMetadata::builder()
            .name("S3BucketVersioningEnabled")
            .description("Checks that versioning is enabled for every S3 bucket.")
            .priority(2)
            .priority_reason(
                "Versioning keeps prior object versions, so objects that are overwritten or deleted by mistake can be recovered.",
            )
            .aws_service("Amazon S3")
            .aws_service_category("Storage")
            .bp_category("Data Protection")
            .is_fix_destructive(false)
            .check_api_calls(vec![
                ApiCallReason::new("ListBuckets", "Enumerate the buckets to check"),
                ApiCallReason::new(
                    "GetBucketVersioning",
                    "Read the versioning status of each bucket",
                ),
            ])
            .fix_api_calls(vec![ApiCallReason::new(
                "PutBucketVersioning",
                "Set the versioning status of each non-compliant bucket to Enabled",
            )])
            .fix_advisory(
                "Enabling versioning retains noncurrent object versions, which increases storage cost. Consider adding a lifecycle rule that expires noncurrent versions.",
            )
            .build()
    }

    async fn check(&mut self) -> Result<(), OperationFailure> {
        self.tracker.start();
        match self.classify().await {
            Ok((compliant, non_compliant)) => {
                log::info!(
                    "versioning check finished: {} compliant, {} non-compliant",
                    compliant.len(),
                    non_compliant.len()
                );
                self.tracker.complete_check(compliant, non_compliant);
                Ok(())
            }
            Err(e) => {
                self.tracker.discard_results();
                Err(self.tracker.fail(e.into()))
            }
        }
    }

    async fn fix(
        &mut self,
        resource_ids: &[String],
        parameters: &HashMap<String, String>,
    ) -> Result<(), OperationFailure> {
        self.tracker.start();
        let result = match validate_fix_parameters(&self.metadata(), parameters) {
            Ok(()) => self.enable_versioning(resource_ids).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.tracker.complete();
                Ok(())
            }
            Err(e) => Err(self.tracker.fail(e)),
        }
    }

    fn stats(&self) -> &ComplianceRun {
        self.tracker.stats()
    }

    fn clear_stats(&mut self) {
        self.tracker.clear_stats();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_name_from_arn() {
        assert_eq!(bucket_name_from_arn("arn:aws:s3:::logs").unwrap(), "logs");
        assert!(bucket_name_from_arn("arn:aws:s3:::").is_err());
        assert!(bucket_name_from_arn("logs").is_err());
        assert!(bucket_name_from_arn("arn:aws:s3:::logs/key").is_err());
        assert!(bucket_name_from_arn("arn:aws:sqs:::logs").is_err());
    }

    quickcheck! {
        fn prop_arn_round_trip(name: String) -> bool {
            if name.is_empty() || name.contains(['/', ':']) {
                return bucket_name_from_arn(&bucket_arn(&name)).is_err();
            }
            bucket_name_from_arn(&bucket_arn(&name)).ok() == Some(name.as_str())
        }
    }
}
