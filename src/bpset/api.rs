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

//! The S3 calls a versioning BPSet depends on.

use crate::s3::S3Client;
use crate::s3::error::Error;
use crate::s3::types::{BucketName, S3Api, VersioningStatus};
use async_trait::async_trait;

/// The three verbs the versioning checks need from S3.
///
/// [`S3Client`] implements it against a real endpoint; tests plug in an
/// in-memory implementation.
#[async_trait]
pub trait VersioningApi: Send + Sync {
    /// Returns the names of all buckets owned by the caller.
    async fn list_buckets(&self) -> Result<Vec<String>, Error>;

    /// Returns the versioning status of `bucket`, or `None` if versioning was
    /// never configured.
    async fn get_bucket_versioning(&self, bucket: &str)
    -> Result<Option<VersioningStatus>, Error>;

    async fn put_bucket_versioning(
        &self,
        bucket: &str,
        status: VersioningStatus,
    ) -> Result<(), Error>;
}

#[async_trait]
impl VersioningApi for S3Client {
    async fn list_buckets(&self) -> Result<Vec<String>, Error> {
        let resp = self.list_buckets().build().send().await?;
        Ok(resp
            .buckets()?
            .into_iter()
            .map(|b| b.name.into_inner())
            .collect())
    }

    async fn get_bucket_versioning(
        &self,
        bucket: &str,
    ) -> Result<Option<VersioningStatus>, Error> {
        let resp = self
            .get_bucket_versioning(BucketName::new(bucket)?)
            .build()
            .send()
            .await?;
        Ok(resp.status()?)
    }

    async fn put_bucket_versioning(
        &self,
        bucket: &str,
        status: VersioningStatus,
    ) -> Result<(), Error> {
        self.put_bucket_versioning(BucketName::new(bucket)?)
            .versioning_status(status)
            .build()
            .send()
            .await?;
        Ok(())
    }
}
