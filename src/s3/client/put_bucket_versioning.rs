// BPSet: best-practice compliance checks for Amazon S3
// Copyright 2025 MinIO, Inc.
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

use super::S3Client;
use crate::s3::builders::{PutBucketVersioning, PutBucketVersioningBldr};
use crate::s3::types::BucketName;

impl S3Client {
    /// Creates a [`PutBucketVersioning`] request builder.
    ///
    /// To execute the request, call [`PutBucketVersioning::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketVersioningResponse`](crate::s3::response::PutBucketVersioningResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bpset::s3::S3Client;
    /// use bpset::s3::builders::VersioningStatus;
    /// use bpset::s3::types::{BucketName, S3Api};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client: S3Client = S3Client::new::<bpset::s3::creds::StaticProvider>(
    ///         "https://s3.amazonaws.com".parse().unwrap(), None, None, None).unwrap();
    ///     client
    ///         .put_bucket_versioning(BucketName::new("bucket-name").unwrap())
    ///         .versioning_status(VersioningStatus::Enabled)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn put_bucket_versioning(&self, bucket: BucketName) -> PutBucketVersioningBldr {
        PutBucketVersioning::builder()
            .client(self.clone())
            .bucket(bucket)
    }
}
