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

use crate::s3::error::ValidationErr;
use crate::s3::response_traits::{HasBucket, HasRegion};
use crate::s3::types::{S3Request, VersioningStatus};
use crate::s3::utils::get_text_option;
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use xmltree::Element;

/// Response from the [`get_bucket_versioning`](crate::s3::S3Client::get_bucket_versioning) API call,
/// which retrieves the versioning configuration of a bucket.
#[derive(Clone, Debug)]
pub struct GetBucketVersioningResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(GetBucketVersioningResponse);
impl_has_s3fields!(GetBucketVersioningResponse);

impl HasBucket for GetBucketVersioningResponse {}
impl HasRegion for GetBucketVersioningResponse {}

impl GetBucketVersioningResponse {
    /// Returns the versioning status of the bucket.
    ///
    /// `None` means versioning was never configured; S3 then answers with an
    /// empty `VersioningConfiguration` document.
    pub fn status(&self) -> Result<Option<VersioningStatus>, ValidationErr> {
        let root = Element::parse(self.body.clone().reader())?;
        get_text_option(&root, "Status")
            .map(|v| v.parse::<VersioningStatus>())
            .transpose()
    }

    /// Returns whether MFA delete is enabled, if the bucket reports it.
    pub fn mfa_delete(&self) -> Result<Option<bool>, ValidationErr> {
        let root = Element::parse(self.body.clone().reader())?;
        Ok(get_text_option(&root, "MFADelete").map(|v| v == "Enabled"))
    }
}
