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

use crate::s3::builders::{BucketCommon, BucketCommonBuilder};
use crate::s3::client::{DEFAULT_REGION, S3Client};
use crate::s3::error::ValidationErr;
use crate::s3::response::GetRegionResponse;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::insert;
use http::Method;

/// Argument builder for the [`GetBucketLocation`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketLocation.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::get_region`] method.
pub type GetRegion = BucketCommon<GetRegionPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetRegionPhantomData;

pub type GetRegionBldr =
    BucketCommonBuilder<GetRegionPhantomData, ((S3Client,), (), (), (), (BucketName,), ())>;

impl S3Api for GetRegion {
    type S3Response = GetRegionResponse;
}

impl ToS3Request for GetRegion {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        // The location lookup itself is always sent to the default region,
        // otherwise resolving the bucket region would recurse.
        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(Some(Region::from(DEFAULT_REGION)))
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "location"))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
