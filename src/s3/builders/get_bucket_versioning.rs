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
use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::response::GetBucketVersioningResponse;
use crate::s3::types::{BucketName, S3Api, S3Request, ToS3Request};
use crate::s3::utils::insert;
use http::Method;

/// Argument builder for the [`GetBucketVersioning`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketVersioning.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::get_bucket_versioning`] method.
pub type GetBucketVersioning = BucketCommon<GetBucketVersioningPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetBucketVersioningPhantomData;

pub type GetBucketVersioningBldr = BucketCommonBuilder<
    GetBucketVersioningPhantomData,
    ((S3Client,), (), (), (), (BucketName,), ()),
>;

impl S3Api for GetBucketVersioning {
    type S3Response = GetBucketVersioningResponse;
}

impl ToS3Request for GetBucketVersioning {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "versioning"))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
