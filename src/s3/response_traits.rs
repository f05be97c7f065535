// BPSet: best-practice compliance checks for Amazon S3
// Copyright 2022 MinIO, Inc.
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

//! Response traits shared by the typed S3 responses.
//!
//! Every response keeps the [`S3Request`] that produced it together with the
//! raw headers and body returned by the server. Accessors parse the body on
//! demand, so a malformed document only fails the accessor that reads it.

use crate::s3::types::S3Request;
use bytes::Bytes;
use http::HeaderMap;

#[macro_export]
/// Implements the `FromS3Response` trait for the specified types.
macro_rules! impl_from_s3response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::s3::types::FromS3Response for $ty {
                async fn from_s3response(
                    request: $crate::s3::types::S3Request,
                    response: Result<reqwest::Response, $crate::s3::error::Error>,
                ) -> Result<Self, $crate::s3::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await.map_err($crate::s3::error::ValidationErr::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasS3Fields` trait for the specified types.
macro_rules! impl_has_s3fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::s3::response_traits::HasS3Fields for $ty {
                #[inline]
                fn request(&self) -> &$crate::s3::types::S3Request {
                    &self.request
                }

                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasS3Fields {
    /// The request that was sent to the S3 API.
    fn request(&self) -> &S3Request;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the S3 bucket.
pub trait HasBucket: HasS3Fields {
    #[inline]
    fn bucket(&self) -> &str {
        self.request()
            .bucket
            .as_ref()
            .map(|b| b.as_str())
            .unwrap_or_default()
    }
}

/// Returns the region the request was sent to.
pub trait HasRegion: HasS3Fields {
    #[inline]
    fn region(&self) -> &str {
        self.request().inner_region.as_str()
    }
}
