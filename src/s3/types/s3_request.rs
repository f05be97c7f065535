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

//! S3Request struct and implementation for executing HTTP requests.

use crate::s3::client::{DEFAULT_REGION, S3Client};
use crate::s3::error::Error;
use crate::s3::multimap_ext::Multimap;
use crate::s3::types::{BucketName, Region};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default)]
    region: Option<Region>,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<BucketName>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    /// region computed by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: Region,
}

impl S3Request {
    async fn compute_inner_region(&self) -> Result<Region, Error> {
        let region = match &self.bucket {
            Some(b) => self.client.get_region_cached(b, &self.region).await?,
            None => match &self.region {
                Some(r) => r.clone(),
                None => self
                    .client
                    .get_region_from_url()
                    .unwrap_or(DEFAULT_REGION)
                    .into(),
            },
        };
        Ok(region)
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`](crate::s3::types::S3Api::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self.compute_inner_region().await?;

        self.client
            .execute(
                self.method.clone(),
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_ref().map(|b| b.as_str()),
                self.body.clone(),
            )
            .await
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
