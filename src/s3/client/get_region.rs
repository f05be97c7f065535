// BPSet: best-practice compliance checks for Amazon S3
// Copyright 2023 MinIO, Inc.
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

use super::{DEFAULT_REGION, S3Client};
use crate::s3::builders::{GetRegion, GetRegionBldr};
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::GetRegionResponse;
use crate::s3::types::{BucketName, Region, S3Api};

impl S3Client {
    /// Creates a [`GetRegion`] request builder.
    ///
    /// To execute the request, call [`GetRegion::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetRegionResponse`].
    pub fn get_region(&self, bucket: BucketName) -> GetRegionBldr {
        GetRegion::builder().client(self.clone()).bucket(bucket)
    }

    /// Retrieves the region for the specified bucket name from the cache.
    /// If the region is not found in the cache, it is fetched via a call to S3
    /// and then stored in the cache for future lookups.
    pub async fn get_region_cached(
        &self,
        bucket: &BucketName,
        region: &Option<Region>, // the region as provided by the S3Request
    ) -> Result<Region, Error> {
        if let Some(requested_region) = region {
            if let Some(url_region) = self.get_region_from_url()
                && url_region != requested_region.as_str()
            {
                return Err(ValidationErr::RegionMismatch {
                    bucket_region: url_region.to_string(),
                    region: requested_region.to_string(),
                }
                .into());
            }
            return Ok(requested_region.clone());
        }

        if let Some(url_region) = self.get_region_from_url() {
            return Ok(Region::from(url_region));
        }

        // anonymous requests cannot look up a location
        if self.shared.provider.is_none() {
            return Ok(Region::from(DEFAULT_REGION));
        }

        if let Some(v) = self.shared.region_map.get(bucket.as_str()) {
            return Ok(Region::from(v.value().as_str()));
        }

        let resp: GetRegionResponse = self.get_region(bucket.clone()).build().send().await?;
        let resolved_region: String = resp.region_response()?;
        log::debug!("resolved region of bucket {bucket}: {resolved_region}");

        self.shared
            .region_map
            .insert(bucket.to_string(), resolved_region.clone());
        Ok(Region::from(resolved_region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;
    use crate::s3::http::BaseUrl;

    fn client(endpoint: &str, provider: Option<StaticProvider>) -> S3Client {
        let base_url: BaseUrl = endpoint.parse().unwrap();
        S3Client::new(base_url, provider, None, None).unwrap()
    }

    fn bucket() -> BucketName {
        BucketName::new("photos").unwrap()
    }

    #[tokio::test]
    async fn test_requested_region_is_used() {
        let c = client("https://s3.amazonaws.com", None);
        let r = c
            .get_region_cached(&bucket(), &Some(Region::from("eu-west-1")))
            .await
            .unwrap();
        assert_eq!(r.as_str(), "eu-west-1");
    }

    #[tokio::test]
    async fn test_region_mismatch() {
        let c = client("https://s3.us-west-2.amazonaws.com", None);
        let r = c
            .get_region_cached(&bucket(), &Some(Region::from("eu-west-1")))
            .await;
        assert!(matches!(
            r,
            Err(Error::Validation(ValidationErr::RegionMismatch { .. }))
        ));
    }

    #[tokio::test]
    async fn test_url_region_and_anonymous_default() {
        let c = client("https://s3.us-west-2.amazonaws.com", None);
        let r = c.get_region_cached(&bucket(), &None).await.unwrap();
        assert_eq!(r.as_str(), "us-west-2");

        let c = client("http://localhost:9000", None);
        let r = c.get_region_cached(&bucket(), &None).await.unwrap();
        assert_eq!(r.as_str(), DEFAULT_REGION);
    }

    #[tokio::test]
    async fn test_cached_region_skips_lookup() {
        let provider = StaticProvider::new("access", "secret", None);
        let c = client("http://localhost:1", Some(provider));
        c.shared
            .region_map
            .insert("photos".to_string(), "ap-south-1".to_string());
        let r = c.get_region_cached(&bucket(), &None).await.unwrap();
        assert_eq!(r.as_str(), "ap-south-1");

        c.remove_bucket_region("photos");
        assert!(c.shared.region_map.get("photos").is_none());
    }
}
