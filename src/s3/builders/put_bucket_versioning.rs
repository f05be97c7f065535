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

use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{CONTENT_MD5, CONTENT_TYPE};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketVersioningResponse;
pub use crate::s3::types::VersioningStatus;
use crate::s3::types::{BucketName, Region, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketVersioning`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketVersioning.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::put_bucket_versioning`] method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketVersioning {
    /// The S3 client instance used to send the request.
    #[builder(!default)] // force required
    client: S3Client,

    /// Optional additional HTTP headers to include in the request.
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,

    /// Optional additional query parameters to include in the request URL.
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,

    /// Optional AWS region to override the client's default region.
    #[builder(default)]
    region: Option<Region>,

    /// The name of the bucket for which to configure versioning.
    #[builder(!default)] // force required
    bucket: BucketName,

    /// Desired versioning status for the bucket.
    ///
    /// - `Some(VersioningStatus::Enabled)`: Enables versioning.
    /// - `Some(VersioningStatus::Suspended)`: Suspends versioning.
    /// - `None`: rejected when the request is built.
    #[builder(default, setter(into))]
    versioning_status: Option<VersioningStatus>,

    /// Specifies whether MFA delete is enabled for the bucket.
    ///
    /// - `Some(true)`: Enables MFA delete.
    /// - `Some(false)`: Disables MFA delete.
    /// - `None`: No change to the current MFA delete setting.
    #[builder(default, setter(into))]
    mfa_delete: Option<bool>,
}

pub type PutBucketVersioningBldr =
    PutBucketVersioningBuilder<((S3Client,), (), (), (), (BucketName,), (), ())>;

impl PutBucketVersioning {
    fn to_xml(&self) -> Result<String, ValidationErr> {
        let mut data = String::from("<VersioningConfiguration>");

        if let Some(v) = self.mfa_delete {
            data.push_str("<MFADelete>");
            data.push_str(if v { "Enabled" } else { "Disabled" });
            data.push_str("</MFADelete>");
        }

        match self.versioning_status {
            Some(status) => {
                data.push_str("<Status>");
                data.push_str(status.as_str());
                data.push_str("</Status>");
            }
            None => {
                return Err(ValidationErr::InvalidVersioningStatus(
                    "Missing VersioningStatus".into(),
                ));
            }
        }

        data.push_str("</VersioningConfiguration>");
        Ok(data)
    }
}

impl S3Api for PutBucketVersioning {
    type S3Response = PutBucketVersioningResponse;
}

impl ToS3Request for PutBucketVersioning {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        let body = Bytes::from(self.to_xml()?);

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "application/xml");
        headers.add(CONTENT_MD5, md5sum_hash(&body));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "versioning"))
            .headers(headers)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;
    use crate::s3::http::BaseUrl;

    fn client() -> S3Client {
        let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
        S3Client::new::<StaticProvider>(base_url, None, None, None).unwrap()
    }

    #[test]
    fn test_versioning_body() {
        let req = client()
            .put_bucket_versioning(BucketName::new("photos").unwrap())
            .versioning_status(VersioningStatus::Enabled)
            .build();
        assert_eq!(
            req.to_xml().unwrap(),
            "<VersioningConfiguration><Status>Enabled</Status></VersioningConfiguration>"
        );

        let req = client()
            .put_bucket_versioning(BucketName::new("photos").unwrap())
            .versioning_status(VersioningStatus::Suspended)
            .mfa_delete(false)
            .build();
        assert_eq!(
            req.to_xml().unwrap(),
            "<VersioningConfiguration><MFADelete>Disabled</MFADelete><Status>Suspended</Status></VersioningConfiguration>"
        );
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let req = client()
            .put_bucket_versioning(BucketName::new("photos").unwrap())
            .build();
        assert!(matches!(
            req.to_s3request(),
            Err(ValidationErr::InvalidVersioningStatus(_))
        ));
    }

    #[test]
    fn test_request_carries_subresource_and_md5() {
        let req = client()
            .put_bucket_versioning(BucketName::new("photos").unwrap())
            .versioning_status(VersioningStatus::Enabled)
            .build()
            .to_s3request()
            .unwrap();
        assert_eq!(req.method(), &Method::PUT);
        assert!(req.query_params.contains_key("versioning"));
        assert!(req.headers().contains_key(CONTENT_MD5));
        assert!(req.body().is_some());
    }
}
