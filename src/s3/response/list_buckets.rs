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
use crate::s3::types::{Bucket, BucketName, S3Request};
use crate::s3::utils::{from_iso8601utc, get_text_result};
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use xmltree::Element;

/// Response of [list_buckets()](crate::s3::S3Client::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(ListBucketsResponse);
impl_has_s3fields!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Returns the buckets owned by the caller, in the order S3 lists them.
    ///
    /// Names are taken as listed; a name the client-side validator rejects
    /// only fails once it is used in a bucket request.
    pub fn buckets(&self) -> Result<Vec<Bucket>, ValidationErr> {
        let mut root = Element::parse(self.body.clone().reader())?;
        let buckets = root
            .get_mut_child("Buckets")
            .ok_or(ValidationErr::XmlError("<Buckets> tag not found".into()))?;

        let mut bucket_list: Vec<Bucket> = Vec::new();
        while let Some(b) = buckets.take_child("Bucket") {
            bucket_list.push(Bucket {
                name: BucketName::from_listing(get_text_result(&b, "Name")?),
                creation_date: from_iso8601utc(&get_text_result(&b, "CreationDate")?)?,
            })
        }
        Ok(bucket_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::response::test_util::{request, response};
    use crate::s3::types::FromS3Response;

    #[tokio::test]
    async fn test_list_buckets() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>abc</ID><DisplayName>owner</DisplayName></Owner>
  <Buckets>
    <Bucket><Name>logs</Name><CreationDate>2019-12-11T23:32:47.000Z</CreationDate></Bucket>
    <Bucket><Name>photos</Name><CreationDate>2020-01-02T03:04:05Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;
        let resp = ListBucketsResponse::from_s3response(request(None), response(body))
            .await
            .unwrap();
        let names: Vec<String> = resp
            .buckets()
            .unwrap()
            .into_iter()
            .map(|b| b.name.into_inner())
            .collect();
        assert_eq!(names, vec!["logs", "photos"]);
    }

    #[tokio::test]
    async fn test_no_buckets() {
        let body = "<ListAllMyBucketsResult><Buckets/></ListAllMyBucketsResult>";
        let resp = ListBucketsResponse::from_s3response(request(None), response(body))
            .await
            .unwrap();
        assert!(resp.buckets().unwrap().is_empty());

        let resp =
            ListBucketsResponse::from_s3response(request(None), response("<Other/>"))
                .await
                .unwrap();
        assert!(matches!(resp.buckets(), Err(ValidationErr::XmlError(_))));
    }

    #[tokio::test]
    async fn test_listed_names_are_not_revalidated() {
        let body = "<ListAllMyBucketsResult><Buckets>\
            <Bucket><Name>ab</Name><CreationDate>2020-01-02T03:04:05Z</CreationDate></Bucket>\
            <Bucket><Name>logs</Name><CreationDate>2020-01-02T03:04:05Z</CreationDate></Bucket>\
            </Buckets></ListAllMyBucketsResult>";
        let resp = ListBucketsResponse::from_s3response(request(None), response(body))
            .await
            .unwrap();
        let buckets = resp.buckets().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name.as_str(), "ab");
        assert!(BucketName::new("ab").is_err());
    }
}
