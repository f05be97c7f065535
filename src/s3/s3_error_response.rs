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

//! Typed S3 error document, as returned in the body of failed requests.

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by S3 that the client reacts to.
///
/// Codes without a dedicated variant are kept verbatim in [`S3ErrorCode::OtherError`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum S3ErrorCode {
    #[default]
    NoError,
    PermanentRedirect,
    Redirect,
    BadRequest,
    AccessDenied,
    AuthorizationHeaderMalformed,
    NoSuchBucket,
    ResourceNotFound,
    ResourceConflict,
    MethodNotAllowed,
    NotImplemented,
    SignatureDoesNotMatch,

    OtherError(String),
}

#[allow(dead_code)]
const ALL_S3_ERROR_CODES: &[S3ErrorCode] = &[
    S3ErrorCode::NoError,
    S3ErrorCode::PermanentRedirect,
    S3ErrorCode::Redirect,
    S3ErrorCode::BadRequest,
    S3ErrorCode::AccessDenied,
    S3ErrorCode::AuthorizationHeaderMalformed,
    S3ErrorCode::NoSuchBucket,
    S3ErrorCode::ResourceNotFound,
    S3ErrorCode::ResourceConflict,
    S3ErrorCode::MethodNotAllowed,
    S3ErrorCode::NotImplemented,
    S3ErrorCode::SignatureDoesNotMatch,
];

impl FromStr for S3ErrorCode {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "noerror" => S3ErrorCode::NoError,
            "PermanentRedirect" => S3ErrorCode::PermanentRedirect,
            "Redirect" => S3ErrorCode::Redirect,
            "BadRequest" => S3ErrorCode::BadRequest,
            "AccessDenied" => S3ErrorCode::AccessDenied,
            "AuthorizationHeaderMalformed" => S3ErrorCode::AuthorizationHeaderMalformed,
            "NoSuchBucket" => S3ErrorCode::NoSuchBucket,
            "ResourceNotFound" => S3ErrorCode::ResourceNotFound,
            "ResourceConflict" => S3ErrorCode::ResourceConflict,
            "MethodNotAllowed" => S3ErrorCode::MethodNotAllowed,
            "NotImplemented" => S3ErrorCode::NotImplemented,
            "SignatureDoesNotMatch" => S3ErrorCode::SignatureDoesNotMatch,
            other => S3ErrorCode::OtherError(other.to_owned()),
        })
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            S3ErrorCode::NoError => write!(f, "noerror"),
            S3ErrorCode::PermanentRedirect => write!(f, "PermanentRedirect"),
            S3ErrorCode::Redirect => write!(f, "Redirect"),
            S3ErrorCode::BadRequest => write!(f, "BadRequest"),
            S3ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            S3ErrorCode::AuthorizationHeaderMalformed => write!(f, "AuthorizationHeaderMalformed"),
            S3ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            S3ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            S3ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            S3ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            S3ErrorCode::NotImplemented => write!(f, "NotImplemented"),
            S3ErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            S3ErrorCode::OtherError(msg) => write!(f, "{msg}"),
        }
    }
}

/// S3ErrorResponse is the typed error returned by every failed API operation.
#[derive(Clone, Debug)]
pub struct S3ErrorResponse {
    code: S3ErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn new(
        headers: HeaderMap,
        code: S3ErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
        }
    }

    /// Parses the `<Error>` XML document S3 sends with a failed request.
    pub fn new_from_body(body: Bytes, headers: HeaderMap) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        Ok(Self {
            headers,
            code: S3ErrorCode::from_str(&get_text_default(&root, "Code"))?,
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn code(&self) -> S3ErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
}

impl fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s3 operation failed; code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}",
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for S3ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_roundtrip() {
        for code in ALL_S3_ERROR_CODES {
            let str = code.to_string();
            let code_obs: S3ErrorCode = str.parse().unwrap();
            assert_eq!(
                code_obs, *code,
                "Failed S3ErrorCode round-trip: code {code} -> str '{str}' -> code {code_obs}"
            );
        }
    }

    #[test]
    fn test_unknown_error_code_is_kept() {
        let code: S3ErrorCode = "SlowDown".parse().unwrap();
        assert_eq!(code, S3ErrorCode::OtherError("SlowDown".into()));
        assert_eq!(code.to_string(), "SlowDown");
    }

    #[test]
    fn test_parse_error_document() {
        let body = Bytes::from_static(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>AccessDenied</Code><Message>Access Denied</Message>\
            <Resource>/b1</Resource><RequestId>4442587FB7D0A2F9</RequestId>\
            <HostId>host</HostId><BucketName>b1</BucketName></Error>",
        );
        let resp = S3ErrorResponse::new_from_body(body, HeaderMap::new()).unwrap();
        assert_eq!(resp.code(), S3ErrorCode::AccessDenied);
        assert_eq!(resp.message().as_deref(), Some("Access Denied"));
        assert_eq!(resp.resource(), "/b1");
        assert_eq!(resp.request_id(), "4442587FB7D0A2F9");
        assert_eq!(resp.bucket_name().as_deref(), Some("b1"));
        assert!(resp.to_string().contains("code: AccessDenied"));
    }
}
