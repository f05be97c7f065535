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

//! Error definitions for S3 operations

use crate::s3::s3_error_response::S3ErrorResponse;
use thiserror::Error;

/// Errors detected on the client side, before or after a request is sent.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unable to build URL: {0}")]
    UrlBuildError(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("region must be {bucket_region}, but passed {region}")]
    RegionMismatch {
        bucket_region: String,
        region: String,
    },

    #[error("invalid versioning status: {0}")]
    InvalidVersioningStatus(String),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("time parse error: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("header value is not valid ASCII: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Errors reported by the server in its response.
#[derive(Debug, Error)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error(
        "invalid server response: {message}; status code: {http_status_code}; content-type: {content_type}"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

/// Errors at the transport level.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}

/// Top-level error of the S3 client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("S3 server error: {0}")]
    S3Server(#[from] S3ServerError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}
