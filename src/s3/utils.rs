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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::Multimap;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA256 of an empty payload
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

// Unreserved characters per RFC 3986; everything else is percent-encoded.
const AWS_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a string the way AWS Signature V4 expects.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, AWS_ENCODE_SET).collect()
}

/// Encodes data using base64 algorithm
pub fn b64_encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Encodes data as lowercase hex
pub fn hex_encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

/// Gets base64 encoded MD5 hash of given data, as used by the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64_encode(md5::compute(data).0)
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parses ISO8601 UTC formatted value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ValidationErr> {
    let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3fZ")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ"))?;
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    !value.split('.').any(|token| {
        token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
    })
}

/// Validates given bucket name. S3 buckets listed by the server are checked
/// with `strict == false` so that legacy names are still accepted.
pub fn check_bucket_name(bucket_name: impl AsRef<str>, strict: bool) -> Result<(), ValidationErr> {
    let bucket_name: &str = bucket_name.as_ref();
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }

    if bucket_name.len() < 3 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be less than 3 characters"
        )));
    }

    if bucket_name.len() > 63 {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be greater than 63 characters"
        )));
    }

    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(
            r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$"
        )
        .unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if IPV4_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') cannot be an IP address"
        )));
    }

    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') contains invalid successive characters '..', '.-' or '-.'",
        )));
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return Err(ValidationErr::InvalidBucketName(format!(
                "bucket name ('{bucket_name}') does not follow S3 standards strictly",
            )));
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name ('{bucket_name}') does not follow S3 standards"
        )));
    }

    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::XmlError(format!("<{tag}> tag not found")))?
        .get_text()
        .ok_or(ValidationErr::XmlError(format!(
            "text of <{tag}> tag not found"
        )))?
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Adds `key` with an empty value to the given query parameters, e.g. the
/// `?versioning` sub-resource.
pub fn insert(data: Option<Multimap>, key: impl Into<String>) -> Multimap {
    let mut result: Multimap = data.unwrap_or_default();
    result.insert(key.into(), String::new());
    result
}
