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

//! Validated wrapper types for S3 API parameters

use crate::s3::error::ValidationErr;
use crate::s3::utils::check_bucket_name;
use std::fmt;
use std::str::FromStr;

/// A validated S3 bucket name.
///
/// Names are checked with the relaxed S3 rules, so buckets created before the
/// strict naming rules (uppercase, underscores) can still be inspected.
///
/// # Example
///
/// ```
/// use bpset::s3::types::BucketName;
///
/// let bucket = BucketName::new("my-bucket").unwrap();
/// assert_eq!(bucket.as_str(), "my-bucket");
/// assert!(BucketName::new("ab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationErr> {
        let name = name.into();
        check_bucket_name(&name, false)?;
        Ok(Self(name))
    }

    /// Wraps a name the server itself reported, e.g. in a ListBuckets result.
    /// Such names are not re-validated.
    pub(crate) fn from_listing(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BucketName {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BucketName {
    type Error = ValidationErr;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for BucketName {
    type Error = ValidationErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&String> for BucketName {
    type Error = ValidationErr;

    fn try_from(s: &String) -> Result<Self, Self::Error> {
        Self::new(s.as_str())
    }
}

/// A region name such as `us-east-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        Self(s)
    }
}
