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

use crate::s3::error::ValidationErr;
use crate::s3::types::BucketName;
use crate::s3::utils::UtcTime;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Contains the bucket name and creation date
pub struct Bucket {
    pub name: BucketName,
    pub creation_date: UtcTime,
}

/// Represents the versioning state of an S3 bucket.
///
/// A bucket that never had versioning configured reports no status at all;
/// that case is modelled as `Option::<VersioningStatus>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VersioningStatus {
    /// Object versioning is enabled for the bucket.
    Enabled,
    /// Object versioning is suspended for the bucket.
    Suspended,
}

impl VersioningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersioningStatus::Enabled => "Enabled",
            VersioningStatus::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for VersioningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersioningStatus {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(VersioningStatus::Enabled),
            "Suspended" => Ok(VersioningStatus::Suspended),
            other => Err(ValidationErr::InvalidVersioningStatus(other.to_owned())),
        }
    }
}
