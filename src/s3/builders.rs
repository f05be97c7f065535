// BPSet: best-practice compliance checks for Amazon S3
// Copyright 2024 MinIO, Inc.
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

//! Argument builders for the S3 APIs used by the compliance checks.

mod bucket_common;
mod get_bucket_versioning;
mod get_region;
mod list_buckets;
mod put_bucket_versioning;

pub use bucket_common::*;
pub use get_bucket_versioning::*;
pub use get_region::*;
pub use list_buckets::*;
pub use put_bucket_versioning::*;
