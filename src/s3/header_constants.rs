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

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const HOST: &str = "Host";

pub const X_AMZ_BUCKET_REGION: &str = "x-amz-bucket-region";
pub const X_AMZ_CONTENT_SHA256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_ID_2: &str = "x-amz-id-2";
pub const X_AMZ_REQUEST_ID: &str = "x-amz-request-id";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
