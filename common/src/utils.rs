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

use http::{Response as HttpResponse, StatusCode};
use rand::distr::{Alphanumeric, SampleString};

pub fn rand_bucket_name() -> String {
    format!(
        "bpset-{}",
        Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
    )
}

pub fn get_response_from_bytes(bytes: bytes::Bytes) -> reqwest::Response {
    let http_response = HttpResponse::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/xml")
        .body(bytes)
        .expect("Failed to build HTTP response");

    reqwest::Response::from(http_response)
}
