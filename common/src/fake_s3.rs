// BPSet: best-practice compliance checks for Amazon S3
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

//! In-memory stand-in for the S3 versioning calls.

use async_trait::async_trait;
use bpset::bpset::VersioningApi;
use bpset::s3::error::{Error, S3ServerError};
use bpset::s3::s3_error_response::{S3ErrorCode, S3ErrorResponse};
use bpset::s3::types::VersioningStatus;
use http::HeaderMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    /// bucket name and versioning status, in listing order
    buckets: Vec<(String, Option<VersioningStatus>)>,
    list_calls: usize,
    get_calls: usize,
    put_calls: usize,
    fail_list: Option<String>,
    /// 1-based call number and message
    fail_get: Option<(usize, String)>,
    fail_put: Option<(usize, String)>,
}

/// Buckets kept in memory, with call counters and fault injection.
#[derive(Debug, Default)]
pub struct FakeS3 {
    state: Mutex<State>,
}

fn s3_error(code: S3ErrorCode, message: &str, bucket: Option<&str>) -> Error {
    Error::S3Server(S3ServerError::S3Error(Box::new(S3ErrorResponse::new(
        HeaderMap::new(),
        code,
        Some(message.to_string()),
        bucket.map(|b| format!("/{b}")).unwrap_or_default(),
        String::new(),
        String::new(),
        bucket.map(String::from),
    ))))
}

fn injected(message: &str, bucket: Option<&str>) -> Error {
    log::info!("injecting fault ({}): {message}", bucket.unwrap_or("<list>"));
    s3_error(
        S3ErrorCode::OtherError("InternalError".into()),
        message,
        bucket,
    )
}

impl FakeS3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buckets<I, S>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<VersioningStatus>)>,
        S: Into<String>,
    {
        let fake = Self::new();
        for (name, status) in buckets {
            fake.add_bucket(name, status);
        }
        fake
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn add_bucket(&self, name: impl Into<String>, status: Option<VersioningStatus>) {
        self.state().buckets.push((name.into(), status));
    }

    /// Changes a bucket behind the checker's back.
    pub fn set_versioning(&self, name: &str, status: Option<VersioningStatus>) {
        if let Some(b) = self.state().buckets.iter_mut().find(|(n, _)| n == name) {
            b.1 = status;
        }
    }

    pub fn versioning(&self, name: &str) -> Option<VersioningStatus> {
        self.state()
            .buckets
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, s)| *s)
    }

    pub fn fail_list(&self, message: &str) {
        log::debug!("ListBuckets will fail: {message}");
        self.state().fail_list = Some(message.to_string());
    }

    /// Makes the `n`-th GetBucketVersioning call (1-based) fail.
    pub fn fail_get_on_call(&self, n: usize, message: &str) {
        log::debug!("GetBucketVersioning call {n} will fail: {message}");
        self.state().fail_get = Some((n, message.to_string()));
    }

    /// Makes the `n`-th PutBucketVersioning call (1-based) fail.
    pub fn fail_put_on_call(&self, n: usize, message: &str) {
        log::debug!("PutBucketVersioning call {n} will fail: {message}");
        self.state().fail_put = Some((n, message.to_string()));
    }

    pub fn list_calls(&self) -> usize {
        self.state().list_calls
    }

    pub fn get_calls(&self) -> usize {
        self.state().get_calls
    }

    pub fn put_calls(&self) -> usize {
        self.state().put_calls
    }

    pub fn total_calls(&self) -> usize {
        let s = self.state();
        s.list_calls + s.get_calls + s.put_calls
    }
}

#[async_trait]
impl VersioningApi for FakeS3 {
    async fn list_buckets(&self) -> Result<Vec<String>, Error> {
        let mut s = self.state();
        s.list_calls += 1;
        if let Some(message) = &s.fail_list {
            return Err(injected(message, None));
        }
        Ok(s.buckets.iter().map(|(n, _)| n.clone()).collect())
    }

    async fn get_bucket_versioning(
        &self,
        bucket: &str,
    ) -> Result<Option<VersioningStatus>, Error> {
        let mut s = self.state();
        s.get_calls += 1;
        if let Some((n, message)) = &s.fail_get
            && *n == s.get_calls
        {
            return Err(injected(message, Some(bucket)));
        }
        match s.buckets.iter().find(|(n, _)| n == bucket) {
            Some((_, status)) => Ok(*status),
            None => Err(s3_error(
                S3ErrorCode::NoSuchBucket,
                "The specified bucket does not exist",
                Some(bucket),
            )),
        }
    }

    async fn put_bucket_versioning(
        &self,
        bucket: &str,
        status: VersioningStatus,
    ) -> Result<(), Error> {
        let mut s = self.state();
        s.put_calls += 1;
        if let Some((n, message)) = &s.fail_put
            && *n == s.put_calls
        {
            return Err(injected(message, Some(bucket)));
        }
        match s.buckets.iter_mut().find(|(n, _)| n == bucket) {
            Some(b) => {
                b.1 = Some(status);
                Ok(())
            }
            None => Err(s3_error(
                S3ErrorCode::NoSuchBucket,
                "The specified bucket does not exist",
                Some(bucket),
            )),
        }
    }
}
