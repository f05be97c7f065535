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

//! Settings of the `bpset` binary, read from the environment.

use crate::s3::creds::StaticProvider;
use crate::s3::error::Error;
use crate::s3::http::BaseUrl;
use crate::s3::{S3Client, S3ClientBuilder};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_SERVER_ENDPOINT: &str = "https://s3.amazonaws.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing credentials: set ACCESS_KEY and SECRET_KEY (or AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY)")]
    MissingCredentials,

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unable to create S3 client: {0}")]
    Client(#[from] Error),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String,
    pub region: Option<String>,
    pub access_key: String,
    pub secret_key: String,
    pub session_token: Option<String>,
    /// Overrides the scheme of `endpoint` when set.
    pub enable_https: Option<bool>,
    pub ssl_cert_file: Option<PathBuf>,
    pub ignore_cert_check: Option<bool>,
    /// Run the check only.
    pub skip_fix: bool,
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let get_or = |key: &str, fallback: &str| get(key).or_else(|| get(fallback));
        let get_bool = |key: &'static str| get(key).map(|v| parse_bool(key, v)).transpose();

        let endpoint = get("SERVER_ENDPOINT").unwrap_or(DEFAULT_SERVER_ENDPOINT.to_string());
        log::debug!("SERVER_ENDPOINT={endpoint}");
        let region = get("SERVER_REGION");
        log::debug!("SERVER_REGION={region:?}");

        let (access_key, secret_key) = match (
            get_or("ACCESS_KEY", "AWS_ACCESS_KEY_ID"),
            get_or("SECRET_KEY", "AWS_SECRET_ACCESS_KEY"),
        ) {
            (Some(a), Some(s)) => (a, s),
            _ => return Err(ConfigError::MissingCredentials),
        };
        log::debug!("ACCESS_KEY={access_key}");
        log::debug!("SECRET_KEY=*****");

        Ok(Config {
            endpoint,
            region,
            access_key,
            secret_key,
            session_token: get_or("SESSION_TOKEN", "AWS_SESSION_TOKEN"),
            enable_https: get_bool("ENABLE_HTTPS")?,
            ssl_cert_file: get("SSL_CERT_FILE").map(PathBuf::from),
            ignore_cert_check: get_bool("IGNORE_CERT_CHECK")?,
            skip_fix: get_bool("BPSET_SKIP_FIX")?.unwrap_or(false),
        })
    }

    pub fn base_url(&self) -> Result<BaseUrl, ConfigError> {
        let mut base_url: BaseUrl = self.endpoint.parse().map_err(Error::from)?;
        if let Some(https) = self.enable_https {
            base_url.https = https;
        }
        if let Some(region) = &self.region {
            base_url.region = region.clone();
        }
        Ok(base_url)
    }

    pub fn build_client(&self) -> Result<S3Client, ConfigError> {
        let provider = StaticProvider::new(
            &self.access_key,
            &self.secret_key,
            self.session_token.as_deref(),
        );
        Ok(S3ClientBuilder::new(self.base_url()?)
            .provider(Some(provider))
            .ssl_cert_file(self.ssl_cert_file.as_deref())
            .ignore_cert_check(self.ignore_cert_check)
            .app_info(Some(("bpset-cli".into(), env!("CARGO_PKG_VERSION").into())))
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[("ACCESS_KEY", "a"), ("SECRET_KEY", "s")]).unwrap();
        assert_eq!(c.endpoint, DEFAULT_SERVER_ENDPOINT);
        assert_eq!(c.region, None);
        assert!(!c.skip_fix);
        assert!(c.base_url().unwrap().is_aws_host());
    }

    #[test]
    fn test_aws_fallback_and_missing_credentials() {
        let c = config(&[
            ("AWS_ACCESS_KEY_ID", "a"),
            ("AWS_SECRET_ACCESS_KEY", "s"),
            ("AWS_SESSION_TOKEN", "t"),
        ])
        .unwrap();
        assert_eq!(c.access_key, "a");
        assert_eq!(c.session_token.as_deref(), Some("t"));

        assert!(matches!(
            config(&[("ACCESS_KEY", "a")]),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            config(&[("ACCESS_KEY", "a"), ("SECRET_KEY", "")]),
            Err(ConfigError::MissingCredentials)
        ));
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("ACCESS_KEY", "a"),
            ("SECRET_KEY", "s"),
            ("SERVER_ENDPOINT", "https://storage.local:9000"),
            ("ENABLE_HTTPS", "false"),
            ("SERVER_REGION", "eu-west-1"),
            ("BPSET_SKIP_FIX", "1"),
        ])
        .unwrap();
        assert!(c.skip_fix);
        let base_url = c.base_url().unwrap();
        assert!(!base_url.https);
        assert_eq!(base_url.region, "eu-west-1");
        assert!(c.build_client().is_ok());

        assert!(matches!(
            config(&[("ACCESS_KEY", "a"), ("SECRET_KEY", "s"), ("ENABLE_HTTPS", "maybe")]),
            Err(ConfigError::InvalidValue { name: "ENABLE_HTTPS", .. })
        ));
    }
}
