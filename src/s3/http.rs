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

//! HTTP URL definitions

use crate::s3::client::DEFAULT_REGION;
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::match_hostname;
use http::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Details extracted from an Amazon S3 endpoint host name.
#[derive(Clone, Debug, Default, PartialEq)]
struct AwsInfo {
    region: String,
    domain_suffix: String,
    dualstack: bool,
}

/// Recognizes `s3.amazonaws.com`, `s3.<region>.amazonaws.com`,
/// `s3-<region>.amazonaws.com` and their dualstack and China variants.
fn get_aws_info(host: &str) -> Result<Option<AwsInfo>, ValidationErr> {
    let lhost = host.to_lowercase();
    let (rest, domain_suffix) = if let Some(r) = lhost.strip_suffix(".amazonaws.com.cn") {
        (r, "amazonaws.com.cn")
    } else if let Some(r) = lhost.strip_suffix(".amazonaws.com") {
        (r, "amazonaws.com")
    } else {
        return Ok(None);
    };

    let Some(after_prefix) = rest.strip_prefix("s3") else {
        return Err(ValidationErr::UrlBuildError(format!(
            "invalid Amazon AWS host {host}"
        )));
    };

    let mut tokens: Vec<&str> = match after_prefix.chars().next() {
        None => Vec::new(),
        Some('.') | Some('-') => after_prefix[1..].split('.').collect(),
        Some(_) => {
            return Err(ValidationErr::UrlBuildError(format!(
                "invalid Amazon AWS host {host}"
            )));
        }
    };

    let dualstack = tokens.first().is_some_and(|t| *t == "dualstack");
    if dualstack {
        tokens.remove(0);
    }

    let region = match tokens.as_slice() {
        [] => String::new(),
        ["external-1"] => DEFAULT_REGION.to_string(),
        [r] if !r.is_empty() => r.to_string(),
        _ => {
            return Err(ValidationErr::UrlBuildError(format!(
                "invalid Amazon AWS host {host}"
            )));
        }
    };

    if domain_suffix.ends_with(".cn") && region.is_empty() {
        return Err(ValidationErr::UrlBuildError(format!(
            "region missing in Amazon S3 China endpoint {host}"
        )));
    }

    Ok(Some(AwsInfo {
        region,
        domain_suffix: domain_suffix.to_string(),
        dualstack,
    }))
}

#[derive(Clone, Debug)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    pub region: String,
    aws_domain_suffix: String,
    pub dualstack: bool,
    pub virtual_style: bool,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use bpset::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.eu-west-1.amazonaws.com".parse().unwrap();
    /// assert!(base_url.is_aws_host());
    /// assert_eq!(base_url.region, "eu-west-1");
    ///
    /// let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    /// assert!(!base_url.is_aws_host());
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let aws = if match_hostname(&host) {
            get_aws_info(&host)?
        } else {
            None
        };

        let (region, aws_domain_suffix, dualstack) = match aws {
            Some(info) => (info.region, info.domain_suffix, info.dualstack),
            None => (String::new(), String::new(), false),
        };

        Ok(BaseUrl {
            https,
            virtual_style: !aws_domain_suffix.is_empty(),
            host,
            port,
            region,
            aws_domain_suffix,
            dualstack,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is AWS host
    pub fn is_aws_host(&self) -> bool {
        !self.aws_domain_suffix.is_empty()
    }

    fn aws_host(&self, region: &str) -> String {
        let mut host = String::from("s3.");
        if self.dualstack {
            host.push_str("dualstack.");
        }
        host.push_str(region);
        host.push('.');
        host.push_str(&self.aws_domain_suffix);
        host
    }

    /// Builds URL from base URL for given parameters for S3 operation
    pub fn build_url(
        &self,
        region: &str,
        query: &Multimap,
        bucket_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        if self.is_aws_host() {
            url.host = self.aws_host(region);
        }

        let Some(bucket) = bucket_name else {
            return Ok(url);
        };

        // GetBucketLocation must be path style; dotted names break TLS
        // certificate validation with virtual hosts.
        let enforce_path_style =
            query.contains_key("location") || (bucket.contains('.') && self.https);

        if enforce_path_style || !self.virtual_style {
            url.path = format!("/{bucket}");
        } else {
            url.host = format!("{bucket}.{}", url.host);
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(key: &str) -> Multimap {
        let mut q = Multimap::new();
        q.add(key, "");
        q
    }

    #[test]
    fn test_parse_aws_endpoints() {
        let b: BaseUrl = "s3.amazonaws.com".parse().unwrap();
        assert!(b.https);
        assert!(b.is_aws_host());
        assert_eq!(b.region, "");

        let b: BaseUrl = "https://s3-us-west-2.amazonaws.com".parse().unwrap();
        assert_eq!(b.region, "us-west-2");

        let b: BaseUrl = "https://s3.dualstack.eu-west-1.amazonaws.com".parse().unwrap();
        assert!(b.dualstack);
        assert_eq!(b.region, "eu-west-1");

        let b: BaseUrl = "https://s3-external-1.amazonaws.com".parse().unwrap();
        assert_eq!(b.region, DEFAULT_REGION);

        let b: BaseUrl = "https://s3.cn-north-1.amazonaws.com.cn".parse().unwrap();
        assert_eq!(b.region, "cn-north-1");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!("ftp://s3.amazonaws.com".parse::<BaseUrl>().is_err());
        assert!("https://s3.amazonaws.com/path".parse::<BaseUrl>().is_err());
        assert!("https://s3.amazonaws.com/?x=1".parse::<BaseUrl>().is_err());
        assert!("https://ec2.amazonaws.com".parse::<BaseUrl>().is_err());
        assert!("https://s3.amazonaws.com.cn".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn test_parse_custom_endpoint() {
        let b: BaseUrl = "http://localhost:9000".parse().unwrap();
        assert!(!b.https);
        assert!(!b.is_aws_host());
        assert!(!b.virtual_style);

        let b: BaseUrl = "https://storage.local:443".parse().unwrap();
        let url = b.build_url(DEFAULT_REGION, &Multimap::new(), None).unwrap();
        assert_eq!(url.to_string(), "https://storage.local/");
    }

    #[test]
    fn test_build_url_aws_virtual_style() {
        let b: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
        let url = b
            .build_url("eu-west-1", &query("versioning"), Some("b1"))
            .unwrap();
        assert_eq!(url.host, "b1.s3.eu-west-1.amazonaws.com");
        assert_eq!(url.path, "/");
        assert_eq!(
            url.to_string(),
            "https://b1.s3.eu-west-1.amazonaws.com/?versioning="
        );
    }

    #[test]
    fn test_build_url_aws_path_style() {
        let b: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();

        let url = b
            .build_url(DEFAULT_REGION, &query("location"), Some("b1"))
            .unwrap();
        assert_eq!(url.host, "s3.us-east-1.amazonaws.com");
        assert_eq!(url.path, "/b1");

        let url = b
            .build_url(DEFAULT_REGION, &query("versioning"), Some("my.bucket"))
            .unwrap();
        assert_eq!(url.path, "/my.bucket");
    }

    #[test]
    fn test_build_url_list_buckets() {
        let b: BaseUrl = "http://localhost:9000".parse().unwrap();
        let url = b.build_url(DEFAULT_REGION, &Multimap::new(), None).unwrap();
        assert_eq!(url.to_string(), "http://localhost:9000/");
        assert_eq!(url.host_header_value(), "localhost:9000");

        let url = b
            .build_url(DEFAULT_REGION, &query("versioning"), Some("b1"))
            .unwrap();
        assert_eq!(url.to_string(), "http://localhost:9000/b1?versioning=");
    }
}
