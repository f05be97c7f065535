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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(url_encode(key))
                .or_default()
                .extend(values.iter().map(|v| url_encode(v)));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                query.push('=');
                query.push_str(&value);
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<String> = values.iter().map(|v| collapse_spaces(v)).collect();
            vs.sort();
            btmap.insert(key, vs.join(","));
        }

        let signed_headers: Vec<&str> = btmap.keys().map(String::as_str).collect();
        let canonical_headers: Vec<String> =
            btmap.iter().map(|(k, v)| format!("{k}:{v}")).collect();

        (signed_headers.join(";"), canonical_headers.join("\n"))
    }
}

/// Trims a header value and collapses runs of spaces into a single space.
fn collapse_spaces(s: &str) -> String {
    s.split(' ')
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
