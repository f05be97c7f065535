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

//! Run bookkeeping shared by every BPSet.

use crate::bpset::error::OperationFailure;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the current (or last) run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    #[default]
    Loaded,
    Checking,
    Finished,
    Error,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunStatus::Loaded => "LOADED",
            RunStatus::Checking => "CHECKING",
            RunStatus::Finished => "FINISHED",
            RunStatus::Error => "ERROR",
        })
    }
}

/// One entry of the error log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl From<&OperationFailure> for ErrorRecord {
    fn from(f: &OperationFailure) -> Self {
        Self {
            timestamp: f.timestamp,
            message: f.message.clone(),
        }
    }
}

/// Snapshot of a BPSet run.
///
/// Resource lists keep discovery order and are replaced on every completed
/// check. The error log accumulates until [`StatsTracker::clear_stats`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRun {
    pub status: RunStatus,
    pub compliant_resources: Vec<String>,
    pub non_compliant_resources: Vec<String>,
    pub error_message: Vec<ErrorRecord>,
}

/// Holds the [`ComplianceRun`] of one BPSet.
///
/// There is no locking; mutation goes through `&mut self`, so the borrow
/// checker serializes runs on the same tracker.
#[derive(Clone, Debug, Default)]
pub struct StatsTracker {
    run: ComplianceRun,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ComplianceRun {
        &self.run
    }

    /// Resets to [`RunStatus::Loaded`] with empty lists and an empty error log.
    pub fn clear_stats(&mut self) {
        self.run = ComplianceRun::default();
    }

    /// Marks the start of a check or fix.
    pub fn start(&mut self) {
        self.run.status = RunStatus::Checking;
    }

    /// Replaces both resource lists with the outcome of a check.
    pub fn complete_check(&mut self, compliant: Vec<String>, non_compliant: Vec<String>) {
        self.run.compliant_resources = compliant;
        self.run.non_compliant_resources = non_compliant;
        self.run.status = RunStatus::Finished;
    }

    pub fn complete(&mut self) {
        self.run.status = RunStatus::Finished;
    }

    /// Drops the resource lists so a failed check leaves no stale data behind.
    pub fn discard_results(&mut self) {
        self.run.compliant_resources.clear();
        self.run.non_compliant_resources.clear();
    }

    /// Records `failure` in the error log and moves to [`RunStatus::Error`].
    /// The failure is handed back so callers can return it.
    pub fn fail(&mut self, failure: OperationFailure) -> OperationFailure {
        log::warn!("run failed: {failure}");
        self.run.error_message.push(ErrorRecord::from(&failure));
        self.run.status = RunStatus::Error;
        failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arns(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| format!("arn:aws:s3:::{n}")).collect()
    }

    #[test]
    fn test_new_tracker_is_loaded() {
        let t = StatsTracker::new();
        assert_eq!(t.stats().status, RunStatus::Loaded);
        assert_eq!(t.stats(), &ComplianceRun::default());
    }

    #[test]
    fn test_check_lifecycle() {
        let mut t = StatsTracker::new();
        t.start();
        assert_eq!(t.stats().status, RunStatus::Checking);

        t.complete_check(arns(&["a"]), arns(&["b", "c"]));
        assert_eq!(t.stats().status, RunStatus::Finished);
        assert_eq!(t.stats().non_compliant_resources, arns(&["b", "c"]));

        // a new run replaces, never accumulates
        t.start();
        t.complete_check(arns(&["b"]), vec![]);
        assert_eq!(t.stats().compliant_resources, arns(&["b"]));
        assert!(t.stats().non_compliant_resources.is_empty());
    }

    #[test]
    fn test_failure_is_logged() {
        let mut t = StatsTracker::new();
        t.start();
        t.complete_check(arns(&["a"]), arns(&["b"]));
        t.start();
        t.discard_results();
        let f = t.fail(OperationFailure::new("boom"));

        assert_eq!(f.message, "boom");
        assert_eq!(t.stats().status, RunStatus::Error);
        assert!(t.stats().compliant_resources.is_empty());
        assert_eq!(t.stats().error_message.len(), 1);
        assert_eq!(t.stats().error_message[0].message, "boom");
        assert_eq!(t.stats().error_message[0].timestamp, f.timestamp);

        // error log survives later runs
        t.start();
        t.complete();
        assert_eq!(t.stats().status, RunStatus::Finished);
        assert_eq!(t.stats().error_message.len(), 1);
    }

    #[test]
    fn test_status_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&RunStatus::Finished).unwrap(), "\"FINISHED\"");
        assert_eq!(RunStatus::Checking.to_string(), "CHECKING");
    }

    quickcheck! {
        fn prop_clear_always_resets(ops: Vec<u8>) -> bool {
            let mut t = StatsTracker::new();
            for op in ops {
                match op % 4 {
                    0 => t.start(),
                    1 => t.complete_check(arns(&["x"]), arns(&["y"])),
                    2 => { t.fail(OperationFailure::new("e")); }
                    _ => t.complete(),
                }
            }
            t.clear_stats();
            t.stats() == &ComplianceRun::default()
        }
    }
}
