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

use bpset::bpset::{BpSet, RunStatus, S3BucketVersioning};
use bpset::config::Config;
use serde_json::json;
use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher

    let config = Config::from_env()?;
    let client = config.build_client()?;
    let mut bp = S3BucketVersioning::new(Arc::new(client));

    let mut failed = false;
    match bp.check().await {
        Ok(()) => log::info!(
            "check finished: {} non-compliant bucket(s)",
            bp.stats().non_compliant_resources.len()
        ),
        Err(e) => {
            log::error!("check failed: {e}");
            failed = true;
        }
    }
    let check_stats = bp.stats().clone();

    let run_fix = !failed && !config.skip_fix;
    if run_fix {
        let non_compliant = check_stats.non_compliant_resources.clone();
        if !non_compliant.is_empty() {
            log::info!("{}", bp.metadata().fix_advisory);
        }
        if let Err(e) = bp.fix(&non_compliant, &HashMap::new()).await {
            log::error!("fix failed: {e}");
        }
        failed = bp.stats().status == RunStatus::Error;
    }

    let report = json!({
        "metadata": bp.metadata(),
        "check": check_stats,
        "fix": run_fix.then(|| bp.stats().clone()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
