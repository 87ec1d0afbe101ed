//! Combination output artifacts (plot-friendly JSON, numbers-first).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use sysmc_core::Result;

use crate::histogram::Histogram;

/// Top-level artifact for one combination run.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationArtifact {
    pub schema_version: String,
    pub meta: CombinationMeta,
    pub datasets: Vec<DatasetArtifact>,
}

/// Run-level metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationMeta {
    pub tool: String,
    pub tool_version: String,
    pub n_toys: usize,
    pub seed: u64,
    pub corr_mode: String,
    pub uncorr_mode: String,
    pub created_unix_ms: u128,
}

/// One (dataset, variant) reduced distribution.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetArtifact {
    pub dataset: String,
    pub variant: String,
    pub n_components: usize,
    pub histogram: Histogram,
    pub mode: f64,
    pub mean: f64,
    pub rms: f64,
}

pub(crate) fn now_unix_ms() -> Result<u128> {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| sysmc_core::Error::Computation(format!("system time error: {}", e)))?;
    Ok(d.as_millis())
}
