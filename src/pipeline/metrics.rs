//! Pipeline run metrics.
//!
//! `pipeline::run` collects only what it needs to produce results;
//! `pipeline::run_with_metrics` additionally keeps every intermediate string
//! and per-stage timings so a misparsed document can be inspected stage by
//! stage.

use std::time::Duration;

use super::signals::Signals;
use crate::{PositionResults, Segment};

/// Elapsed time per stage.
#[derive(Debug, Default, Clone)]
pub struct StageMetrics {
    pub total: Duration,
    pub scan: Duration,
    pub normalize: Duration,
    pub tag: Duration,
    pub split: Duration,
    pub extract: Duration,
}

/// Everything a verbose run leaves behind.
#[derive(Debug, Clone)]
pub struct RunTrace {
    pub signals: Signals,
    pub normalized: String,
    pub tagged: String,
    pub series: Option<char>,
    pub segments: Vec<Segment>,
}

/// Pipeline output bundled with its trace and timings.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub results: PositionResults,
    pub trace: RunTrace,
    pub metrics: StageMetrics,
}
