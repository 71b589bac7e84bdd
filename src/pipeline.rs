//! Flattened text to [`PositionResults`].
//!
//! Parsing one document is a fixed chain of pure string transforms. Each stage
//! lives in its own submodule under `src/pipeline/` and can be exercised on
//! its own:
//!
//! ```text
//! raw text ── Signals::scan ──┐                    (signals.rs)
//!                             v
//!                     normalize_scanned            (normalize.rs)
//!                       - banner, footer, bullets, disclaimer,
//!                         wide gaps, locations, podium, amounts
//!                             │
//!                             v
//!                           tag                    (tag.rs)
//!                       - " < label > " around prize headings
//!                       - "[XX 123456]" around full tickets
//!                       - synthetic " < Series > [X] " before the first label
//!                             │
//!                             v
//!                          split                   (split.rs)
//!                       - Vec<Segment>, or ParseError
//!                             │
//!                             v
//!                         extract                  (extract.rs)
//!                       - series / ticket / numeric passes
//!                             │
//!                             v
//!                      PositionResults
//! ```
//!
//! Nothing here holds state between calls, so documents can be parsed on as
//! many threads as there are documents. The output is deterministic for a
//! given input and [`SeriesDetection`].
//!
//! - `metrics.rs`: optional per-stage timings and intermediate strings used by
//!   verbose runs.

#[path = "pipeline/extract.rs"]
pub mod extract;
#[path = "pipeline/metrics.rs"]
mod metrics;
#[path = "pipeline/normalize.rs"]
pub mod normalize;
#[path = "pipeline/signals.rs"]
pub mod signals;
#[path = "pipeline/split.rs"]
pub mod split;
#[path = "pipeline/tag.rs"]
pub mod tag;

use std::time::Instant;

pub use metrics::{RunResult, RunTrace, StageMetrics};
pub use signals::Signals;

use crate::{ParseError, PositionResults, SeriesDetection};

/// Parse one document without keeping intermediates.
pub fn run(input: &str, detection: SeriesDetection) -> Result<PositionResults, ParseError> {
    let normalized = normalize::normalize_scanned(input, Signals::scan(input));
    let tagged = tag::tag(&normalized, detection);
    let segments = split::split(&tagged.text)?;
    Ok(extract::extract(&segments))
}

/// Parse one document, keeping every intermediate string and stage timing.
pub fn run_with_metrics(input: &str, detection: SeriesDetection) -> Result<RunResult, ParseError> {
    let started = Instant::now();
    let mut metrics = StageMetrics::default();

    let t = Instant::now();
    let signals = Signals::scan(input);
    metrics.scan = t.elapsed();

    let t = Instant::now();
    let normalized = normalize::normalize_scanned(input, signals);
    metrics.normalize = t.elapsed();

    let t = Instant::now();
    let tagged = tag::tag(&normalized, detection);
    metrics.tag = t.elapsed();

    let t = Instant::now();
    let segments = split::split(&tagged.text)?;
    metrics.split = t.elapsed();

    let t = Instant::now();
    let results = extract::extract(&segments);
    metrics.extract = t.elapsed();

    metrics.total = started.elapsed();

    let trace = RunTrace { signals, normalized, tagged: tagged.text, series: tagged.series, segments };
    Ok(RunResult { results, trace, metrics })
}
