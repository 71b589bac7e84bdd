//! Rebuilding the published results from many documents.
//!
//! A refresh lists the available result documents, fans out one task per
//! document (fetch, render, parse), joins them all and publishes a new
//! [`LotteryResults`] snapshot if at least one document parsed. Failures are
//! isolated per document; a refresh where nothing parsed leaves the previous
//! snapshot in place.
//!
//! - `source.rs`: the collaborator seams (listing, download, rendering).
//! - `snapshot.rs`: the snapshot value and its atomically swapped store.
//! - `refresher.rs`: the fan-out/fan-in refresh itself.

#[path = "refresh/refresher.rs"]
mod refresher;
#[path = "refresh/snapshot.rs"]
mod snapshot;
#[path = "refresh/source.rs"]
mod source;

use serde::{Deserialize, Serialize};

pub use refresher::Refresher;
pub use snapshot::{LotteryResults, ResultsStore};
pub use source::{DocumentRef, PlainTextRenderer, Renderer, ResultSource};

use crate::Options;

/// Format of [`DocumentRef::date`] in published listings.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Refresh settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Upper bound on documents processed at once; values below 1 act as 1.
    pub max_concurrent: usize,
    /// `chrono` format string for listing dates.
    pub date_format: String,
    /// Parse options applied to every document.
    pub options: Options,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            options: Options::default(),
        }
    }
}
