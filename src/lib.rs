//! Recover prize tables from flattened lottery result documents and check
//! tickets against them.
//!
//! The crate is a chain of pure string transforms (see [`pipeline`]) that turn
//! one document's flattened text into a [`PositionResults`] map, plus a
//! [`matcher`] that answers which tickets won and a [`refresh`] layer that
//! rebuilds the published [`LotteryResults`] snapshot from many documents.
//!
//! ```
//! let text = "1st Prize-Rs :7000000/- AB 123456 Cons Prize-Rs :8000/- 4567";
//! let results = lottoscan::parse(text).unwrap();
//! assert_eq!(results["1st Prize"], vec!["AB 123456"]);
//! assert_eq!(results["Cons Prize"], vec!["4567"]);
//! ```

extern crate self as lottoscan;

use std::collections::BTreeMap;

#[macro_use]
mod macros;
mod api;
mod error;
pub mod matcher;
pub mod pipeline;
pub mod refresh;

pub use api::{Options, ParseDetails, ParseResultVerbose, SeriesDetection, parse, parse_verbose_with, parse_with};
pub use error::{DocumentError, ParseError, RefreshError, RenderError, SourceError};
pub use matcher::{match_all, match_by_lottery, match_tickets};
pub use refresh::{
    DocumentRef, LotteryResults, PlainTextRenderer, RefreshConfig, Refresher, Renderer, ResultSource, ResultsStore,
};

/// Label of the pseudo-position holding the draw's series letter.
pub const SERIES: &str = "Series";

/// Winning values keyed by position label.
///
/// Values are kept in extraction order and are not deduplicated. Under
/// [`SERIES`] every value is a single uppercase letter; no other label ever
/// holds one.
pub type PositionResults = BTreeMap<String, Vec<String>>;

/// Tickets from a caller's list keyed by the position they won at.
pub type WinningTickets = BTreeMap<String, Vec<String>>;

/// One `label > payload` unit cut out of a tagged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position label, trimmed (`"1st Prize"`, `"Cons Prize"`, `"Series"`).
    pub position: String,
    /// Unparsed text following the label up to the next label, trimmed.
    pub payload: String,
}

impl Segment {
    pub fn new(position: impl Into<String>, payload: impl Into<String>) -> Self {
        Self { position: position.into(), payload: payload.into() }
    }
}
