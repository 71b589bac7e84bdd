use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pipeline;
use crate::{ParseError, PositionResults, Segment};

/// How the series letter of a draw is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesDetection {
    /// Only an explicit bracketed single letter (`[A]`) counts.
    #[default]
    BracketedLetter,
    /// As above, falling back to the first letter of the first full ticket.
    FirstTicketPrefix,
}

/// Options that affect parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub series: SeriesDetection,
}

/// Stage-by-stage view of one parse, returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Layout artifacts found by the input scan.
    pub signals: Vec<&'static str>,
    pub normalized: String,
    pub tagged: String,
    pub series: Option<char>,
    pub segments: Vec<Segment>,
    pub total: Duration,
    pub scan: Duration,
    pub normalize: Duration,
    pub tag: Duration,
    pub split: Duration,
    pub extract: Duration,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub results: PositionResults,
    pub details: ParseDetails,
}

/// Parse one flattened document with default [`Options`].
///
/// # Example
/// ```
/// let results = lottoscan::parse("1st Prize [C] CA 100200 4th Prize 12345678").unwrap();
/// assert_eq!(results["Series"], vec!["C", "C"]);
/// assert_eq!(results["1st Prize"], vec!["CA 100200"]);
/// assert_eq!(results["4th Prize"], vec!["1234", "5678"]);
/// ```
pub fn parse(text: &str) -> Result<PositionResults, ParseError> {
    parse_with(text, &Options::default())
}

pub fn parse_with(text: &str, options: &Options) -> Result<PositionResults, ParseError> {
    pipeline::run(text, options.series)
}

/// Parse `text` and keep every intermediate stage for inspection.
///
/// The default [`parse_with`] path does not allocate these extra traces.
pub fn parse_verbose_with(text: &str, options: &Options) -> Result<ParseResultVerbose, ParseError> {
    let run = pipeline::run_with_metrics(text, options.series)?;

    let details = ParseDetails {
        signals: run.trace.signals.names(),
        normalized: run.trace.normalized,
        tagged: run.trace.tagged,
        series: run.trace.series,
        segments: run.trace.segments,
        total: run.metrics.total,
        scan: run.metrics.scan,
        normalize: run.metrics.normalize,
        tag: run.metrics.tag,
        split: run.metrics.split,
        extract: run.metrics.extract,
    };

    Ok(ParseResultVerbose { text: text.to_string(), results: run.results, details })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "1st Prize-Rs :7000000/- [A] AB 123456 Cons Prize-Rs :8000/- AC 123456 1234";

    #[test]
    fn parse_is_deterministic() {
        let first = parse(PAGE).unwrap();
        for _ in 0..5 {
            assert_eq!(parse(PAGE).unwrap(), first);
        }
    }

    #[test]
    fn verbose_matches_plain_parse() {
        let res = parse_verbose_with(PAGE, &Options::default()).unwrap();
        assert_eq!(res.text, PAGE);
        assert_eq!(res.results, parse(PAGE).unwrap());
        assert_eq!(res.details.series, Some('A'));
        assert_eq!(res.details.segments.first().map(|s| s.position.as_str()), Some("Series"));
        assert!(res.details.signals.contains(&"AMOUNTS"));
        assert!(res.details.total >= res.details.split);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.series, SeriesDetection::BracketedLetter);
        let opts: Options = serde_json::from_str(r#"{"series":"first_ticket_prefix"}"#).unwrap();
        assert_eq!(opts.series, SeriesDetection::FirstTicketPrefix);
    }
}
