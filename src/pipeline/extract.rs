//! Number extractor.
//!
//! Three independent passes run over every segment payload and append to the
//! same [`PositionResults`]:
//!
//! 1. series letters: `[A]`, always filed under [`SERIES`]
//! 2. bracketed full tickets: `[AB 123456]` -> `"AB 123456"`
//! 3. bare digit runs, with the bracketed tickets cut out first; runs longer
//!    than four digits are chunked left to right (`12345678` -> `1234`, `5678`)
//!
//! Nothing is deduplicated: a number printed twice is recorded twice.

use crate::{PositionResults, SERIES, Segment};

const CHUNK: usize = 4;

pub fn extract(segments: &[Segment]) -> PositionResults {
    let mut results = PositionResults::new();
    for segment in segments {
        add_series_matches(&mut results, &segment.payload);
        add_ticket_matches(&mut results, &segment.position, &segment.payload);
        add_numeric_matches(&mut results, &segment.position, &segment.payload);
    }
    results
}

fn push(results: &mut PositionResults, position: &str, value: String) {
    match results.get_mut(position) {
        Some(values) => values.push(value),
        None => {
            results.insert(position.to_string(), vec![value]);
        }
    }
}

fn add_series_matches(results: &mut PositionResults, payload: &str) {
    for caps in regex!(r"\[([A-Z])\]").captures_iter(payload) {
        push(results, SERIES, caps[1].to_string());
    }
}

fn add_ticket_matches(results: &mut PositionResults, position: &str, payload: &str) {
    for caps in regex!(r"\[([A-Z]+ [0-9]+)\]").captures_iter(payload) {
        push(results, position, caps[1].to_string());
    }
}

fn add_numeric_matches(results: &mut PositionResults, position: &str, payload: &str) {
    let bare = regex!(r"\[[A-Z]+ [0-9]+\]").replace_all(payload, "");
    for run in regex!(r"[0-9]+").find_iter(&bare) {
        for chunk in chunk_digits(run.as_str()) {
            push(results, position, chunk.to_string());
        }
    }
}

/// Split an ASCII digit run into consecutive 4-digit pieces; the last piece
/// keeps whatever is left over.
pub fn chunk_digits(run: &str) -> impl Iterator<Item = &str> {
    let bytes = run.len();
    (0..bytes).step_by(CHUNK).map(move |start| &run[start..(start + CHUNK).min(bytes)])
}
