//! Segment splitter.
//!
//! Cuts tagged text on `<` and separates each fragment into a position label
//! (before the first `>`) and its payload (after it).
//!
//! ```text
//! " < Series > [A]  < 1st Prize >  [AB 123456] "
//!    ^^^^^^^^^^^^^    ^^^^^^^^^^^^^^^^^^^^^^^^
//!    Segment{Series, "[A]"}   Segment{1st Prize, "[AB 123456]"}
//! ```
//!
//! Fragments that trim to nothing are dropped. Text before the first `<`
//! carries no label and is dropped as preamble unless it has a `>` of its own.
//! Any fragment that follows a `<` must contain a `>`; one that doesn't means
//! tagging went wrong and the whole document is rejected.

use tracing::debug;

use crate::{ParseError, Segment};

pub fn split(tagged: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();

    for (index, part) in tagged.split('<').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        match part.split_once('>') {
            Some((position, payload)) => segments.push(Segment::new(position.trim(), payload.trim())),
            None if index == 0 => debug!(preamble = %part, "dropping unlabelled leading text"),
            None => return Err(ParseError::UnterminatedLabel { index, fragment: part.to_string() }),
        }
    }

    Ok(segments)
}
