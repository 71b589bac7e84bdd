//! Segment tagger.
//!
//! Turns the undelimited normalized stream into `label > payload` units by
//! wrapping every position label in ` < label > `, and marks complete tickets
//! with square brackets so the extractor can tell `[AB 123456]` apart from a
//! bare 4-digit fragment sitting next to it.
//!
//! When a series letter is found, a synthetic ` < Series > [X] ` segment is
//! inserted just before the first position label so the series always lands
//! in its own segment, wherever the letter sat in the source layout. Text
//! ahead of the first label stays in front of it and is dropped by the
//! splitter as preamble.

use std::borrow::Cow;

use crate::{SERIES, SeriesDetection};

/// Output of [`tag`]: the delimited text and the series letter it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    pub text: String,
    pub series: Option<char>,
}

pub fn tag(input: &str, detection: SeriesDetection) -> Tagged {
    let labelled = tag_positions(input);
    let tagged = tag_tickets(&labelled).into_owned();

    match detect_series(&tagged, detection) {
        Some(letter) => Tagged { text: insert_series(&tagged, letter), series: Some(letter) },
        None => Tagged { text: tagged, series: None },
    }
}

/// Wrap ordinal prize headings and the consolation marker as ` < label > `.
pub fn tag_positions(input: &str) -> Cow<'_, str> {
    regex!(
        r"\b(?:[0-9]{1,2}(?:st|nd|rd|th)|First|Second|Third|Fourth|Fifth|Sixth|Seventh|Eighth|Ninth|Tenth) Prize\b|\bCons(?:olation)?(?: Prize)?\b"
    )
    .replace_all(input, " < ${0} > ")
}

/// Bracket every `XX 123456` full ticket.
pub fn tag_tickets(input: &str) -> Cow<'_, str> {
    regex!(r"[A-Z]{2} [0-9]{6}").replace_all(input, "[${0}]")
}

/// Find the draw's series letter in tagged text.
///
/// A bracketed single uppercase letter always wins. With
/// [`SeriesDetection::FirstTicketPrefix`] the first letter of the first
/// bracketed full ticket is used when no such token exists.
pub fn detect_series(tagged: &str, detection: SeriesDetection) -> Option<char> {
    let explicit = regex!(r"\[([A-Z])\]").captures(tagged).and_then(|c| c[1].chars().next());

    match detection {
        SeriesDetection::BracketedLetter => explicit,
        SeriesDetection::FirstTicketPrefix => explicit.or_else(|| {
            regex!(r"\[([A-Z])[A-Z]* [0-9]+\]").captures(tagged).and_then(|c| c[1].chars().next())
        }),
    }
}

/// Put the synthetic series segment ahead of the first ` < ` label, or at the
/// end when the text has no label at all.
pub fn insert_series(tagged: &str, letter: char) -> String {
    let (preamble, labelled) = tagged.split_at(tagged.find(" < ").unwrap_or(tagged.len()));
    format!("{preamble} < {SERIES} > [{letter}] {labelled}")
}
