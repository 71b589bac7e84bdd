//! Token normalizer.
//!
//! Strips layout noise from a flattened document so the stream starts at the
//! first position label and carries only labels, numbers and full tickets.
//! Every pass is a plain `&str -> Cow<str>` rewrite; [`PASSES`] fixes their
//! order, which matters: banner removal must run first because the later
//! passes assume the text begins at the first label, and the wide-gap pass
//! must run after the removals that leave double spaces behind.
//!
//! The chain is repeated until the text stops changing. Location and podium
//! removals run after the wide-gap pass and can open a new gap, and an earlier
//! deletion can assemble a marker that was not in the raw text, so a single
//! round is not a fixed point. Every pass only deletes, so the loop ends.
//!
//! ```text
//! (1) banner       KERALA ... 1st        -> 1st
//!                  KERALA ... First Prize -> First Prize
//! (2) footer       Page N  IT Support ... -> ""
//! (3) bullets      1)  12)                -> ""
//! (4) disclaimer   The prize winner...$   -> ""
//! (5) wide gaps    "  x "                 -> ""
//! (6) locations    (KOLLAM)               -> ""
//! (7) podium       FOR ... NUMBERS        -> ""
//! (8) amounts      -Rs :5000/-            -> ""
//! ```

use std::borrow::Cow;

use super::signals::Signals;

/// A single normalization rewrite and the signals that can make it fire.
pub struct Pass {
    pub name: &'static str,
    pub trigger: Signals,
    pub apply: fn(&str) -> Cow<'_, str>,
}

impl std::fmt::Debug for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name).field("trigger", &self.trigger).finish()
    }
}

/// Normalization passes in application order.
///
/// Within one round a pass runs when any of its trigger bits is set. The
/// wide-gap pass also lists the earlier removals that can leave two spaces
/// side by side. Markers that only appear after a deletion are caught by the
/// rescan at the start of the next round.
pub static PASSES: &[Pass] = &[
    Pass { name: "banner", trigger: Signals::BANNER, apply: strip_banner },
    Pass { name: "footer", trigger: Signals::FOOTER, apply: strip_footer },
    Pass { name: "bullets", trigger: Signals::BULLETS, apply: strip_bullets },
    Pass { name: "disclaimer", trigger: Signals::DISCLAIMER, apply: strip_disclaimer },
    Pass {
        name: "wide_gaps",
        trigger: Signals::WIDE_GAPS.union(Signals::FOOTER).union(Signals::BULLETS),
        apply: strip_wide_gaps,
    },
    Pass { name: "locations", trigger: Signals::LOCATIONS, apply: strip_locations },
    Pass { name: "podium", trigger: Signals::PODIUM, apply: strip_podium },
    Pass { name: "amounts", trigger: Signals::AMOUNTS, apply: strip_amounts },
];

/// Run every pass over `input`.
pub fn normalize(input: &str) -> String {
    normalize_scanned(input, Signals::scan(input))
}

/// Normalize starting from an already computed `signals` mask for `input`.
///
/// The first round uses `signals`; later rounds rescan their own input.
pub(crate) fn normalize_scanned(input: &str, signals: Signals) -> String {
    let mut text = input.to_string();
    let mut signals = signals;
    loop {
        let rewritten = run_round(&text, signals);
        if rewritten == text {
            return text;
        }
        text = rewritten;
        signals = Signals::scan(&text);
    }
}

fn run_round(input: &str, signals: Signals) -> String {
    let mut text = input.to_string();
    for pass in PASSES.iter().filter(|p| signals.intersects(p.trigger)) {
        if let Cow::Owned(rewritten) = (pass.apply)(&text) {
            text = rewritten;
        }
    }
    text
}

/// Replace everything from the banner marker up to the first-prize label
/// (`1st` or `First Prize`) with just that label. One banner per call.
pub fn strip_banner(input: &str) -> Cow<'_, str> {
    regex!(r"(?s)KERALA.*? (1st\b|First Prize\b)").replacen(input, 1, "${1}")
}

pub fn strip_footer(input: &str) -> Cow<'_, str> {
    regex!(r"Page [0-9]+  IT Support : NIC Kerala  [0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}")
        .replace_all(input, "")
}

/// Drop `N)` / `NN)` row markers.
pub fn strip_bullets(input: &str) -> Cow<'_, str> {
    regex!(r"[0-9]{1,2}\)").replace_all(input, "")
}

/// Drop the prize-winner disclaimer and everything after it.
pub fn strip_disclaimer(input: &str) -> Cow<'_, str> {
    regex!(r"(?s)The prize winners?.*").replace_all(input, "")
}

/// Drop a stray single-character token preceded by two whitespace characters,
/// together with the surrounding whitespace. Digit groups on both sides end up
/// joined, which the extractor later splits back into 4-digit chunks.
/// Whitespace here is ASCII only.
pub fn strip_wide_gaps(input: &str) -> Cow<'_, str> {
    regex!(r"[[:space:]]{2}\S[[:space:]]").replace_all(input, "")
}

/// Drop parenthesised single-token annotations such as `(KOTTAYAM)`.
pub fn strip_locations(input: &str) -> Cow<'_, str> {
    regex!(r"\(\S+\)").replace_all(input, "")
}

/// Drop "FOR THE TICKETS ENDING WITH THE FOLLOWING NUMBERS"-style phrases.
/// The match is lazy so two phrases never swallow the numbers between them.
pub fn strip_podium(input: &str) -> Cow<'_, str> {
    regex!(r"FOR +.*? NUMBERS").replace_all(input, "")
}

/// Drop the amount suffix of a prize heading: `1st Prize-Rs :7000000/-` becomes
/// `1st Prize`.
pub fn strip_amounts(input: &str) -> Cow<'_, str> {
    regex!(r"(?:-|\s)?Rs\s?:\s?[0-9,]+/-").replace_all(input, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_collapses_to_first_label() {
        let out = strip_banner("KERALA STATE LOTTERIES RESULT KARUNYA 1st Prize-Rs :100/-");
        assert_eq!(out, "1st Prize-Rs :100/-");
    }

    #[test]
    fn banner_ends_at_spelled_out_first_prize() {
        let out = strip_banner("KERALA STATE LOTTERIES RESULT WIN WIN NO.W-760 First Prize-Rs :7500000/- [W]");
        assert_eq!(out, "First Prize-Rs :7500000/- [W]");
    }

    #[test]
    fn banner_word_first_alone_does_not_end_banner() {
        let out = strip_banner("KERALA First Draw 1st Prize AB 123456");
        assert_eq!(out, "1st Prize AB 123456");
    }

    #[test]
    fn banner_without_marker_is_untouched() {
        assert!(matches!(strip_banner("1st Prize AB 123456"), Cow::Borrowed(_)));
    }

    #[test]
    fn only_first_banner_is_removed() {
        let out = strip_banner("KERALA x 1st A KERALA y 1st B");
        assert_eq!(out, "1st A KERALA y 1st B");
    }

    #[test]
    fn footer_lines_are_removed() {
        let out = strip_footer("4567 Page 2  IT Support : NIC Kerala  12/03/2024 15:04:05 8910");
        assert_eq!(out, "4567  8910");
    }

    #[test]
    fn footer_accepts_multi_digit_pages() {
        let out = strip_footer("a Page 12  IT Support : NIC Kerala  01/01/2024 00:00:00 b");
        assert_eq!(out, "a  b");
    }

    #[test]
    fn bullets_are_removed() {
        assert_eq!(strip_bullets("1) AB 123456 12) CD 654321"), " AB 123456  CD 654321");
    }

    #[test]
    fn disclaimer_takes_the_tail_with_it() {
        assert_eq!(strip_disclaimer("4567 The prize winners are requested 1234"), "4567 ");
        assert_eq!(strip_disclaimer("4567 The prize winner should"), "4567 ");
    }

    #[test]
    fn wide_gap_drops_stray_character() {
        assert_eq!(strip_wide_gaps("1234  x 5678"), "12345678");
        assert_eq!(strip_wide_gaps("1234 5678"), "1234 5678");
    }

    #[test]
    fn wide_gap_whitespace_is_ascii() {
        let text = "1234\u{3000}\u{3000}x 5678";
        assert!(matches!(strip_wide_gaps(text), Cow::Borrowed(_)));
    }

    #[test]
    fn locations_are_removed() {
        assert_eq!(strip_locations("AB 123456 (KOTTAYAM) CD 654321"), "AB 123456  CD 654321");
        assert_eq!(strip_locations("(TWO WORDS)"), "(TWO WORDS)");
    }

    #[test]
    fn podium_phrase_is_removed_lazily() {
        let out = strip_podium("FOR THE TICKETS ENDING WITH THE FOLLOWING NUMBERS 1234 FOR THE SAME NUMBERS 5678");
        assert_eq!(out, " 1234  5678");
    }

    #[test]
    fn amounts_leave_canonical_labels() {
        assert_eq!(strip_amounts("1st Prize-Rs :7000000/- AB"), "1st Prize AB");
        assert_eq!(strip_amounts("2nd Prize Rs :1,000,000/- AB"), "2nd Prize AB");
        assert_eq!(strip_amounts("Cons Prize-Rs:8000/- 1"), "Cons Prize 1");
    }

    #[test]
    fn full_pass_order_on_a_realistic_page() {
        let raw = "KERALA STATE LOTTERIES - RESULT  WIN-WIN LOTTERY NO.W-760 1st Prize-Rs :7500000/- \
                   1) WN 123456 (PALAKKAD) Cons Prize-Rs :8000/- WA 123456 WB 123456 \
                   Page 1  IT Support : NIC Kerala  12/03/2024 15:04:05 \
                   4th Prize-Rs :5000/- FOR THE TICKETS ENDING WITH THE FOLLOWING NUMBERS 0123 4567 \
                   The prize winners are advised to verify";
        let out = normalize(raw);
        assert!(out.starts_with("1st Prize"));
        assert!(!out.contains("KERALA"));
        assert!(!out.contains("PALAKKAD"));
        assert!(!out.contains("IT Support"));
        assert!(!out.contains("Rs"));
        assert!(!out.contains("NUMBERS"));
        assert!(!out.contains("advised"));
        assert!(out.contains("WN 123456"));
        assert!(out.contains("4th Prize"));
        assert!(out.contains("0123 4567"));
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let raw = "1st Prize-Rs :7500000/- 1) WN 123456 (PALAKKAD) Cons Prize-Rs :8000/- WA 123456 \
                   4th Prize-Rs :5000/- 0123 4567 8901 The prize winners are advised";
        let once = normalize(raw);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalizing_reaches_a_fixed_point() {
        let inputs = [
            "4th Prize 1234 (KOLLAM) x 5678",
            "4th Prize 0418 FOR THE SAME NUMBERS x 1934",
            "4th Prize 0418 FOR1) THE SAME NUMBERS 1934",
            "KERALA x 1st Prize 1234 KERALA y 1st Prize 5678",
            "1st Prize-Rs :100/- 1) AB 123456 (PALAKKAD)  z 2) 4567",
            "Cons Prize 1234 5678 Page 3  IT Support : NIC Kerala  01/02/2024 10:11:12 x 9012",
        ];
        for raw in inputs {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not stable for {raw:?}");
        }
    }

    #[test]
    fn gap_opened_by_location_removal_is_closed() {
        assert_eq!(normalize("4th Prize 1234 (KOLLAM) x 5678"), "4th Prize 12345678");
    }

    #[test]
    fn podium_marker_assembled_by_bullet_removal() {
        let raw = "4th Prize 0418 FOR1) THE SAME NUMBERS 1934";
        assert!(!Signals::scan(raw).contains(Signals::PODIUM));
        assert_eq!(normalize(raw), "4th Prize 0418  1934");
    }

    #[test]
    fn clean_text_passes_through() {
        let text = "1st Prize WN 123456 Cons Prize 4567";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn skipped_passes_match_ungated_run() {
        let raw = "1st Prize-Rs :100/- 1) AB 123456 2) 4567";
        let mut ungated = raw.to_string();
        for pass in PASSES {
            ungated = (pass.apply)(&ungated).into_owned();
        }
        assert_eq!(normalize(raw), ungated);
    }
}
