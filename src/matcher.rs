//! Ticket matching.
//!
//! A ticket wins at a position when any value recorded there is a substring
//! of it, so a 4-digit ending like `"1234"` wins for `"XY991234"` and a full
//! ticket wins for itself. When the draw has a series letter, tickets whose
//! first character differs win nothing at all for that lottery.
//!
//! Comparison ignores whitespace and ASCII case on both sides (`"AB 123456"`
//! matches `"ab123456"`); the returned lists carry the caller's tickets as
//! given. Malformed or empty tickets never fail, they just match nothing.

use std::collections::BTreeMap;

use crate::{LotteryResults, PositionResults, SERIES, WinningTickets};

/// Tickets that won in one lottery, keyed by position.
pub fn match_tickets<S: AsRef<str>>(results: &PositionResults, tickets: &[S]) -> WinningTickets {
    let series = results.get(SERIES).and_then(|letters| letters.first()).map(|letter| comparison_key(letter));
    let positions: Vec<(&String, Vec<String>)> = results
        .iter()
        .filter(|(position, _)| position.as_str() != SERIES)
        .map(|(position, values)| (position, values.iter().map(|v| comparison_key(v)).collect()))
        .collect();

    let mut winners = WinningTickets::new();
    for ticket in tickets {
        let ticket = ticket.as_ref();
        let key = comparison_key(ticket);
        if key.is_empty() || !passes_series(series.as_deref(), &key) {
            continue;
        }

        for (position, values) in &positions {
            if values.iter().any(|value| !value.is_empty() && key.contains(value.as_str())) {
                winners.entry((*position).clone()).or_default().push(ticket.to_string());
            }
        }
    }

    winners
}

/// Winners across every lottery in a snapshot: position -> lottery -> tickets.
pub fn match_by_lottery<S: AsRef<str>>(
    snapshot: &LotteryResults,
    tickets: &[S],
) -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
    let mut merged: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    for (lottery, results) in &snapshot.results {
        for (position, won) in match_tickets(results, tickets) {
            merged.entry(position).or_default().entry(lottery.clone()).or_default().extend(won);
        }
    }
    merged
}

/// Winners across every lottery, flattened by position.
///
/// Ticket lists are concatenated in lottery-name order; a ticket that wins the
/// same position in two lotteries appears twice.
pub fn match_all<S: AsRef<str>>(snapshot: &LotteryResults, tickets: &[S]) -> WinningTickets {
    match_by_lottery(snapshot, tickets)
        .into_iter()
        .map(|(position, by_lottery)| (position, by_lottery.into_values().flatten().collect()))
        .collect()
}

fn passes_series(series: Option<&str>, key: &str) -> bool {
    match series.and_then(|s| s.chars().next()) {
        Some(letter) => key.starts_with(letter),
        None => true,
    }
}

fn comparison_key(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(entries: &[(&str, &[&str])]) -> PositionResults {
        entries
            .iter()
            .map(|(position, values)| (position.to_string(), values.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn series_gate_runs_before_substring_match() {
        let res = results(&[(SERIES, &["A"]), ("1st Prize", &["AB 123456"])]);
        let winners = match_tickets(&res, &["AB123456", "CD123456"]);
        assert_eq!(winners, results(&[("1st Prize", &["AB123456"])]));
    }

    #[test]
    fn no_series_means_no_gate() {
        let res = results(&[("Cons", &["1234"])]);
        let winners = match_tickets(&res, &["XY991234"]);
        assert_eq!(winners, results(&[("Cons", &["XY991234"])]));
    }

    #[test]
    fn ticket_can_win_several_positions() {
        let res = results(&[("4th Prize", &["1234"]), ("5th Prize", &["991234"]), ("6th Prize", &["0000"])]);
        let winners = match_tickets(&res, &["XY991234"]);
        assert_eq!(winners, results(&[("4th Prize", &["XY991234"]), ("5th Prize", &["XY991234"])]));
    }

    #[test]
    fn malformed_tickets_match_nothing() {
        let res = results(&[(SERIES, &["A"]), ("4th Prize", &["1234"])]);
        let winners = match_tickets(&res, &["", "   ", "-", "A"]);
        assert!(winners.is_empty());
    }

    #[test]
    fn empty_ticket_without_series_matches_nothing() {
        let res = results(&[("4th Prize", &["1234"])]);
        assert!(match_tickets(&res, &[""]).is_empty());
    }

    #[test]
    fn case_and_spacing_are_ignored() {
        let res = results(&[(SERIES, &["A"]), ("1st Prize", &["AB 123456"])]);
        let winners = match_tickets(&res, &["ab 123456"]);
        assert_eq!(winners, results(&[("1st Prize", &["ab 123456"])]));
    }

    #[test]
    fn repeated_ticket_is_reported_each_time() {
        let res = results(&[("4th Prize", &["1234"])]);
        let winners = match_tickets(&res, &["XY991234", "XY991234"]);
        assert_eq!(winners["4th Prize"].len(), 2);
    }

    #[test]
    fn merges_across_lotteries() {
        let mut snapshot = LotteryResults::default();
        snapshot.results.insert("AKSHAYA".into(), results(&[("4th Prize", &["1234"])]));
        snapshot.results.insert("KARUNYA".into(), results(&[(SERIES, &["X"]), ("4th Prize", &["1234"])]));
        snapshot.results.insert("WIN WIN".into(), results(&[("Cons Prize", &["9912"])]));

        let tickets = ["XY991234", "AB001234"];
        let nested = match_by_lottery(&snapshot, &tickets);
        assert_eq!(nested["4th Prize"]["AKSHAYA"], vec!["XY991234", "AB001234"]);
        assert_eq!(nested["4th Prize"]["KARUNYA"], vec!["XY991234"]);
        assert_eq!(nested["Cons Prize"]["WIN WIN"], vec!["XY991234"]);

        let flat = match_all(&snapshot, &tickets);
        assert_eq!(flat["4th Prize"], vec!["XY991234", "AB001234", "XY991234"]);
        assert_eq!(flat["Cons Prize"], vec!["XY991234"]);
    }
}
