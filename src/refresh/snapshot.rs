use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PositionResults;

/// Parsed results for every lottery known at the last successful refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotteryResults {
    /// Draw date of the newest listed document, if it could be read.
    pub latest_draw: Option<NaiveDate>,
    /// Lottery name -> position results.
    pub results: BTreeMap<String, PositionResults>,
}

impl LotteryResults {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Holder of the current snapshot.
///
/// Readers get an `Arc` to an immutable value and never see a half-built
/// snapshot; [`publish`](Self::publish) swaps the pointer in one step.
#[derive(Debug, Default)]
pub struct ResultsStore {
    current: RwLock<Arc<LotteryResults>>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(initial: LotteryResults) -> Self {
        Self { current: RwLock::new(Arc::new(initial)) }
    }

    pub fn snapshot(&self) -> Arc<LotteryResults> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the current snapshot and return the published value.
    pub fn publish(&self, next: LotteryResults) -> Arc<LotteryResults> {
        let next = Arc::new(next);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> LotteryResults {
        let mut results = LotteryResults::default();
        results.results.insert(name.to_string(), PositionResults::from([("1st Prize".to_string(), vec!["1234".into()])]));
        results
    }

    #[test]
    fn starts_empty() {
        assert!(ResultsStore::new().snapshot().is_empty());
    }

    #[test]
    fn readers_keep_their_snapshot_across_publish() {
        let store = ResultsStore::with_snapshot(sample("AKSHAYA"));
        let before = store.snapshot();

        store.publish(sample("KARUNYA"));

        assert!(before.results.contains_key("AKSHAYA"));
        assert!(store.snapshot().results.contains_key("KARUNYA"));
        assert!(!store.snapshot().results.contains_key("AKSHAYA"));
    }

    #[test]
    fn serializes_with_draw_date() {
        let mut results = sample("AKSHAYA");
        results.latest_draw = NaiveDate::from_ymd_opt(2024, 3, 11);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["latest_draw"], "2024-03-11");
        assert_eq!(json["results"]["AKSHAYA"]["1st Prize"][0], "1234");
    }
}
