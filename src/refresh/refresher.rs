use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::task::{Id, JoinSet};
use tracing::{debug, info, warn};

use super::{DocumentRef, LotteryResults, RefreshConfig, Renderer, ResultSource, ResultsStore};
use crate::{DocumentError, Options, PositionResults, RefreshError, parse_with};

type DocumentOutcome = (String, Result<PositionResults, DocumentError>);

/// Lottery name of every task still in the join set, so a task that never
/// returns its outcome can still be reported by name.
type TaskNames = HashMap<Id, String>;

/// Rebuilds and publishes [`LotteryResults`] snapshots.
pub struct Refresher {
    source: Arc<dyn ResultSource>,
    renderer: Arc<dyn Renderer>,
    store: Arc<ResultsStore>,
    config: RefreshConfig,
}

impl Refresher {
    pub fn new(
        source: Arc<dyn ResultSource>,
        renderer: Arc<dyn Renderer>,
        store: Arc<ResultsStore>,
        config: RefreshConfig,
    ) -> Self {
        Self { source, renderer, store, config }
    }

    pub fn store(&self) -> &Arc<ResultsStore> {
        &self.store
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// List, fetch, render and parse every document, then publish.
    ///
    /// Returns the newly published snapshot. On error the store is left
    /// untouched.
    pub async fn refresh(&self) -> Result<Arc<LotteryResults>, RefreshError> {
        let listing = self.source.list_documents().await.map_err(RefreshError::Listing)?;

        let documents: VecDeque<DocumentRef> = listing
            .into_iter()
            .filter(|doc| {
                let named = !doc.name.trim().is_empty();
                if !named {
                    debug!(reference = %doc.reference, "skipping listing entry without a name");
                }
                named
            })
            .collect();

        let Some(newest) = documents.front() else {
            return Err(RefreshError::NoDocuments);
        };
        let latest_draw = parse_draw_date(&newest.date, &self.config.date_format);

        let (results, failed) = self.process_all(documents).await;

        if results.is_empty() {
            warn!(failed = failed.len(), "no lottery document could be parsed, keeping previous results");
            return Err(RefreshError::NoResults { failed });
        }

        info!(lotteries = results.len(), failed = failed.len(), "refreshed lottery results");
        Ok(self.store.publish(LotteryResults { latest_draw, results }))
    }

    async fn process_all(
        &self,
        mut queue: VecDeque<DocumentRef>,
    ) -> (BTreeMap<String, PositionResults>, Vec<DocumentError>) {
        let limit = self.config.max_concurrent.max(1);
        let mut join_set: JoinSet<DocumentOutcome> = JoinSet::new();
        let mut names = TaskNames::new();
        let mut results = BTreeMap::new();
        let mut failed = Vec::new();

        while let Some(document) = queue.pop_front() {
            self.spawn_document(&mut join_set, &mut names, document);

            if join_set.len() >= limit {
                consume_next(&mut join_set, &mut names, &mut results, &mut failed).await;
            }
        }

        while !join_set.is_empty() {
            consume_next(&mut join_set, &mut names, &mut results, &mut failed).await;
        }

        (results, failed)
    }

    fn spawn_document(&self, join_set: &mut JoinSet<DocumentOutcome>, names: &mut TaskNames, document: DocumentRef) {
        let source = Arc::clone(&self.source);
        let renderer = Arc::clone(&self.renderer);
        let options = self.config.options.clone();
        let lottery = document.name.clone();

        let handle = join_set.spawn(async move {
            let result = process_document(source.as_ref(), renderer.as_ref(), &document, &options).await;
            (document.name, result)
        });
        names.insert(handle.id(), lottery);
    }
}

/// Fetch, render and parse a single listed document.
pub(crate) async fn process_document(
    source: &dyn ResultSource,
    renderer: &dyn Renderer,
    document: &DocumentRef,
    options: &Options,
) -> Result<PositionResults, DocumentError> {
    let lottery = document.name.clone();

    let bytes = source
        .fetch_document(&document.reference)
        .await
        .map_err(|source| DocumentError::Source { lottery: lottery.clone(), source })?;

    let text = renderer
        .render_to_flat_text(&bytes)
        .map_err(|source| DocumentError::Render { lottery: lottery.clone(), source })?;

    parse_with(&text, options).map_err(|source| DocumentError::Parse { lottery, source })
}

async fn consume_next(
    join_set: &mut JoinSet<DocumentOutcome>,
    names: &mut TaskNames,
    results: &mut BTreeMap<String, PositionResults>,
    failed: &mut Vec<DocumentError>,
) {
    let Some(joined) = join_set.join_next_with_id().await else {
        return;
    };

    match joined {
        Ok((id, (lottery, Ok(positions)))) => {
            names.remove(&id);
            debug!(lottery = %lottery, positions = positions.len(), "parsed lottery document");
            results.insert(lottery, positions);
        }
        Ok((id, (_, Err(err)))) => {
            names.remove(&id);
            warn!(lottery = %err.lottery(), error = %err, "skipping lottery document");
            failed.push(err);
        }
        Err(join_error) => {
            let lottery = names.remove(&join_error.id()).unwrap_or_default();
            let err = DocumentError::Task { lottery, reason: join_error.to_string() };
            warn!(lottery = %err.lottery(), error = %err, "lottery document task did not finish");
            failed.push(err);
        }
    }
}

fn parse_draw_date(raw: &str, format: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), format) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(date = %raw, format = %format, error = %err, "unreadable draw date");
            None
        }
    }
}
