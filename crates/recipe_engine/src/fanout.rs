use futures_util::stream::{FuturesUnordered, StreamExt};
use recipe_core::{CycleId, SearchOutcome};
use recipe_logging::{recipe_debug, recipe_info, API_TARGET};

use crate::{EngineEvent, RecipeApiClient};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Searches every query concurrently and emits a `CatalogMeal` the moment
/// each hit completes. Misses and failures are logged and dropped.
///
/// Returns how many queries produced a meal.
pub async fn load_catalog(
    client: &RecipeApiClient,
    queries: &[String],
    sink: &dyn EventSink,
) -> usize {
    let mut pending: FuturesUnordered<_> = queries
        .iter()
        .cloned()
        .map(|query| {
            let client = client.clone();
            async move {
                let outcome = client.search(&query).await;
                (query, outcome)
            }
        })
        .collect();

    let mut found = 0;
    while let Some((query, outcome)) = pending.next().await {
        match outcome {
            SearchOutcome::Found(meal) => {
                found += 1;
                sink.emit(EngineEvent::CatalogMeal { query, meal });
            }
            other => {
                recipe_info!(
                    target: API_TARGET,
                    "catalog query {:?} skipped: {:?}",
                    query,
                    other
                );
            }
        }
    }

    recipe_info!(
        target: API_TARGET,
        "catalog finished: {} of {} queries produced a meal",
        found,
        queries.len()
    );
    found
}

/// Issues `count` concurrent random lookups for `cycle` and emits each meal as
/// it arrives. There is no completion event and failed lookups are not retried.
///
/// Returns how many lookups succeeded.
pub async fn gather_recommendations(
    client: &RecipeApiClient,
    cycle: CycleId,
    count: usize,
    sink: &dyn EventSink,
) -> usize {
    let mut pending: FuturesUnordered<_> = (0..count)
        .map(|_| {
            let client = client.clone();
            async move { client.random().await }
        })
        .collect();

    let mut fetched = 0;
    while let Some(result) = pending.next().await {
        // Failures were already logged by the client.
        if let Ok(meal) = result {
            fetched += 1;
            recipe_debug!(
                target: API_TARGET,
                "recommendation cycle {} got id={}",
                cycle,
                meal.id
            );
            sink.emit(EngineEvent::RecommendationFetched { cycle, meal });
        }
    }
    fetched
}
