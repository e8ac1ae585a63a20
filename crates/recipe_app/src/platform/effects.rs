use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use recipe_core::Effect;
use recipe_engine::{ApiSettings, EngineEvent, EngineHandle};
use recipe_logging::{recipe_debug, recipe_info};

use super::app::AppEvent;

/// Executes core effects against the engine and feeds engine completions back
/// into the app's message queue.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<AppEvent>) -> anyhow::Result<Self> {
        let (engine, events) = EngineHandle::new(settings).context("starting recipe engine")?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { engine })
    }

    #[cfg(test)]
    pub fn with_client(
        client: recipe_engine::RecipeApiClient,
        msg_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let (engine, events) = EngineHandle::spawn(client);
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    /// Dispatches `effects`; returns whether the view asked to scroll to the
    /// detail region.
    pub fn enqueue(&self, effects: Vec<Effect>) -> bool {
        let mut scroll_to_detail = false;
        for effect in effects {
            match effect {
                Effect::LoadCatalog { queries } => {
                    recipe_info!("LoadCatalog queries={}", queries.len());
                    self.engine.load_catalog(queries);
                }
                Effect::SearchMeals { query } => {
                    recipe_info!("SearchMeals query={:?}", query);
                    self.engine.search(query);
                }
                Effect::LookupMeal { meal_id } => {
                    recipe_info!("LookupMeal meal_id={}", meal_id);
                    self.engine.lookup(meal_id);
                }
                Effect::FetchRecommendations { cycle, count } => {
                    recipe_info!("FetchRecommendations cycle={} count={}", cycle, count);
                    self.engine.recommend(cycle, count);
                }
                Effect::ScrollToDetail => scroll_to_detail = true,
            }
        }
        scroll_to_detail
    }

    /// Waits for in-flight requests to report before returning.
    #[cfg(test)]
    pub fn shutdown(self) {
        self.engine.shutdown();
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for event in events {
            if msg_tx.send(AppEvent::Msg(event.into())).is_err() {
                recipe_debug!("app queue closed; stopping event forwarding");
                break;
            }
        }
    });
}
