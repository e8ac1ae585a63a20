use recipe_logging::{recipe_debug, STATE_TARGET};

use crate::{recommend, AppState, DetailError, DetailOutcome, DetailRegion, Effect, Meal};

pub(crate) fn request(state: &mut AppState, meal_id: String) -> Vec<Effect> {
    state.replace_detail(DetailRegion::Loading);
    vec![Effect::LookupMeal { meal_id }]
}

/// Applies a finished lookup. There is no cancellation: whichever lookup
/// completes last owns the detail region.
pub(crate) fn complete(state: &mut AppState, meal_id: &str, outcome: DetailOutcome) -> Vec<Effect> {
    match outcome {
        DetailOutcome::Found(meal) => resolve(state, meal),
        DetailOutcome::NotFound => {
            recipe_debug!(target: STATE_TARGET, "lookup id={} not found", meal_id);
            fail(state, DetailError::NotFound)
        }
        DetailOutcome::NetworkFailure => fail(state, DetailError::LookupFailed),
    }
}

/// Success path shared by search and lookup: publish the recipe, ask the view
/// to scroll to it, and start a recommendation cycle.
pub(crate) fn resolve(state: &mut AppState, meal: Meal) -> Vec<Effect> {
    state.replace_detail(DetailRegion::Resolved(meal));
    vec![Effect::ScrollToDetail, recommend::open_cycle(state)]
}

pub(crate) fn fail(state: &mut AppState, error: DetailError) -> Vec<Effect> {
    state.replace_detail(DetailRegion::Failed(error));
    Vec::new()
}
