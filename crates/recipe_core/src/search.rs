use recipe_logging::{recipe_debug, STATE_TARGET};

use crate::{detail, AppState, DetailError, DetailRegion, Effect, SearchOutcome};

/// Validates the current query text and issues one search for it.
///
/// Blank input fails the detail region synchronously with no request.
pub(crate) fn submit(state: &mut AppState) -> Vec<Effect> {
    let query = state.query_text().trim();
    if query.is_empty() {
        return detail::fail(state, DetailError::EmptyQuery);
    }
    let query = query.to_owned();
    state.replace_detail(DetailRegion::Loading);
    vec![Effect::SearchMeals { query }]
}

/// Applies a finished search. Responses are applied in arrival order, so an
/// older search that lands late replaces a newer result.
pub(crate) fn complete(state: &mut AppState, query: &str, outcome: SearchOutcome) -> Vec<Effect> {
    match outcome {
        SearchOutcome::Found(meal) => {
            recipe_debug!(target: STATE_TARGET, "search {:?} found id={}", query, meal.id);
            detail::resolve(state, meal)
        }
        SearchOutcome::EmptyQuery => detail::fail(state, DetailError::EmptyQuery),
        SearchOutcome::NoResults => detail::fail(state, DetailError::NoResults),
        SearchOutcome::NetworkFailure => detail::fail(state, DetailError::SearchFailed),
    }
}
