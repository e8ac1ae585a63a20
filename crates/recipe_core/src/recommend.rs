use recipe_logging::{recipe_debug, recipe_warn, STATE_TARGET};

use crate::state::Admission;
use crate::{AppState, CycleId, Effect, Meal};

/// Random lookups issued per recommendation cycle.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Clears the recommendation list before the new cycle's lookups go out.
pub(crate) fn open_cycle(state: &mut AppState) -> Effect {
    let cycle = state.open_recommendation_cycle(RECOMMENDATION_COUNT);
    Effect::FetchRecommendations {
        cycle,
        count: RECOMMENDATION_COUNT,
    }
}

pub(crate) fn accept(state: &mut AppState, cycle: CycleId, meal: Meal) {
    let meal_id = meal.id.clone();
    match state.admit_recommendation(cycle, meal) {
        Admission::Added => {}
        Admission::Stale => recipe_debug!(
            target: STATE_TARGET,
            "dropping recommendation id={} from stale cycle {} (current {})",
            meal_id,
            cycle,
            state.recommendations().id()
        ),
        Admission::Full => recipe_warn!(
            target: STATE_TARGET,
            "recommendation cycle {} already full; dropping id={}",
            cycle,
            meal_id
        ),
    }
}
