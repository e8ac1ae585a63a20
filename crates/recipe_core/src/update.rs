use crate::{catalog, detail, recommend, search, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => catalog::start(&mut state),
        Msg::QueryChanged(text) => {
            state.set_query_text(text);
            Vec::new()
        }
        Msg::SearchSubmitted => search::submit(&mut state),
        Msg::RecipeSelected { meal_id } => detail::request(&mut state, meal_id),
        Msg::CatalogMealLoaded { query, meal } => {
            catalog::accept(&mut state, &query, &meal);
            Vec::new()
        }
        Msg::SearchCompleted { query, outcome } => search::complete(&mut state, &query, outcome),
        Msg::LookupCompleted { meal_id, outcome } => {
            detail::complete(&mut state, &meal_id, outcome)
        }
        Msg::RecommendationLoaded { cycle, meal } => {
            recommend::accept(&mut state, cycle, meal);
            Vec::new()
        }
    };

    (state, effects)
}
