use crate::{CycleId, DetailOutcome, Meal, SearchOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished starting; loads the default catalog once.
    Started,
    /// User edited the search box.
    QueryChanged(String),
    /// User submitted the current search text.
    SearchSubmitted,
    /// User asked for the full recipe of a listed meal.
    RecipeSelected { meal_id: String },
    /// One catalog search resolved to a meal.
    CatalogMealLoaded { query: String, meal: Meal },
    /// Engine completion for a user search.
    SearchCompleted {
        query: String,
        outcome: SearchOutcome,
    },
    /// Engine completion for a lookup-by-id.
    LookupCompleted {
        meal_id: String,
        outcome: DetailOutcome,
    },
    /// One random lookup of a recommendation cycle succeeded.
    RecommendationLoaded { cycle: CycleId, meal: Meal },
}
