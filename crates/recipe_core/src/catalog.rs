use recipe_logging::{recipe_debug, STATE_TARGET};

use crate::{AppState, CatalogEntry, Effect, Meal};

/// Queries whose first hit makes up the startup catalog.
pub const DEFAULT_CATALOG_QUERIES: [&str; 6] = [
    "Arrabiata",
    "Chicken",
    "Salmon",
    "Salad",
    "Seafood",
    "Vegetarian",
];

/// Requests the startup catalog. Only the first call per session does anything.
pub(crate) fn start(state: &mut AppState) -> Vec<Effect> {
    if state.catalog_requested() {
        recipe_debug!(target: STATE_TARGET, "catalog already requested; ignoring");
        return Vec::new();
    }
    state.mark_catalog_requested();
    let queries = state.catalog_queries().to_vec();
    if queries.is_empty() {
        return Vec::new();
    }
    vec![Effect::LoadCatalog { queries }]
}

/// Appends the meal found for one catalog query. Entries land in arrival order.
pub(crate) fn accept(state: &mut AppState, query: &str, meal: &Meal) {
    recipe_debug!(
        target: STATE_TARGET,
        "catalog query={} -> id={} name={}",
        query,
        meal.id,
        meal.name
    );
    state.push_catalog_entry(CatalogEntry::from(meal));
}
