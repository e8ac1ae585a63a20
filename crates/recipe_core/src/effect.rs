use crate::CycleId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Search every query concurrently and report each hit as it lands.
    LoadCatalog { queries: Vec<String> },
    /// One search-by-name for the user's query.
    SearchMeals { query: String },
    /// One lookup-by-id.
    LookupMeal { meal_id: String },
    /// Issue `count` concurrent random lookups tagged with `cycle`.
    FetchRecommendations { cycle: CycleId, count: usize },
    /// Bring the detail region into view. Fired once per resolved recipe.
    ScrollToDetail,
}
