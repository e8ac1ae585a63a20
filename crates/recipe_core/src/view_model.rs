use crate::{CatalogEntry, CycleId, DetailRegion, Meal};

/// Read-only snapshot of the view state handed to renderers and subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query_text: String,
    pub catalog: Vec<CatalogEntry>,
    pub detail: DetailRegion,
    pub recommendations: Vec<Meal>,
    pub recommendation_cycle: CycleId,
    pub dirty: bool,
}
