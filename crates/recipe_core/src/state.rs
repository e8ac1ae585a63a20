use crate::catalog::DEFAULT_CATALOG_QUERIES;
use crate::view_model::AppViewModel;
use crate::{CatalogEntry, DetailError, Meal};

/// Identifies one recommendation cycle. Cycles are numbered from 1.
pub type CycleId = u64;

/// The detail region: `Idle -> Loading -> {Resolved, Failed}`, re-entrant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailRegion {
    #[default]
    Idle,
    Loading,
    Resolved(Meal),
    Failed(DetailError),
}

impl DetailRegion {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailRegion::Loading)
    }

    pub fn meal(&self) -> Option<&Meal> {
        match self {
            DetailRegion::Resolved(meal) => Some(meal),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<DetailError> {
        match self {
            DetailRegion::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

/// Per-cycle accumulator for recommended meals.
///
/// Holds at most `capacity` meals, in the order their lookups completed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationCycle {
    id: CycleId,
    capacity: usize,
    meals: Vec<Meal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    Added,
    Stale,
    Full,
}

impl RecommendationCycle {
    pub(crate) fn open(id: CycleId, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            meals: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> CycleId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.meals.len() >= self.capacity
    }

    pub(crate) fn admit(&mut self, cycle: CycleId, meal: Meal) -> Admission {
        if cycle != self.id {
            return Admission::Stale;
        }
        if self.is_full() {
            return Admission::Full;
        }
        self.meals.push(meal);
        Admission::Added
    }
}

/// The view state shared by every component.
///
/// Each field has a single writer: `catalog` belongs to the catalog loader,
/// `detail` to search and detail resolution, `recommendations` to the
/// recommendation aggregator and `query_text` to the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    query_text: String,
    catalog_queries: Vec<String>,
    catalog_requested: bool,
    catalog: Vec<CatalogEntry>,
    detail: DetailRegion,
    recommendations: RecommendationCycle,
    last_cycle: CycleId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog_queries(DEFAULT_CATALOG_QUERIES.iter().map(|q| q.to_string()))
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose startup catalog is built from `queries` instead of the defaults.
    pub fn with_catalog_queries<I, S>(queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            query_text: String::new(),
            catalog_queries: queries.into_iter().map(Into::into).collect(),
            catalog_requested: false,
            catalog: Vec::new(),
            detail: DetailRegion::Idle,
            recommendations: RecommendationCycle::default(),
            last_cycle: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query_text: self.query_text.clone(),
            catalog: self.catalog.clone(),
            detail: self.detail.clone(),
            recommendations: self.recommendations.meals().to_vec(),
            recommendation_cycle: self.recommendations.id(),
            dirty: self.dirty,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn catalog_queries(&self) -> &[String] {
        &self.catalog_queries
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailRegion {
        &self.detail
    }

    pub fn recommendations(&self) -> &RecommendationCycle {
        &self.recommendations
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query_text(&mut self, text: String) {
        if self.query_text != text {
            self.query_text = text;
            self.dirty = true;
        }
    }

    pub(crate) fn catalog_requested(&self) -> bool {
        self.catalog_requested
    }

    pub(crate) fn mark_catalog_requested(&mut self) {
        self.catalog_requested = true;
    }

    pub(crate) fn push_catalog_entry(&mut self, entry: CatalogEntry) {
        self.catalog.push(entry);
        self.dirty = true;
    }

    pub(crate) fn replace_detail(&mut self, detail: DetailRegion) {
        self.detail = detail;
        self.dirty = true;
    }

    /// Clears the recommendation list and opens the next cycle.
    pub(crate) fn open_recommendation_cycle(&mut self, capacity: usize) -> CycleId {
        self.last_cycle += 1;
        self.recommendations = RecommendationCycle::open(self.last_cycle, capacity);
        self.dirty = true;
        self.last_cycle
    }

    pub(crate) fn admit_recommendation(&mut self, cycle: CycleId, meal: Meal) -> Admission {
        let admission = self.recommendations.admit(cycle, meal);
        if admission == Admission::Added {
            self.dirty = true;
        }
        admission
    }
}
