use std::fmt;

use recipe_core::{CycleId, DetailOutcome, Meal, Msg, SearchOutcome};

/// The three request shapes the recipe API understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealQuery {
    Search(String),
    Lookup(String),
    Random,
}

impl MealQuery {
    pub fn endpoint(&self) -> &'static str {
        match self {
            MealQuery::Search(_) => "search.php",
            MealQuery::Lookup(_) => "lookup.php",
            MealQuery::Random => "random.php",
        }
    }

    /// Query-string parameter carried by this request, if any.
    pub fn param(&self) -> Option<(&'static str, &str)> {
        match self {
            MealQuery::Search(name) => Some(("s", name)),
            MealQuery::Lookup(id) => Some(("i", id)),
            MealQuery::Random => None,
        }
    }
}

impl fmt::Display for MealQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealQuery::Search(name) => write!(f, "search {name:?}"),
            MealQuery::Lookup(id) => write!(f, "lookup {id:?}"),
            MealQuery::Random => write!(f, "random"),
        }
    }
}

/// Completion reported by the engine. Failures swallowed by the catalog and
/// recommendation bursts produce no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatalogMeal {
        query: String,
        meal: Meal,
    },
    SearchCompleted {
        query: String,
        outcome: SearchOutcome,
    },
    LookupCompleted {
        meal_id: String,
        outcome: DetailOutcome,
    },
    RecommendationFetched {
        cycle: CycleId,
        meal: Meal,
    },
}

impl From<EngineEvent> for Msg {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::CatalogMeal { query, meal } => Msg::CatalogMealLoaded { query, meal },
            EngineEvent::SearchCompleted { query, outcome } => {
                Msg::SearchCompleted { query, outcome }
            }
            EngineEvent::LookupCompleted { meal_id, outcome } => {
                Msg::LookupCompleted { meal_id, outcome }
            }
            EngineEvent::RecommendationFetched { cycle, meal } => {
                Msg::RecommendationLoaded { cycle, meal }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    EmptyPayload,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed payload"),
            FailureKind::EmptyPayload => write!(f, "empty payload"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
