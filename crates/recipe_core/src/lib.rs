//! Recipe core: pure state machine, domain model and view-model helpers.
//!
//! Nothing in this crate performs IO. User actions and engine completions
//! arrive as [`Msg`]s, [`update`] folds them into [`AppState`], and any work
//! that must happen outside (network lookups, scrolling the view) comes back
//! as [`Effect`]s for the composition root to execute.
mod catalog;
mod detail;
mod effect;
mod error;
mod meal;
mod msg;
mod recommend;
mod search;
mod state;
mod store;
mod update;
mod view_model;

pub use catalog::DEFAULT_CATALOG_QUERIES;
pub use effect::Effect;
pub use error::{DetailError, ErrorKind};
pub use meal::{
    collect_ingredients, CatalogEntry, DetailOutcome, Ingredient, Meal, SearchOutcome,
    MAX_INGREDIENTS,
};
pub use msg::Msg;
pub use recommend::RECOMMENDATION_COUNT;
pub use state::{AppState, CycleId, DetailRegion, RecommendationCycle};
pub use store::Store;
pub use update::update;
pub use view_model::AppViewModel;
