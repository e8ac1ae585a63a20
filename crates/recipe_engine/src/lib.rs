//! Recipe engine: recipe API access and effect execution.
mod client;
mod engine;
mod fanout;
mod fetch;
mod record;
mod types;

pub use client::RecipeApiClient;
pub use engine::EngineHandle;
pub use fanout::{gather_recommendations, load_catalog, ChannelEventSink, EventSink};
pub use fetch::{ApiSettings, MealSource, ReqwestMealSource, DEFAULT_BASE_URL};
pub use record::decode_first_meal;
pub use types::{ApiError, EngineEvent, FailureKind, MealQuery};
