use std::fmt;
use std::sync::Arc;

use recipe_core::{DetailOutcome, Meal, SearchOutcome};
use recipe_logging::{recipe_warn, API_TARGET};

use crate::fetch::{ApiSettings, MealSource, ReqwestMealSource};
use crate::{ApiError, FailureKind, MealQuery};

/// Maps single recipe API requests onto the outcomes the core understands.
///
/// Transport, status and decode failures are logged here and collapse into
/// `NetworkFailure`; "no match" stays a separate outcome.
#[derive(Clone)]
pub struct RecipeApiClient {
    source: Arc<dyn MealSource>,
}

impl fmt::Debug for RecipeApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeApiClient").finish_non_exhaustive()
    }
}

impl RecipeApiClient {
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        Self { source }
    }

    pub fn with_settings(settings: ApiSettings) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(ReqwestMealSource::new(settings)?)))
    }

    /// Search by name. Blank names short-circuit to `EmptyQuery`.
    pub async fn search(&self, name: &str) -> SearchOutcome {
        let name = name.trim();
        if name.is_empty() {
            return SearchOutcome::EmptyQuery;
        }
        let query = MealQuery::Search(name.to_owned());
        match self.source.fetch(&query).await {
            Ok(Some(meal)) => SearchOutcome::Found(meal),
            Ok(None) => SearchOutcome::NoResults,
            Err(err) => {
                log_failure(&query, &err);
                SearchOutcome::NetworkFailure
            }
        }
    }

    pub async fn lookup(&self, meal_id: &str) -> DetailOutcome {
        let query = MealQuery::Lookup(meal_id.to_owned());
        match self.source.fetch(&query).await {
            Ok(Some(meal)) => DetailOutcome::Found(meal),
            Ok(None) => DetailOutcome::NotFound,
            Err(err) => {
                log_failure(&query, &err);
                DetailOutcome::NetworkFailure
            }
        }
    }

    /// One random meal. The endpoint always answers with a record, so an empty
    /// payload counts as a failure.
    pub async fn random(&self) -> Result<Meal, ApiError> {
        let query = MealQuery::Random;
        let result = match self.source.fetch(&query).await {
            Ok(Some(meal)) => Ok(meal),
            Ok(None) => Err(ApiError::new(
                FailureKind::EmptyPayload,
                "random endpoint returned no meal",
            )),
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            log_failure(&query, err);
        }
        result
    }
}

fn log_failure(query: &MealQuery, err: &ApiError) {
    recipe_warn!(target: API_TARGET, "{} failed: {}", query, err);
}
