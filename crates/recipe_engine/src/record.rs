use std::collections::HashMap;

use recipe_core::{collect_ingredients, Meal, MAX_INGREDIENTS};
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiError, FailureKind};

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<MealRecord>>,
}

#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    /// `strIngredientN` / `strMeasureN` slots and everything else we ignore.
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
    }

    fn into_meal(self) -> Meal {
        let ingredients = collect_ingredients(
            (1..=MAX_INGREDIENTS)
                .map(|i| (self.slot("strIngredient", i), self.slot("strMeasure", i))),
        );
        Meal {
            id: self.id,
            name: self.name.unwrap_or_default(),
            thumbnail_url: self.thumbnail.unwrap_or_default(),
            ingredients,
            instructions: self.instructions.unwrap_or_default(),
        }
    }
}

/// Decode a `{ "meals": [...] | null }` payload into its first meal.
///
/// `null`, a missing key and an empty array all mean "no match" and yield
/// `Ok(None)`; anything unparsable is a [`FailureKind::Decode`] error.
pub fn decode_first_meal(bytes: &[u8]) -> Result<Option<Meal>, ApiError> {
    let envelope: MealsEnvelope = serde_json::from_slice(bytes)
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
    Ok(envelope
        .meals
        .and_then(|meals| meals.into_iter().next())
        .map(MealRecord::into_meal))
}
