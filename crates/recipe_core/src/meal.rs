use std::fmt;

/// Number of ingredient/measure slots a recipe record carries.
pub const MAX_INGREDIENTS: usize = 20;

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} - {}", self.name, measure),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A complete recipe as received from the recipe API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

impl Meal {
    pub fn catalog_entry(&self) -> CatalogEntry {
        CatalogEntry::from(self)
    }
}

/// A meal reduced to what list views show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl From<&Meal> for CatalogEntry {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail_url.clone(),
        }
    }
}

/// Result of a search-by-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First meal of the result set.
    Found(Meal),
    EmptyQuery,
    NoResults,
    NetworkFailure,
}

/// Result of a lookup-by-id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(Meal),
    NotFound,
    NetworkFailure,
}

/// Build the ingredient list from the raw `(ingredient, measure)` slots of a
/// recipe record.
///
/// At most [`MAX_INGREDIENTS`] slots are read. A slot whose ingredient is
/// missing or blank is skipped; blank measures become `None`.
pub fn collect_ingredients<'a, I>(slots: I) -> Vec<Ingredient>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
{
    slots
        .into_iter()
        .take(MAX_INGREDIENTS)
        .filter_map(|(name, measure)| {
            let name = non_blank(name)?;
            Some(Ingredient {
                name: name.to_owned(),
                measure: non_blank(measure).map(ToOwned::to_owned),
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
