/// Failure shown in place of a recipe in the detail region.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    #[error("Please enter a meal name.")]
    EmptyQuery,
    #[error("No meals found. Please try another search.")]
    NoResults,
    #[error("There was an error fetching the meal data. Please try again later.")]
    SearchFailed,
    #[error("Recipe not found.")]
    NotFound,
    #[error("There was an error fetching the recipe. Please try again later.")]
    LookupFailed,
}

/// Coarse classification of a [`DetailError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any request was made.
    Validation,
    /// The API answered but had no matching recipe.
    NotFound,
    /// Network, status or decode failure.
    Transport,
}

impl DetailError {
    pub fn kind(self) -> ErrorKind {
        match self {
            DetailError::EmptyQuery => ErrorKind::Validation,
            DetailError::NoResults | DetailError::NotFound => ErrorKind::NotFound,
            DetailError::SearchFailed | DetailError::LookupFailed => ErrorKind::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_have_distinct_messages() {
        let texts = [
            DetailError::EmptyQuery.to_string(),
            DetailError::NoResults.to_string(),
            DetailError::SearchFailed.to_string(),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(DetailError::EmptyQuery.kind(), ErrorKind::Validation);
        assert_eq!(DetailError::NoResults.kind(), ErrorKind::NotFound);
        assert_eq!(DetailError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(DetailError::SearchFailed.kind(), ErrorKind::Transport);
        assert_eq!(DetailError::LookupFailed.kind(), ErrorKind::Transport);
    }
}
