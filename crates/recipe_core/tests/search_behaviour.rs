use std::sync::Once;

use recipe_core::{
    update, AppState, DetailError, DetailRegion, Effect, Meal, Msg, SearchOutcome,
    RECOMMENDATION_COUNT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

fn meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("https://img.example.com/{id}.jpg"),
        ingredients: Vec::new(),
        instructions: format!("Cook the {name}."),
    }
}

fn submit_query(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::SearchSubmitted)
}

fn complete(state: AppState, query: &str, outcome: SearchOutcome) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::SearchCompleted {
            query: query.to_string(),
            outcome,
        },
    )
}

#[test]
fn blank_query_fails_without_request() {
    init_logging();
    for input in ["", "   ", "\t\n "] {
        let (mut next, effects) = submit_query(AppState::new(), input);

        assert!(effects.is_empty(), "no request for {input:?}");
        assert_eq!(
            next.detail(),
            &DetailRegion::Failed(DetailError::EmptyQuery)
        );
        assert!(next.consume_dirty());
    }
}

#[test]
fn query_is_trimmed_and_detail_goes_loading() {
    init_logging();
    let (next, effects) = submit_query(AppState::new(), "  Arrabiata ");

    assert_eq!(
        effects,
        vec![Effect::SearchMeals {
            query: "Arrabiata".to_string()
        }]
    );
    assert!(next.detail().is_loading());
    assert_eq!(next.query_text(), "  Arrabiata ");
}

#[test]
fn no_results_is_distinct_from_empty_input_and_network_failure() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "zzzz");
    let (state, effects) = complete(state, "zzzz", SearchOutcome::NoResults);

    assert!(effects.is_empty());
    let error = state.detail().error().expect("failed detail");
    assert_eq!(error, DetailError::NoResults);
    assert_eq!(
        error.to_string(),
        "No meals found. Please try another search."
    );
    assert_ne!(error.to_string(), DetailError::EmptyQuery.to_string());
    assert_ne!(error.to_string(), DetailError::SearchFailed.to_string());
}

#[test]
fn network_failure_surfaces_fetch_error() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "Chicken");
    let (state, effects) = complete(state, "Chicken", SearchOutcome::NetworkFailure);

    assert!(effects.is_empty());
    assert_eq!(
        state.detail(),
        &DetailRegion::Failed(DetailError::SearchFailed)
    );
    assert!(state.recommendations().is_empty());
}

#[test]
fn found_resolves_detail_scrolls_and_starts_recommendations() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "Arrabiata");
    let found = meal("52771", "Spicy Arrabiata Penne");
    let (state, effects) = complete(state, "Arrabiata", SearchOutcome::Found(found.clone()));

    assert_eq!(state.detail(), &DetailRegion::Resolved(found));
    assert_eq!(
        effects,
        vec![
            Effect::ScrollToDetail,
            Effect::FetchRecommendations {
                cycle: 1,
                count: RECOMMENDATION_COUNT,
            },
        ]
    );
}

#[test]
fn late_search_response_overwrites_newer_one() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "Salmon");
    let (state, _) = submit_query(state, "Salad");

    let salad = meal("2", "Salad");
    let salmon = meal("1", "Salmon");
    let (state, _) = complete(state, "Salad", SearchOutcome::Found(salad));
    let (state, _) = complete(state, "Salmon", SearchOutcome::Found(salmon.clone()));

    assert_eq!(state.detail().meal(), Some(&salmon));
    assert_eq!(state.recommendations().id(), 2);
}
