use recipe_core::{update, AppState, Meal, Msg};

#[test]
fn recommendation_without_open_cycle_is_noop() {
    let state = AppState::new();
    let meal = Meal {
        id: "52772".into(),
        name: "Teriyaki Chicken Casserole".into(),
        thumbnail_url: String::new(),
        ingredients: Vec::new(),
        instructions: String::new(),
    };
    let (mut next, effects) = update(state.clone(), Msg::RecommendationLoaded { cycle: 4, meal });

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn unchanged_query_text_is_not_dirty() {
    let (mut state, _) = update(AppState::new(), Msg::QueryChanged("soup".into()));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::QueryChanged("soup".into()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.query_text(), "soup");
}
