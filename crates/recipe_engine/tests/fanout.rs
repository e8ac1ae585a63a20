use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use recipe_core::{Meal, DEFAULT_CATALOG_QUERIES, RECOMMENDATION_COUNT};
use recipe_engine::{
    gather_recommendations, load_catalog, ApiError, EngineEvent, EventSink, FailureKind, MealQuery,
    MealSource, RecipeApiClient,
};

type Reply = (u64, Result<Option<Meal>, ApiError>);
type Script = Box<dyn Fn(&MealQuery, usize) -> Reply + Send + Sync>;

/// Answers each query after a scripted delay (in milliseconds).
struct ScriptedSource {
    calls: AtomicUsize,
    seen: Mutex<Vec<MealQuery>>,
    script: Script,
}

impl ScriptedSource {
    fn new<F>(script: F) -> Arc<Self>
    where
        F: Fn(&MealQuery, usize) -> Reply + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            script: Box::new(script),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MealSource for ScriptedSource {
    async fn fetch(&self, query: &MealQuery) -> Result<Option<Meal>, ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(query.clone());
        let (delay_ms, result) = (self.script)(query, call);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        result
    }
}

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn meal(id: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: format!("Meal {id}"),
        thumbnail_url: String::new(),
        ingredients: Vec::new(),
        instructions: String::new(),
    }
}

fn network_error() -> ApiError {
    ApiError {
        kind: FailureKind::Network,
        message: "connection reset".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn catalog_keeps_hits_in_completion_order() {
    recipe_logging::initialize_for_tests();
    let source = ScriptedSource::new(|query, _| match query {
        MealQuery::Search(name) => match name.as_str() {
            "Arrabiata" => (60, Ok(Some(meal("arrabiata")))),
            "Chicken" => (10, Ok(Some(meal("chicken")))),
            "Salmon" => (5, Ok(None)),
            "Salad" => (30, Ok(Some(meal("salad")))),
            "Seafood" => (1, Ok(None)),
            "Vegetarian" => (45, Ok(Some(meal("vegetarian")))),
            other => panic!("unexpected query {other}"),
        },
        other => panic!("unexpected request {other}"),
    });
    let client = RecipeApiClient::new(source.clone());
    let sink = TestSink::default();
    let queries: Vec<String> = DEFAULT_CATALOG_QUERIES
        .iter()
        .map(|q| q.to_string())
        .collect();

    let found = load_catalog(&client, &queries, &sink).await;

    assert_eq!(found, 4);
    assert_eq!(source.calls(), 6);
    let order: Vec<(String, String)> = sink
        .take()
        .into_iter()
        .map(|event| match event {
            EngineEvent::CatalogMeal { query, meal } => (query, meal.id),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("Chicken".to_string(), "chicken".to_string()),
            ("Salad".to_string(), "salad".to_string()),
            ("Vegetarian".to_string(), "vegetarian".to_string()),
            ("Arrabiata".to_string(), "arrabiata".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn catalog_tolerates_failures() {
    recipe_logging::initialize_for_tests();
    let source = ScriptedSource::new(|query, _| match query {
        MealQuery::Search(name) if name == "Chicken" => (5, Ok(Some(meal("chicken")))),
        _ => (5, Err(network_error())),
    });
    let client = RecipeApiClient::new(source.clone());
    let sink = TestSink::default();
    let queries = vec!["Chicken".to_string(), "Salmon".to_string(), " ".to_string()];

    let found = load_catalog(&client, &queries, &sink).await;

    assert_eq!(found, 1);
    // The blank query never reaches the source.
    assert_eq!(source.calls(), 2);
    assert_eq!(sink.take().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn recommendations_issue_exactly_three_lookups() {
    let source = ScriptedSource::new(|_, call| {
        (10 * (3 - call as u64), Ok(Some(meal(&format!("r{call}")))))
    });
    let client = RecipeApiClient::new(source.clone());
    let sink = TestSink::default();

    let fetched = gather_recommendations(&client, 7, RECOMMENDATION_COUNT, &sink).await;

    assert_eq!(fetched, 3);
    assert_eq!(source.calls(), 3);
    assert!(source
        .seen
        .lock()
        .unwrap()
        .iter()
        .all(|q| *q == MealQuery::Random));
    let arrivals: Vec<String> = sink
        .take()
        .into_iter()
        .map(|event| match event {
            EngineEvent::RecommendationFetched { cycle, meal } => {
                assert_eq!(cycle, 7);
                meal.id
            }
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    // Later calls were scripted to answer sooner.
    assert_eq!(arrivals, vec!["r2", "r1", "r0"]);
}

#[tokio::test(start_paused = true)]
async fn failed_recommendation_is_dropped_not_retried() {
    recipe_logging::initialize_for_tests();
    let source = ScriptedSource::new(|_, call| {
        if call == 1 {
            (5, Err(network_error()))
        } else {
            (5, Ok(Some(meal(&format!("r{call}")))))
        }
    });
    let client = RecipeApiClient::new(source.clone());
    let sink = TestSink::default();

    let fetched = gather_recommendations(&client, 1, RECOMMENDATION_COUNT, &sink).await;

    assert_eq!(fetched, 2);
    assert_eq!(source.calls(), 3);
    assert_eq!(sink.take().len(), 2);
}
