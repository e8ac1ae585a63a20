use std::sync::mpsc;
use std::thread;

use recipe_core::CycleId;
use recipe_logging::{recipe_debug, recipe_error};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::task::TaskTracker;

use crate::fanout::{gather_recommendations, load_catalog, ChannelEventSink, EventSink};
use crate::{ApiError, ApiSettings, EngineEvent, RecipeApiClient};

#[derive(Debug)]
enum EngineCommand {
    LoadCatalog { queries: Vec<String> },
    Search { query: String },
    Lookup { meal_id: String },
    Recommend { cycle: CycleId, count: usize },
}

/// Runs recipe API work on a dedicated thread with a single-threaded tokio
/// runtime. Every command becomes its own task; tasks interleave at request
/// boundaries and report through the event channel in completion order.
///
/// Nothing is cancelled: a request issued before a newer one still reports
/// when it finishes.
#[derive(Debug)]
pub struct EngineHandle {
    cmd_tx: Option<UnboundedSender<EngineCommand>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    /// Engine talking to the real API described by `settings`.
    pub fn new(settings: ApiSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let client = RecipeApiClient::with_settings(settings)?;
        Ok(Self::spawn(client))
    }

    pub fn spawn(client: RecipeApiClient) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let sink = ChannelEventSink::new(event_tx);

        let worker = thread::spawn(move || run_worker(client, cmd_rx, sink));

        let handle = Self {
            cmd_tx: Some(cmd_tx),
            worker: Some(worker),
        };
        (handle, event_rx)
    }

    pub fn load_catalog(&self, queries: Vec<String>) {
        self.send(EngineCommand::LoadCatalog { queries });
    }

    pub fn search(&self, query: impl Into<String>) {
        self.send(EngineCommand::Search {
            query: query.into(),
        });
    }

    pub fn lookup(&self, meal_id: impl Into<String>) {
        self.send(EngineCommand::Lookup {
            meal_id: meal_id.into(),
        });
    }

    pub fn recommend(&self, cycle: CycleId, count: usize) {
        self.send(EngineCommand::Recommend { cycle, count });
    }

    /// Stops accepting commands and blocks until every in-flight request has
    /// reported.
    pub fn shutdown(mut self) {
        self.cmd_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                recipe_error!("engine worker panicked");
            }
        }
    }

    fn send(&self, command: EngineCommand) {
        let Some(tx) = &self.cmd_tx else {
            return;
        };
        if let Err(err) = tx.send(command) {
            recipe_error!("engine worker gone; dropping {:?}", err.0);
        }
    }
}

fn run_worker(
    client: RecipeApiClient,
    mut cmd_rx: UnboundedReceiver<EngineCommand>,
    sink: ChannelEventSink,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            recipe_error!("failed to start engine runtime: {}", err);
            return;
        }
    };

    runtime.block_on(async move {
        let tracker = TaskTracker::new();
        while let Some(command) = cmd_rx.recv().await {
            recipe_debug!("engine command {:?}", command);
            let client = client.clone();
            let sink = sink.clone();
            tracker.spawn(async move {
                handle_command(&client, command, &sink).await;
            });
        }
        tracker.close();
        tracker.wait().await;
    });
}

async fn handle_command(client: &RecipeApiClient, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::LoadCatalog { queries } => {
            load_catalog(client, &queries, sink).await;
        }
        EngineCommand::Search { query } => {
            let outcome = client.search(&query).await;
            sink.emit(EngineEvent::SearchCompleted { query, outcome });
        }
        EngineCommand::Lookup { meal_id } => {
            let outcome = client.lookup(&meal_id).await;
            sink.emit(EngineEvent::LookupCompleted { meal_id, outcome });
        }
        EngineCommand::Recommend { cycle, count } => {
            gather_recommendations(client, cycle, count, sink).await;
        }
    }
}
