use std::fmt;

use crate::{update, AppState, AppViewModel, Effect, Msg};

type Subscriber = Box<dyn FnMut(&AppViewModel) + Send>;

/// Owns the [`AppState`] and publishes a fresh view model to every
/// subscriber after each message that changed it.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::new())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&AppViewModel) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Runs one message through [`update`] and returns the effects to execute.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
        effects
    }
}
