use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::effects::DataEffects;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - manages state and action processing
///
/// The Runtime is responsible for:
/// - Holding the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Actions posted back by effects
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect, turning fetch requests into async work
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchSnapshot {
                force_sync,
                reset_selection,
            } => {
                debug!(
                    "EFFECT: Executing snapshot fetch (force_sync={}, reset_selection={})",
                    force_sync, reset_selection
                );
                let fetch_effect = self.data_effects.fetch_snapshot(force_sync, reset_selection);
                let _ = self.effect_tx.send(fetch_effect);
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        use crate::tui::components::App;

        App.view(&self.state)
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Converted to Effect::Async by execute_effect() before being queued
            Effect::FetchSnapshot { .. } => {
                tracing::warn!("Fetch effect reached async executor without a data handler");
            }
        }
    }
}
