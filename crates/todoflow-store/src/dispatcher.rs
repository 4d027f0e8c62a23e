use std::collections::VecDeque;

use todoflow_core::reduce;
use todoflow_core::TodoAction;
use todoflow_core::TodoState;
use tracing::debug;

use crate::effects;
use crate::storage::StorageAdapter;

/// Owns the one collection state and pumps intents through the pipeline:
/// reducer first, then the effect, follow-up intents re-enqueued. Everything
/// runs on the caller's thread; by the time `dispatch` returns the queue is
/// drained and the state is settled.
pub struct TodoStore<S: StorageAdapter> {
    state: TodoState,
    storage: S,
    queue: VecDeque<TodoAction>,
}

impl<S: StorageAdapter> TodoStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            state: TodoState::new(),
            storage,
            queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn dispatch(&mut self, action: TodoAction) {
        self.queue.push_back(action);
        self.pump();
    }

    fn pump(&mut self) {
        while let Some(action) = self.queue.pop_front() {
            debug!(intent = action.label(), "dispatch");
            reduce(&mut self.state, &action);
            if let Some(follow_up) = effects::handle(&action, &self.state, &mut self.storage) {
                self.queue.push_back(follow_up);
            }
        }
    }
}
