use std::collections::VecDeque;

use crate::controllers::session::events::InputEvent;
use crate::controllers::session::ports::InputSource;

/// Replays pre-recorded batches, one per poll, then reports no events.
///
/// With no batches this is the input of an unattended recording run.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
