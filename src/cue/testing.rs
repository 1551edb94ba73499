use std::cell::Cell;
use std::rc::Rc;

use super::TransitionCue;

/// Counts emitted cues; shares the counter so a caller can observe it after
/// handing the cue to a controller.
#[derive(Debug, Clone, Default)]
pub struct CountingCue {
    count: Rc<Cell<usize>>,
}

impl CountingCue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl TransitionCue for CountingCue {
    fn emit(&self) {
        self.count.set(self.count.get() + 1);
    }
}
