use std::time::Duration;

pub(crate) struct UiActor {
    needs_redraw: bool,
    redraw_interval: Duration,
}

impl UiActor {
    pub(crate) fn new(redraw_interval: Duration) -> Self {
        Self {
            needs_redraw: true,
            redraw_interval,
        }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub(crate) fn redraw_interval(&self) -> Duration {
        self.redraw_interval
    }
}
