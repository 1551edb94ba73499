//! Page navigation state machine.
//!
//! Guided requests (keys, guides, sidebar links) run as a locked transition
//! with two deferred steps: the viewport jump after `settle_delay`, and the
//! lock release after `transition`. The event loop drives both by calling
//! [`NavigationController::advance`] once [`NavigationController::next_deadline`]
//! passes. Scroll-position sync is passive and ignores the lock entirely.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::config::NavigationConfig;
use crate::cue::TransitionCue;
use crate::registry::{PageId, PageRegistry};

use super::scroll::ScrollSurface;
use super::state::{Direction, NavigationState, TransitionMarker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTimings {
    pub settle_delay: Duration,
    pub transition: Duration,
}

impl Default for NavTimings {
    fn default() -> Self {
        Self::from_config(&NavigationConfig::default())
    }
}

impl NavTimings {
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            transition: Duration::from_millis(config.transition_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Locked,
    AtEdge,
    UnknownPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Accepted,
    Noop,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy)]
struct PendingJump {
    target: usize,
    due: Instant,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    jump: Option<PendingJump>,
    release_at: Instant,
}

pub struct NavigationController<C> {
    registry: PageRegistry,
    state: NavigationState,
    cue: C,
    timings: NavTimings,
    pending: Option<PendingTransition>,
    marker: Option<TransitionMarker>,
}

impl<C: TransitionCue> NavigationController<C> {
    pub fn new(registry: PageRegistry, cue: C, timings: NavTimings) -> Self {
        Self {
            registry,
            state: NavigationState::default(),
            cue,
            timings,
            pending: None,
            marker: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn marker(&self) -> Option<TransitionMarker> {
        self.marker
    }

    /// Step one page. The viewport jump is deferred; see [`Self::advance`].
    pub fn request_navigate(&mut self, direction: Direction, now: Instant) -> NavOutcome {
        let current = self.state.current_index;
        let target = match direction {
            Direction::Next => (current + 1).min(self.registry.last_index()),
            Direction::Prev => current.saturating_sub(1),
        };

        if self.state.is_transitioning {
            trace!(direction = direction.as_str(), "Step ignored while transitioning");
            return NavOutcome::Rejected(RejectReason::Locked);
        }
        if target == current {
            debug!(direction = direction.as_str(), page = current, "Step ignored at edge");
            return NavOutcome::Rejected(RejectReason::AtEdge);
        }

        self.state.is_transitioning = true;
        self.cue.emit();
        self.marker = Some(TransitionMarker {
            page: target,
            direction,
        });
        self.pending = Some(PendingTransition {
            jump: Some(PendingJump {
                target,
                due: now + self.timings.settle_delay,
            }),
            release_at: now + self.timings.transition,
        });
        info!(
            direction = direction.as_str(),
            from = current,
            to = target,
            "Page turn started"
        );
        NavOutcome::Accepted
    }

    /// Jump straight to `id`, as a sidebar link does. Scrolls immediately and
    /// holds the lock for the rest of the transition window.
    pub fn request_navigate_to(
        &mut self,
        id: &PageId,
        surface: &mut dyn ScrollSurface,
        now: Instant,
    ) -> NavOutcome {
        if self.state.is_transitioning {
            trace!(page = %id, "Jump ignored while transitioning");
            return NavOutcome::Rejected(RejectReason::Locked);
        }
        let Some(target) = self.registry.position(id) else {
            warn!(page = %id, "Jump to unknown page ignored");
            return NavOutcome::Rejected(RejectReason::UnknownPage);
        };

        if target == self.state.current_index {
            self.close_sidebar();
            debug!(page = %id, "Jump target is already current");
            return NavOutcome::Noop;
        }

        self.state.is_transitioning = true;
        self.cue.emit();
        info!(from = self.state.current_index, to = target, page = %id, "Jump started");
        self.jump_to(target, surface);
        self.close_sidebar();
        self.pending = Some(PendingTransition {
            jump: None,
            release_at: now + self.timings.transition,
        });
        NavOutcome::Accepted
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .map(|pending| pending.jump.map_or(pending.release_at, |jump| jump.due))
    }

    /// Run every deferred step due at `now`. Returns whether state changed.
    pub fn advance(&mut self, now: Instant, surface: &mut dyn ScrollSurface) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };

        let mut changed = false;
        if let Some(jump) = pending.jump.filter(|jump| now >= jump.due) {
            pending.jump = None;
            self.jump_to(jump.target, surface);
            changed = true;
        }

        if pending.jump.is_none() && now >= pending.release_at {
            self.marker = None;
            self.state.is_transitioning = false;
            debug!(page = self.state.current_index, "Transition finished");
            return true;
        }

        self.pending = Some(pending);
        changed
    }

    /// Reconcile the current page with a raw scroll offset. Never touches the
    /// lock or the cue; readings taken before a pending jump are overwritten
    /// by that jump.
    pub fn sync_from_scroll_offset(&mut self, offset: f64, viewport_width: f64) -> bool {
        if !offset.is_finite() || !viewport_width.is_finite() || viewport_width <= 0.0 {
            return false;
        }

        let inferred = (offset / viewport_width).round();
        if inferred < 0.0 || inferred > self.registry.last_index() as f64 {
            return false;
        }

        let inferred = inferred as usize;
        if inferred == self.state.current_index {
            return false;
        }

        trace!(
            from = self.state.current_index,
            to = inferred,
            offset,
            "Synced page from scroll offset"
        );
        self.state.current_index = inferred;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        debug!(open = self.state.sidebar_open, "Sidebar toggled");
    }

    pub fn close_sidebar(&mut self) -> bool {
        let was_open = self.state.sidebar_open;
        self.state.sidebar_open = false;
        was_open
    }

    fn jump_to(&mut self, target: usize, surface: &mut dyn ScrollSurface) {
        if !surface.scroll_to_page(target) {
            warn!(
                page = %self.registry.id_at(target),
                "No rendered section for page, skipping scroll"
            );
        }
        self.state.current_index = target;
    }
}
