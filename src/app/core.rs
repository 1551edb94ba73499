use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Config;
use crate::content::Diary;
use crate::cue::TransitionCue;
use crate::error::AppResult;
use crate::event::{AppEvent, NavReason};
use crate::nav::{NavTimings, NavigationController, ScrollView};
use crate::ui::UiLayout;

use super::state::StatusState;

pub struct App {
    pub diary: Diary,
    pub nav: NavigationController<Box<dyn TransitionCue>>,
    pub scroll: ScrollView,
    pub status: StatusState,
    pub config: Config,
    pub(crate) last_layout: Option<UiLayout>,
}

impl App {
    pub fn new(diary: Diary, config: Config, cue: Box<dyn TransitionCue>) -> AppResult<Self> {
        let registry = diary.registry()?;
        let page_count = registry.len();
        let nav = NavigationController::new(
            registry,
            cue,
            NavTimings::from_config(&config.navigation),
        );
        let scroll = ScrollView::new(
            diary.pages.len(),
            Duration::from_millis(config.navigation.smooth_scroll_ms),
        );
        info!(pages = page_count, title = %diary.title, "Diary mounted");

        Ok(Self {
            diary,
            nav,
            scroll,
            status: StatusState::default(),
            config,
            last_layout: None,
        })
    }

    /// Runs due transition steps and the smooth scroll. Returns whether
    /// anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.nav.state();
        let mut changed = self.nav.advance(now, &mut self.scroll);
        let stepped = self.nav.state().current_index;
        if stepped != before.current_index {
            self.handle_app_event(&AppEvent::PageChanged {
                from: before.current_index,
                to: stepped,
                reason: NavReason::Step,
            });
        }

        // Programmatic scrolls already set the index; only the resting
        // offset is reconciled.
        if self.scroll.step(now) {
            changed = true;
            if !self.scroll.is_animating() {
                self.sync_scroll_position();
            }
        }
        changed
    }

    pub(crate) fn sync_scroll_position(&mut self) {
        let from = self.nav.state().current_index;
        if self.nav.sync_from_scroll_offset(
            self.scroll.offset(),
            f64::from(self.scroll.viewport_width()),
        ) {
            let to = self.nav.state().current_index;
            self.handle_app_event(&AppEvent::PageChanged {
                from,
                to,
                reason: NavReason::Scroll,
            });
        }
    }

    pub(crate) fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::PageChanged { from, to, reason } => {
                debug!(from, to, ?reason, "Page changed");
                let id = self.nav.registry().id_at(*to);
                self.status.message = format!("#{id}");
            }
            AppEvent::SidebarChanged { open } => {
                debug!(open, "Sidebar changed");
            }
            AppEvent::CommandExecuted { outcome } => {
                self.status.last_outcome = Some(*outcome);
            }
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.nav.next_deadline()
    }
}
