use std::time::Instant;

use tracing::debug;

use crate::cue::TransitionCue;
use crate::event::{AppEvent, NavReason};
use crate::nav::{Direction, NavigationController, RejectReason, ScrollView};
use crate::registry::PageId;

use super::types::{Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch<C: TransitionCue>(
    nav: &mut NavigationController<C>,
    scroll: &mut ScrollView,
    cmd: Command,
    now: Instant,
) -> CommandDispatchResult {
    let previous = nav.state();
    let command_id = cmd.id();

    let outcome = match &cmd {
        Command::NextPage => nav.request_navigate(Direction::Next, now).into(),
        Command::PrevPage => nav.request_navigate(Direction::Prev, now).into(),
        Command::FirstPage => goto_index(nav, scroll, 0, now),
        Command::LastPage => {
            let last = nav.registry().last_index();
            goto_index(nav, scroll, last, now)
        }
        Command::GotoPage { page } => match page.checked_sub(1) {
            Some(index) if index < nav.registry().len() => goto_index(nav, scroll, index, now),
            _ => CommandOutcome::Rejected(RejectReason::UnknownPage),
        },
        Command::ToggleSidebar => {
            nav.toggle_sidebar();
            CommandOutcome::Applied
        }
        Command::CloseSidebar => {
            if nav.close_sidebar() {
                CommandOutcome::Applied
            } else {
                CommandOutcome::Noop
            }
        }
        Command::Scroll { columns } => {
            if scroll.scroll_by(f64::from(*columns)) {
                nav.sync_from_scroll_offset(scroll.offset(), f64::from(scroll.viewport_width()));
                CommandOutcome::Applied
            } else {
                CommandOutcome::Noop
            }
        }
        Command::Quit => CommandOutcome::QuitRequested,
    };
    debug!(command = command_id, ?outcome, "Dispatched command");

    let current = nav.state();
    let mut emitted_events = Vec::new();
    if current.current_index != previous.current_index {
        emitted_events.push(AppEvent::PageChanged {
            from: previous.current_index,
            to: current.current_index,
            reason: derive_nav_reason(&cmd),
        });
    }
    if current.sidebar_open != previous.sidebar_open {
        emitted_events.push(AppEvent::SidebarChanged {
            open: current.sidebar_open,
        });
    }
    emitted_events.push(AppEvent::CommandExecuted { outcome });

    CommandDispatchResult {
        outcome,
        emitted_events,
    }
}

fn goto_index<C: TransitionCue>(
    nav: &mut NavigationController<C>,
    scroll: &mut ScrollView,
    index: usize,
    now: Instant,
) -> CommandOutcome {
    let id: PageId = nav.registry().id_at(index).clone();
    nav.request_navigate_to(&id, scroll, now).into()
}

fn derive_nav_reason(command: &Command) -> NavReason {
    match command {
        Command::NextPage | Command::PrevPage => NavReason::Step,
        Command::Scroll { .. } => NavReason::Scroll,
        _ => NavReason::Jump,
    }
}
