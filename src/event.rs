use crossterm::event::Event;

use crate::command::CommandOutcome;

/// Describes *why* the current page changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavReason {
    /// Guided one-page step (arrow keys, prev/next guides).
    Step,
    /// Direct jump (sidebar entry, number keys, first/last page).
    Jump,
    /// Passive reconciliation from the scroll position.
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted { outcome: CommandOutcome },
    PageChanged {
        from: usize,
        to: usize,
        reason: NavReason,
    },
    SidebarChanged { open: bool },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
}
