use crate::nav::{NavOutcome, RejectReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// 1-based, as shown in the sidebar.
    GotoPage {
        page: usize,
    },
    ToggleSidebar,
    CloseSidebar,
    Scroll {
        columns: i32,
    },
    Quit,
}

impl Command {
    pub fn id(&self) -> &'static str {
        match self {
            Self::NextPage => "next-page",
            Self::PrevPage => "prev-page",
            Self::FirstPage => "first-page",
            Self::LastPage => "last-page",
            Self::GotoPage { .. } => "goto-page",
            Self::ToggleSidebar => "toggle-sidebar",
            Self::CloseSidebar => "close-sidebar",
            Self::Scroll { .. } => "scroll",
            Self::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    Rejected(RejectReason),
    QuitRequested,
}

impl From<NavOutcome> for CommandOutcome {
    fn from(outcome: NavOutcome) -> Self {
        match outcome {
            NavOutcome::Accepted => Self::Applied,
            NavOutcome::Noop => Self::Noop,
            NavOutcome::Rejected(reason) => Self::Rejected(reason),
        }
    }
}
