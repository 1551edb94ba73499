#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

/// Snapshot of the navigation state handed to everything but the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub is_transitioning: bool,
    pub sidebar_open: bool,
}

/// Transient page-turn effect applied to the page being turned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionMarker {
    pub page: usize,
    pub direction: Direction,
}

impl TransitionMarker {
    pub fn class_name(&self) -> &'static str {
        match self.direction {
            Direction::Next => "turning-left",
            Direction::Prev => "turning-right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, NavigationState, TransitionMarker};

    #[test]
    fn marker_class_follows_direction() {
        let next = TransitionMarker {
            page: 1,
            direction: Direction::Next,
        };
        let prev = TransitionMarker {
            page: 0,
            direction: Direction::Prev,
        };
        assert_eq!(next.class_name(), "turning-left");
        assert_eq!(prev.class_name(), "turning-right");
    }

    #[test]
    fn state_starts_on_first_page_unlocked_and_closed() {
        let state = NavigationState::default();
        assert_eq!(state.current_index, 0);
        assert!(!state.is_transitioning);
        assert!(!state.sidebar_open);
    }
}
