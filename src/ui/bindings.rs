//! Pure derivations of navigation state consumed by the renderer.

use crate::nav::{NavigationState, TransitionMarker};
use crate::registry::{PageId, PageRegistry};

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_HIDDEN: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationView<'a> {
    pub active: &'a PageId,
    pub active_index: usize,
    pub page_count: usize,
    pub prev_visible: bool,
    pub next_visible: bool,
    pub sidebar_open: bool,
    pub counter: String,
}

impl<'a> PresentationView<'a> {
    pub fn derive(state: &NavigationState, registry: &'a PageRegistry) -> Self {
        let page_count = registry.len();
        let index = state.current_index;
        Self {
            active: registry.id_at(index),
            active_index: index,
            page_count,
            prev_visible: index > 0,
            next_visible: index + 1 < page_count,
            sidebar_open: state.sidebar_open,
            counter: format!("Page {} of {}", index + 1, page_count),
        }
    }

    pub fn sidebar_classes(&self) -> Vec<&'static str> {
        if self.sidebar_open {
            vec![CLASS_OPEN]
        } else {
            Vec::new()
        }
    }

    pub fn sidebar_entry_classes(&self, index: usize) -> Vec<&'static str> {
        if index == self.active_index {
            vec![CLASS_ACTIVE]
        } else {
            Vec::new()
        }
    }

    pub fn prev_guide_classes(&self) -> Vec<&'static str> {
        guide_classes(self.prev_visible)
    }

    pub fn next_guide_classes(&self) -> Vec<&'static str> {
        guide_classes(self.next_visible)
    }
}

fn guide_classes(visible: bool) -> Vec<&'static str> {
    if visible {
        Vec::new()
    } else {
        vec![CLASS_HIDDEN]
    }
}

pub fn page_classes(index: usize, marker: Option<TransitionMarker>) -> Vec<&'static str> {
    match marker {
        Some(marker) if marker.page == index => vec![marker.class_name()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::nav::{Direction, NavigationState, TransitionMarker};
    use crate::registry::{PageId, PageRegistry};

    use super::{CLASS_ACTIVE, CLASS_HIDDEN, CLASS_OPEN, PresentationView, page_classes};

    fn registry(pages: usize) -> PageRegistry {
        PageRegistry::new((0..pages).map(|index| PageId::new(format!("p{index}"))))
            .expect("valid registry")
    }

    fn state(current_index: usize) -> NavigationState {
        NavigationState {
            current_index,
            ..NavigationState::default()
        }
    }

    #[test]
    fn first_page_hides_prev_guide_only() {
        let registry = registry(8);
        let view = PresentationView::derive(&state(0), &registry);
        assert_eq!(view.active.as_str(), "p0");
        assert!(!view.prev_visible);
        assert!(view.next_visible);
        assert_eq!(view.counter, "Page 1 of 8");
        assert_eq!(view.prev_guide_classes(), vec![CLASS_HIDDEN]);
        assert!(view.next_guide_classes().is_empty());
    }

    #[test]
    fn last_page_hides_next_guide_only() {
        let registry = registry(8);
        let view = PresentationView::derive(&state(7), &registry);
        assert_eq!(view.active.as_str(), "p7");
        assert!(view.prev_visible);
        assert!(!view.next_visible);
        assert_eq!(view.counter, "Page 8 of 8");
    }

    #[test]
    fn single_page_hides_both_guides() {
        let registry = registry(1);
        let view = PresentationView::derive(&state(0), &registry);
        assert!(!view.prev_visible);
        assert!(!view.next_visible);
        assert_eq!(view.counter, "Page 1 of 1");
    }

    #[test]
    fn sidebar_marks_open_and_active_entry() {
        let registry = registry(4);
        let mut nav_state = state(2);
        nav_state.sidebar_open = true;
        let view = PresentationView::derive(&nav_state, &registry);
        assert_eq!(view.sidebar_classes(), vec![CLASS_OPEN]);
        assert_eq!(view.sidebar_entry_classes(2), vec![CLASS_ACTIVE]);
        assert!(view.sidebar_entry_classes(1).is_empty());
    }

    #[test]
    fn marker_class_applies_to_its_page_only() {
        let marker = Some(TransitionMarker {
            page: 3,
            direction: Direction::Next,
        });
        assert_eq!(page_classes(3, marker), vec!["turning-left"]);
        assert!(page_classes(2, marker).is_empty());
        assert!(page_classes(3, None).is_empty());
    }
}
