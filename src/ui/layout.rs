use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub(crate) const GUIDE_WIDTH: u16 = 10;
pub(crate) const TOGGLE_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub header: Rect,
    pub sidebar_toggle: Rect,
    pub viewer: Rect,
    /// Drawn over the left edge of the viewer so opening it never changes
    /// the viewport width.
    pub sidebar: Option<Rect>,
    pub status: Rect,
    pub prev_guide: Rect,
    pub next_guide: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SidebarToggle,
    SidebarEntry(usize),
    PrevGuide,
    NextGuide,
    Viewer,
}

pub fn split_layout(area: Rect, sidebar_open: bool, sidebar_width: u16) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let header = rows[0];
    let viewer = rows[1];
    let status = rows[2];

    let sidebar = sidebar_open.then(|| {
        Rect::new(
            viewer.x,
            viewer.y,
            sidebar_width.min(viewer.width),
            viewer.height,
        )
    });

    let guide_width = GUIDE_WIDTH.min(status.width / 2);
    UiLayout {
        header,
        sidebar_toggle: Rect::new(header.x, header.y, TOGGLE_WIDTH.min(header.width), header.height),
        viewer,
        sidebar,
        status,
        prev_guide: Rect::new(status.x, status.y, guide_width, status.height),
        next_guide: Rect::new(
            status.x + status.width.saturating_sub(guide_width),
            status.y,
            guide_width,
            status.height,
        ),
    }
}

impl UiLayout {
    /// Sidebar rows start one below the block border.
    pub fn sidebar_entry_at(&self, row: u16, page_count: usize) -> Option<usize> {
        let sidebar = self.sidebar?;
        let first_row = sidebar.y + 1;
        if row < first_row || row >= sidebar.y + sidebar.height.saturating_sub(1) {
            return None;
        }
        let index = usize::from(row - first_row);
        (index < page_count).then_some(index)
    }

    pub fn hit_test(&self, column: u16, row: u16, page_count: usize) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.sidebar_toggle.contains(position) {
            return Some(HitTarget::SidebarToggle);
        }
        if let Some(sidebar) = self.sidebar
            && sidebar.contains(position)
        {
            return self
                .sidebar_entry_at(row, page_count)
                .map(HitTarget::SidebarEntry);
        }
        if self.prev_guide.contains(position) {
            return Some(HitTarget::PrevGuide);
        }
        if self.next_guide.contains(position) {
            return Some(HitTarget::NextGuide);
        }
        if self.viewer.contains(position) {
            return Some(HitTarget::Viewer);
        }
        None
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{HitTarget, split_layout};

    #[test]
    fn split_layout_reserves_header_and_status_rows() {
        let layout = split_layout(Rect::new(0, 0, 120, 40), false, 28);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.viewer.height, 38);
        assert_eq!(layout.viewer.width, 120);
        assert_eq!(layout.sidebar, None);
    }

    #[test]
    fn open_sidebar_overlays_without_shrinking_viewer() {
        let closed = split_layout(Rect::new(0, 0, 120, 40), false, 28);
        let open = split_layout(Rect::new(0, 0, 120, 40), true, 28);
        assert_eq!(open.viewer, closed.viewer);
        assert_eq!(open.sidebar, Some(Rect::new(0, 1, 28, 38)));
    }

    #[test]
    fn hit_test_resolves_controls() {
        let layout = split_layout(Rect::new(0, 0, 120, 40), true, 28);
        assert_eq!(layout.hit_test(1, 0, 8), Some(HitTarget::SidebarToggle));
        assert_eq!(layout.hit_test(3, 2, 8), Some(HitTarget::SidebarEntry(0)));
        assert_eq!(layout.hit_test(3, 9, 8), Some(HitTarget::SidebarEntry(7)));
        assert_eq!(layout.hit_test(3, 10, 8), None);
        assert_eq!(layout.hit_test(2, 39, 8), Some(HitTarget::PrevGuide));
        assert_eq!(layout.hit_test(118, 39, 8), Some(HitTarget::NextGuide));
        assert_eq!(layout.hit_test(60, 20, 8), Some(HitTarget::Viewer));
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = super::centered_rect(area, 99, 99);
        assert_eq!(centered, area);
    }
}
