use ratatui::layout::Rect;

use crate::error::AppResult;
use crate::ui::{self, PresentationView};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    /// Lays out the frame, reconciles the viewport width, then draws.
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let size = session.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let state = self.nav.state();
        let layout = ui::split_layout(area, state.sidebar_open, self.config.render.sidebar_width);
        if self.scroll.set_viewport_width(layout.viewer.width) && !self.scroll.is_animating() {
            self.sync_scroll_position();
        }
        self.last_layout = Some(layout);

        let state = self.nav.state();
        let registry = self.nav.registry();
        let view = PresentationView::derive(&state, registry);
        let marker = self.nav.marker();
        let diary = &self.diary;
        let offset = self.scroll.offset();
        let message = self.status.message.as_str();

        session.draw(|frame| {
            ui::draw_header(frame, layout, &diary.title, &view);
            ui::draw_page_strip(frame, layout.viewer, diary, registry.len(), offset, marker);
            if let Some(sidebar) = layout.sidebar {
                ui::draw_sidebar(frame, sidebar, diary, &view);
            }
            ui::draw_status(frame, layout, &view, marker, message);
        })?;
        Ok(())
    }
}
