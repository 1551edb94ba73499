use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::nav::TransitionMarker;

use super::bindings::{CLASS_HIDDEN, CLASS_OPEN, PresentationView};
use super::layout::UiLayout;

pub fn draw_header(frame: &mut Frame<'_>, layout: UiLayout, title: &str, view: &PresentationView<'_>) {
    let toggle_style = if view.sidebar_classes().contains(&CLASS_OPEN) {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("[≡]", toggle_style)),
        layout.sidebar_toggle,
    );

    let title_area = ratatui::layout::Rect::new(
        layout.sidebar_toggle.x + layout.sidebar_toggle.width,
        layout.header.y,
        layout.header.width.saturating_sub(layout.sidebar_toggle.width),
        layout.header.height,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
}

pub fn draw_status(
    frame: &mut Frame<'_>,
    layout: UiLayout,
    view: &PresentationView<'_>,
    marker: Option<TransitionMarker>,
    message: &str,
) {
    let mut center = vec![Span::raw(view.counter.clone())];
    if let Some(marker) = marker {
        center.push(Span::styled(
            format!("  {}", marker.class_name()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if !message.is_empty() {
        center.push(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(center)).alignment(Alignment::Center),
        layout.status,
    );

    let guide_style = Style::default().add_modifier(Modifier::BOLD);
    if !view.prev_guide_classes().contains(&CLASS_HIDDEN) {
        frame.render_widget(
            Paragraph::new(Span::styled("‹ Prev", guide_style)),
            layout.prev_guide,
        );
    }
    if !view.next_guide_classes().contains(&CLASS_HIDDEN) {
        frame.render_widget(
            Paragraph::new(Span::styled("Next ›", guide_style)).alignment(Alignment::Right),
            layout.next_guide,
        );
    }
}
