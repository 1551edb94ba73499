use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::content::Diary;

use super::bindings::{CLASS_ACTIVE, CLASS_OPEN, PresentationView};

pub fn draw_sidebar(frame: &mut Frame<'_>, area: Rect, diary: &Diary, view: &PresentationView<'_>) {
    if !view.sidebar_classes().contains(&CLASS_OPEN) || area.width < 3 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Pages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = usize::from(inner.width);
    let lines: Vec<Line<'_>> = diary
        .pages
        .iter()
        .enumerate()
        .take(usize::from(inner.height))
        .map(|(index, page)| {
            let label = truncate_to_width(&format!("{}. {}", index + 1, page.title), label_width);
            if view.sidebar_entry_classes(index).contains(&CLASS_ACTIVE) {
                let padding = " ".repeat(label_width.saturating_sub(label.width()));
                Line::from(Span::styled(
                    format!("{label}{padding}"),
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::Rgb(45, 45, 50)),
                ))
            } else {
                Line::from(Span::raw(label))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn truncate_to_width(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        let candidate = format!("{out}{ch}…");
        if candidate.width() > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;

    use crate::content::Diary;
    use crate::nav::NavigationState;
    use crate::ui::bindings::PresentationView;

    use super::{draw_sidebar, truncate_to_width};

    #[test]
    fn truncates_long_titles_with_ellipsis() {
        assert_eq!(truncate_to_width("Design Thinking", 8), "Design …");
        assert_eq!(truncate_to_width("Team", 8), "Team");
    }

    #[test]
    fn active_entry_is_highlighted_only_when_open() {
        let diary = Diary::built_in();
        let registry = diary.registry().expect("built-in registry");
        let mut state = NavigationState {
            current_index: 2,
            ..NavigationState::default()
        };

        let mut terminal = Terminal::new(TestBackend::new(30, 12)).expect("test terminal");
        let closed = PresentationView::derive(&state, &registry);
        terminal
            .draw(|frame| draw_sidebar(frame, Rect::new(0, 0, 30, 12), &diary, &closed))
            .expect("draw should pass");
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), " ");

        state.sidebar_open = true;
        let open = PresentationView::derive(&state, &registry);
        terminal
            .draw(|frame| draw_sidebar(frame, Rect::new(0, 0, 30, 12), &diary, &open))
            .expect("draw should pass");
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 3)].symbol(), "3");
        assert!(buffer[(1, 3)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(1, 2)].modifier.contains(Modifier::BOLD));
    }
}
