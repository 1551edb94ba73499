use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::content::{Diary, DiaryPage};
use crate::nav::TransitionMarker;

use super::bindings::page_classes;
use super::layout::centered_rect;
use super::text::wrap_text;

const PAGE_MARGIN: u16 = 3;

/// Draws every section overlapping the viewport at the given scroll offset.
pub fn draw_page_strip(
    frame: &mut Frame<'_>,
    area: Rect,
    diary: &Diary,
    page_count: usize,
    offset: f64,
    marker: Option<TransitionMarker>,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    frame.render_widget(Clear, area);

    let width = i64::from(area.width);
    let offset = offset.round() as i64;
    let first = (offset / width).max(0) as usize;

    for index in first..page_count {
        let page_x = index as i64 * width - offset;
        if page_x >= width {
            break;
        }
        let visible_start = page_x.max(0);
        let visible_end = (page_x + width).min(width);
        if visible_end <= visible_start {
            continue;
        }

        let clip = Rect::new(
            area.x + visible_start as u16,
            area.y,
            (visible_end - visible_start) as u16,
            area.height,
        );
        let skip = (visible_start - page_x) as u16;
        let classes = page_classes(index, marker);

        match diary.page(index) {
            Some(page) => {
                let lines = page_lines(page, area.width, &classes);
                frame.render_widget(Paragraph::new(lines).scroll((0, skip)), clip);
            }
            None => draw_missing_section(frame, clip),
        }
    }
}

fn page_lines(page: &DiaryPage, width: u16, classes: &[&str]) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(PAGE_MARGIN * 2));
    let pad = " ".repeat(usize::from(PAGE_MARGIN));
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    let mut flourish = String::new();
    for class in classes {
        match *class {
            "turning-left" => {
                title_style = title_style.fg(Color::Yellow);
                flourish = " ◀".to_string();
            }
            "turning-right" => {
                title_style = title_style.fg(Color::Yellow);
                flourish = " ▶".to_string();
            }
            _ => {}
        }
    }

    let mut lines = vec![Line::default()];
    for title_line in wrap_text(&page.title, text_width) {
        lines.push(Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(title_line, title_style),
            Span::styled(flourish.clone(), title_style),
        ]));
    }
    if let Some(subtitle) = &page.subtitle {
        for subtitle_line in wrap_text(subtitle, text_width) {
            lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(subtitle_line, Style::default().fg(Color::DarkGray)),
            ]));
        }
    }
    for paragraph in &page.body {
        lines.push(Line::default());
        for body_line in wrap_text(paragraph, text_width) {
            lines.push(Line::from(vec![Span::raw(pad.clone()), Span::raw(body_line)]));
        }
    }
    lines
}

fn draw_missing_section(frame: &mut Frame<'_>, area: Rect) {
    let message = centered_rect(area, area.width, 1);
    frame.render_widget(
        Paragraph::new("(this page has no content)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        message,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::content::{Diary, DiaryPage};
    use crate::nav::{Direction, TransitionMarker};

    use super::draw_page_strip;

    fn diary() -> Diary {
        let page = |id: &str, title: &str| DiaryPage {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: None,
            body: vec![format!("body of {id}")],
        };
        Diary {
            title: "Test".to_string(),
            pages: vec![page("a", "Alpha"), page("b", "Bravo")],
        }
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn aligned_offset_shows_a_single_page() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).expect("test terminal");
        let diary = diary();
        terminal
            .draw(|frame| draw_page_strip(frame, Rect::new(0, 0, 30, 6), &diary, 2, 30.0, None))
            .expect("draw should pass");
        assert!(row(&terminal, 1).contains("Bravo"));
        assert!(!row(&terminal, 1).contains("Alpha"));
    }

    #[test]
    fn partial_offset_shifts_the_next_page_into_view() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).expect("test terminal");
        let diary = diary();
        terminal
            .draw(|frame| draw_page_strip(frame, Rect::new(0, 0, 30, 6), &diary, 2, 10.0, None))
            .expect("draw should pass");
        let title_row = row(&terminal, 1);
        assert_eq!(title_row.find("Bravo"), Some(23));
        assert!(!title_row.contains("Alpha"));
    }

    #[test]
    fn marker_flourish_is_drawn_on_target_page() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).expect("test terminal");
        let diary = diary();
        let marker = Some(TransitionMarker {
            page: 0,
            direction: Direction::Next,
        });
        terminal
            .draw(|frame| draw_page_strip(frame, Rect::new(0, 0, 30, 6), &diary, 2, 0.0, marker))
            .expect("draw should pass");
        assert!(row(&terminal, 1).contains("Alpha ◀"));
    }

    #[test]
    fn page_without_content_renders_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).expect("test terminal");
        let diary = diary();
        terminal
            .draw(|frame| draw_page_strip(frame, Rect::new(0, 0, 30, 6), &diary, 3, 60.0, None))
            .expect("draw should pass");
        let all: String = (0..6).map(|y| row(&terminal, y)).collect();
        assert!(all.contains("no content"));
    }
}
