use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;

/// `free_scroll_step` is the column delta used by `h`/`l`.
pub fn map_key_to_command(key: KeyEvent, sidebar_open: bool, free_scroll_step: u16) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    let step = i32::from(free_scroll_step);
    match key.code {
        KeyCode::Right => Some(Command::NextPage),
        KeyCode::Left => Some(Command::PrevPage),
        KeyCode::Home => Some(Command::FirstPage),
        KeyCode::End => Some(Command::LastPage),
        KeyCode::Tab | KeyCode::Char('m') => Some(Command::ToggleSidebar),
        KeyCode::Char('l') => Some(Command::Scroll { columns: step }),
        KeyCode::Char('h') => Some(Command::Scroll { columns: -step }),
        KeyCode::Char(digit @ '1'..='9') => Some(Command::GotoPage {
            page: digit as usize - '0' as usize,
        }),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc if sidebar_open => Some(Command::CloseSidebar),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::command::Command;

    use super::map_key_to_command;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_step_between_pages() {
        assert_eq!(map_key_to_command(key(KeyCode::Right), false, 4), Some(Command::NextPage));
        assert_eq!(map_key_to_command(key(KeyCode::Left), false, 4), Some(Command::PrevPage));
    }

    #[test]
    fn digits_jump_to_one_based_pages() {
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('3')), false, 4),
            Some(Command::GotoPage { page: 3 })
        );
        assert_eq!(map_key_to_command(key(KeyCode::Char('0')), false, 4), None);
    }

    #[test]
    fn escape_closes_sidebar_before_quitting() {
        assert_eq!(map_key_to_command(key(KeyCode::Esc), true, 4), Some(Command::CloseSidebar));
        assert_eq!(map_key_to_command(key(KeyCode::Esc), false, 4), Some(Command::Quit));
    }

    #[test]
    fn free_scroll_uses_configured_step() {
        assert_eq!(
            map_key_to_command(key(KeyCode::Char('h')), false, 6),
            Some(Command::Scroll { columns: -6 })
        );
        assert_eq!(
            map_key_to_command(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                false,
                6
            ),
            Some(Command::Quit)
        );
    }
}
