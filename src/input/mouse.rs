use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::command::Command;
use crate::ui::{HitTarget, UiLayout};

pub fn map_mouse_to_command(
    event: MouseEvent,
    layout: &UiLayout,
    page_count: usize,
    free_scroll_step: u16,
) -> Option<Command> {
    let step = i32::from(free_scroll_step);
    match event.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            Some(Command::Scroll { columns: step })
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            Some(Command::Scroll { columns: -step })
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.hit_test(event.column, event.row, page_count)? {
                HitTarget::SidebarToggle => Some(Command::ToggleSidebar),
                HitTarget::SidebarEntry(index) => Some(Command::GotoPage { page: index + 1 }),
                HitTarget::PrevGuide => Some(Command::PrevPage),
                HitTarget::NextGuide => Some(Command::NextPage),
                HitTarget::Viewer if layout.sidebar.is_some() => Some(Command::CloseSidebar),
                HitTarget::Viewer => None,
            }
        }
        _ => None,
    }
}
