use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use crate::command::{Command, CommandOutcome, dispatch};
use crate::input::{map_key_to_command, map_mouse_to_command};

use super::core::App;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) redraw: bool,
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event, now: Instant) -> InputEventOutcome {
        let step = self.config.navigation.free_scroll_step;
        let command = match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                map_key_to_command(key, self.nav.state().sidebar_open, step)
            }
            Event::Mouse(mouse) => self.last_layout.as_ref().and_then(|layout| {
                map_mouse_to_command(mouse, layout, self.nav.registry().len(), step)
            }),
            Event::Resize(_, _) => {
                return InputEventOutcome {
                    quit_requested: false,
                    redraw: true,
                };
            }
            _ => None,
        };

        let Some(command) = command else {
            return InputEventOutcome::default();
        };
        self.apply_command(command, now)
    }

    pub fn apply_command(&mut self, command: Command, now: Instant) -> InputEventOutcome {
        let result = dispatch(&mut self.nav, &mut self.scroll, command, now);
        for event in &result.emitted_events {
            self.handle_app_event(event);
        }
        InputEventOutcome {
            quit_requested: result.outcome == CommandOutcome::QuitRequested,
            redraw: result.outcome == CommandOutcome::Applied || result.emitted_events.len() > 1,
        }
    }
}
