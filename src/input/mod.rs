pub mod keymap;
pub mod mouse;

pub use keymap::map_key_to_command;
pub use mouse::map_mouse_to_command;
