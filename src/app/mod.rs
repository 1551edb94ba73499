mod actors;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod state;
pub(crate) mod terminal_session;
mod view_ops;


pub use core::App;
pub use state::StatusState;
