mod dispatch;
mod types;

pub use dispatch::{CommandDispatchResult, dispatch};
pub use types::{Command, CommandOutcome};
