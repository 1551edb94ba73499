use crate::command::CommandOutcome;

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_outcome: Option<CommandOutcome>,
}
