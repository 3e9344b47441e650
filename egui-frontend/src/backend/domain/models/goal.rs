#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Deadline cannot be empty")]
    EmptyDeadline,
}

/// Highest progress value; reaching it marks a goal completed
pub const MAX_PROGRESS: u8 = 100;
