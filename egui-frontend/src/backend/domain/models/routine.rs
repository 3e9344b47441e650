#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutineValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Time cannot be empty")]
    EmptyTime,
    #[error("At least one day must be selected")]
    NoDays,
}
