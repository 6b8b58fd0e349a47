/// Errors surfaced by board commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl BoardError {
    pub fn task_not_found(id: &str) -> Self {
        BoardError::NotFound {
            entity: "Task",
            id: id.to_string(),
        }
    }

    pub fn project_not_found(id: &str) -> Self {
        BoardError::NotFound {
            entity: "Project",
            id: id.to_string(),
        }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
