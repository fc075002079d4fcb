use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn conflict(entity: &str, key: &str) -> Self {
        Self::Conflict(format!("{} '{}' already exists", entity, key))
    }
}
