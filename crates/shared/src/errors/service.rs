use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),
}
