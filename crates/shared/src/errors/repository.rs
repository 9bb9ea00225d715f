use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// The id counter reached `i32::MAX`; handing out more ids would reuse old ones.
    #[error("Id sequence exhausted")]
    IdsExhausted,
}
