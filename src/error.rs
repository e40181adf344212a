pub type SelectResult<T> = Result<T, SelectError>;

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    EnvyError(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Chain not found despite previous validation")]
    ChainNotFound,

    #[error("{0:?}")]
    Other(#[from] anyhow::Error),
}
