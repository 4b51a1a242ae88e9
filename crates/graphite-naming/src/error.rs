use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("topology id has no incarnation/nonce suffix: {0}")]
    InvalidTopologyId(String),

    #[error("prefix is required")]
    MissingPrefix,

    #[error("composed metric name is empty")]
    EmptyName,
}

pub type NamingResult<T> = Result<T, NamingError>;
