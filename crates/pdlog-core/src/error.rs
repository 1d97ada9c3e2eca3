use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Log record is missing attribute: {0}")]
    MissingAttribute(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;
