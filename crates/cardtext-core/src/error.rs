use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
