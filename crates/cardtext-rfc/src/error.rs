use thiserror::Error;

use crate::rfc::vcard::parse::ParseError;

/// vCard extraction errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("I/O error while reading vCard input: {0}")]
    IoError(#[from] std::io::Error),
}

impl RfcError {
    /// Returns the underlying parse error, if any.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::ParseError(err) => Some(err),
            Self::IoError(_) => None,
        }
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
