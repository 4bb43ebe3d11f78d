use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File not found! Are you sure you entered the file name correctly? ({0})")]
    InputNotFound(PathBuf),

    #[error("Cannot read {path}: {source}")]
    InputError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    ConfigError(#[from] anyhow::Error),

    #[error(transparent)]
    RfcError(#[from] cardtext_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] cardtext_core::error::CoreError),
}

impl AppError {
    /// ## Summary
    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::RfcError(err) if err.as_parse_error().is_some() => 2,
            Self::InputNotFound(_) => 3,
            Self::InputError { .. }
            | Self::OutputError { .. }
            | Self::ConfigError(_)
            | Self::RfcError(_)
            | Self::CoreError(_) => 1,
        }
    }

    /// ## Summary
    /// Returns the message printed to the user, or `None` when the run should
    /// end silently.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::RfcError(err) => match err.as_parse_error() {
                Some(parse_err) => parse_err
                    .contact
                    .as_ref()
                    .map(|contact| format!("Invalid charset detected at contact {contact}")),
                None => Some(err.to_string()),
            },
            _ => Some(self.to_string()),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
