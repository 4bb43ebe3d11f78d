//! vCard parse error types.

use std::fmt;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that stops the whole extraction run.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Best-effort identification of the contact being read, if any.
    pub contact: Option<String>,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub(crate) fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            contact: None,
            message: message.into(),
        }
    }

    /// Creates an unsupported charset error.
    #[must_use]
    pub fn unsupported_charset(line: usize, charset: &str, contact: Option<String>) -> Self {
        Self {
            contact,
            ..Self::new(
                ParseErrorKind::UnsupportedCharset,
                line,
                format!("unsupported charset {charset}, only UTF-8 is accepted"),
            )
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)?;
        if let Some(contact) = &self.contact {
            write!(f, " (contact {contact})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A property declared a `CHARSET` other than UTF-8.
    UnsupportedCharset,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharset => write!(f, "unsupported charset"),
        }
    }
}
