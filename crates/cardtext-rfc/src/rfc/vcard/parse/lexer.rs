//! vCard lexer for line decoding and property line splitting.
//!
//! Exports from phones are rarely clean: stray Latin-1 bytes, CRLF endings and
//! padding whitespace are all common, so every step here is lossy rather than
//! strict.

use std::borrow::Cow;

const CHARSET_PARAM: &str = "CHARSET=";
const UTF8: &str = "utf-8";

/// Decodes one raw input line, replacing invalid UTF-8 with U+FFFD, and trims
/// surrounding whitespace (including the line terminator).
#[must_use]
pub fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}

/// A property line split into its label and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPropertyLine {
    /// Text before the first colon with `;` turned into spaces,
    /// e.g. `TEL CELL` for `TEL;CELL:...`.
    pub label: String,
    /// Text after the first colon.
    pub data: String,
}

impl RawPropertyLine {
    /// Splits a trimmed line at its first colon.
    ///
    /// A line without a colon becomes a label with empty data.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let (label, data) = line.split_once(':').unwrap_or((line, ""));

        Self {
            label: label.trim().replace(';', " "),
            data: data.trim().to_string(),
        }
    }

    /// Returns the value of a `CHARSET=` parameter on the label, if present.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        let start = self.label.find(CHARSET_PARAM)? + CHARSET_PARAM.len();
        let rest = &self.label[start..];
        Some(rest.split(' ').next().unwrap_or(rest))
    }

    /// Returns the declared charset when it is something other than UTF-8.
    ///
    /// The value is compared as written, so a quoted `"utf-8"` is rejected.
    #[must_use]
    pub fn unsupported_charset(&self) -> Option<&str> {
        self.charset()
            .filter(|charset| !charset.eq_ignore_ascii_case(UTF8))
    }
}
