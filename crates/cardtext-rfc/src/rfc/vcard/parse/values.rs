//! Value normalizers for the property families a contact understands.

use std::sync::LazyLock;

use regex::Regex;

use crate::rfc::vcard::core::{NameComponent, NameParts};

/// Placeholder standing in for an escaped line break inside notes.
pub const NEWLINE_PLACEHOLDER: &str = " newline ";

#[expect(
    clippy::expect_used,
    reason = "The pattern is a literal and is covered by tests"
)]
static NON_PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d \+]").expect("valid phone filter pattern"));

/// Parses a structured name (N property) positionally.
///
/// Components map in order to [`NameComponent::POSITIONAL`]; empty components
/// and anything past the fifth are dropped.
#[must_use]
pub fn parse_name_parts(value: &str) -> NameParts {
    value
        .split(';')
        .zip(NameComponent::POSITIONAL)
        .filter(|(part, _)| !part.is_empty())
        .map(|(part, component)| (component, part.to_string()))
        .collect()
}

/// Keeps only digits, spaces and `+` in a telephone value.
#[must_use]
pub fn filter_phone_number(value: &str) -> String {
    NON_PHONE_CHARS.replace_all(value, "").into_owned()
}

/// Makes a `REV` timestamp readable: `T` becomes `", "` and `Z` becomes `" UTC"`.
///
/// Every `T` and `Z` in the value is replaced, not only the separators.
#[must_use]
pub fn format_revision(value: &str) -> String {
    value.replace('T', ", ").replace('Z', " UTC")
}

/// Replaces escaped `\n` sequences with [`NEWLINE_PLACEHOLDER`].
#[must_use]
pub fn escape_note(value: &str) -> String {
    value.replace(r"\n", NEWLINE_PLACEHOLDER)
}

/// Builds the descriptive label of a telephone property.
///
/// Tags are matched case-sensitively on the normalized label.
#[must_use]
pub fn phone_label(label: &str) -> String {
    let tags = [
        ("pref", "preferred"),
        ("HOME", "home"),
        ("WORK", "work"),
        ("CELL", "mobile"),
        ("VOICE", "(voice)"),
    ];
    format!("{} number", describe(label, &tags)).trim().to_string()
}

/// Builds the descriptive label of an e-mail property.
///
/// Tags are matched case-insensitively; `INTERNET` carries no meaning.
/// Unlike phone labels the result is not trimmed, so an untagged address is
/// labelled `" address"`.
#[must_use]
pub fn email_label(label: &str) -> String {
    let tags = [("HOME", "home"), ("PREF", "preferred"), ("WORK", "work")];
    format!("{} address", describe(&label.to_uppercase(), &tags))
}

/// Space-joined words of the tags found in `label`, in table order.
fn describe(label: &str, tags: &[(&str, &str)]) -> String {
    tags.iter()
        .filter(|(tag, _)| label.contains(tag))
        .map(|&(_, word)| word)
        .collect::<Vec<_>>()
        .join(" ")
}
