//! Field classification.
//!
//! Every property line of a record is checked against each label family in
//! turn. The checks are independent: a label may satisfy more than one of
//! them (a `NICKNAME` label also starts with `N`), and each match applies.

use indexmap::IndexMap;

use super::error::{ParseError, ParseResult};
use super::lexer::RawPropertyLine;
use super::splitter::{RawRecord, RecordLine};
use super::values::{
    email_label, escape_note, filter_phone_number, format_revision, parse_name_parts, phone_label,
};
use crate::rfc::vcard::core::Contact;

const TEL_PREFIXES: [&str; 3] = ["TEL", "item1.TEL", "item2.TEL"];

/// Labelled values of one family, with colliding labels made unique by a
/// per-record counter suffix.
#[derive(Debug)]
struct LabelBuffer {
    entries: IndexMap<String, String>,
    counter: usize,
}

impl LabelBuffer {
    fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            counter: 1,
        }
    }

    fn insert(&mut self, label: String, value: String) {
        let label = if self.entries.contains_key(&label) {
            self.counter += 1;
            format!("{label}{}", self.counter)
        } else {
            label
        };
        self.entries.insert(label, value);
    }
}

/// Builds one [`Contact`] from the property lines of a record.
///
/// Phone numbers and e-mail addresses are held aside and only attached to the
/// contact by [`FieldClassifier::finish`].
#[derive(Debug)]
pub struct FieldClassifier {
    contact: Contact,
    phones: LabelBuffer,
    emails: LabelBuffer,
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            contact: Contact::new(),
            phones: LabelBuffer::new(),
            emails: LabelBuffer::new(),
        }
    }

    /// Classifies a whole record.
    ///
    /// ## Errors
    /// Returns an error if a name, nickname or note line declares a charset
    /// other than UTF-8.
    pub fn classify_record(record: &RawRecord) -> ParseResult<Contact> {
        let mut classifier = Self::new();
        for line in &record.lines {
            classifier.classify(line)?;
        }
        Ok(classifier.finish())
    }

    /// Applies one property line to the contact under construction.
    ///
    /// ## Errors
    /// Returns an error if a name, nickname or note line declares a charset
    /// other than UTF-8.
    pub fn classify(&mut self, line: &RecordLine) -> ParseResult<()> {
        let property = RawPropertyLine::parse(&line.text);
        let label = property.label.as_str();
        let data = property.data.as_str();

        tracing::trace!(line = line.number, label, "Classifying property");

        if label.starts_with('N') && !label.contains("NOTE") {
            self.contact.name_parts = Some(parse_name_parts(data));
            ensure_utf8(&property, line.number, || Some(data.to_string()))?;
        }

        if label.starts_with("FN") {
            set_if_present(&mut self.contact.formatted_name, data);
            ensure_utf8(&property, line.number, || Some(data.to_string()))?;
        }

        if label.starts_with("NICKNAME") {
            set_if_present(&mut self.contact.nickname, data);
            let formatted_name = self.contact.formatted_name.clone();
            ensure_utf8(&property, line.number, || {
                formatted_name.or_else(|| Some(data.to_string()))
            })?;
        }

        if label.starts_with("TITLE") {
            set_if_present(&mut self.contact.title, data);
        }

        if label.starts_with("X-IMAGETYPE") {
            set_if_present(&mut self.contact.image_type, data);
        }

        if label.starts_with("REV") {
            set_if_present(&mut self.contact.revision_date, &format_revision(data));
        }

        if label.starts_with("ORG") {
            set_if_present(&mut self.contact.organization, data);
        }

        if label.starts_with("BDAY") {
            set_if_present(&mut self.contact.birthday, data);
        }

        if TEL_PREFIXES.iter().any(|prefix| label.starts_with(prefix)) {
            self.phones
                .insert(phone_label(label), filter_phone_number(data));
        }

        if label.starts_with("EMAIL") {
            self.emails.insert(email_label(label), data.to_string());
        }

        if label.starts_with("NOTE") {
            self.contact.notes = Some(escape_note(data));
            let formatted_name = self.contact.formatted_name.clone();
            ensure_utf8(&property, line.number, || formatted_name)?;
        }

        Ok(())
    }

    /// Attaches the buffered phone numbers and e-mail addresses and returns
    /// the finished contact.
    #[must_use]
    pub fn finish(self) -> Contact {
        let mut contact = self.contact;
        contact.phone_numbers = self.phones.entries;
        contact.email_addresses = self.emails.entries;
        contact
    }
}

fn set_if_present(field: &mut Option<String>, data: &str) {
    if !data.is_empty() {
        *field = Some(data.to_string());
    }
}

/// Fails with an unsupported-charset error naming the contact `identify`
/// returns, when the property declares a charset other than UTF-8.
fn ensure_utf8(
    property: &RawPropertyLine,
    line: usize,
    identify: impl FnOnce() -> Option<String>,
) -> ParseResult<()> {
    let Some(charset) = property.unsupported_charset() else {
        return Ok(());
    };

    let contact = identify();
    tracing::error!(line, charset, contact = ?contact, "Unsupported charset");
    Err(ParseError::unsupported_charset(line, charset, contact))
}
