//! Text rendering of contacts.
//!
//! Field order is fixed: formatted name, first, middle and last name,
//! nickname, organization, phone numbers, e-mail addresses, birthday, notes,
//! revision date. Absent fields are left out and every block ends with a
//! blank line.

use std::io::{self, Write};

use super::captions::Captions;
use crate::rfc::vcard::core::Contact;
use crate::rfc::vcard::parse::NEWLINE_PLACEHOLDER;

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn push_field(out: &mut String, caption: &str, value: Option<&str>) {
    if let Some(value) = value {
        out.push_str(caption);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
}

/// Renders one contact as a text block, trailing blank line included.
#[must_use]
pub fn render_contact(contact: &Contact, captions: &Captions) -> String {
    let mut out = String::new();

    push_field(&mut out, captions.formatted_name, contact.formatted_name.as_deref());
    push_field(&mut out, captions.first_name, contact.first_name());
    push_field(&mut out, captions.middle_name, contact.middle_name());
    push_field(&mut out, captions.last_name, contact.last_name());
    push_field(&mut out, captions.nickname, contact.nickname.as_deref());
    push_field(&mut out, captions.organization, contact.organization.as_deref());

    for (label, value) in contact
        .phone_numbers
        .iter()
        .chain(contact.email_addresses.iter())
    {
        push_field(&mut out, &capitalize(label), Some(value.as_str()));
    }

    push_field(&mut out, captions.birthday, contact.birthday.as_deref());

    if let Some(notes) = &contact.notes {
        out.push_str(captions.notes);
        out.push_str(": \t");
        out.push_str(&notes.replace(NEWLINE_PLACEHOLDER, "\n\t"));
        out.push('\n');
    }

    push_field(&mut out, captions.revision_date, contact.revision_date.as_deref());

    out.push('\n');
    out
}

/// Renders all contacts in order.
#[must_use]
pub fn render(contacts: &[Contact], captions: &Captions) -> String {
    contacts
        .iter()
        .map(|contact| render_contact(contact, captions))
        .collect()
}

/// Writes all contacts to `writer`.
///
/// ## Errors
/// Returns an error if writing fails.
pub fn write_contacts<W: Write>(
    writer: &mut W,
    contacts: &[Contact],
    captions: &Captions,
) -> io::Result<()> {
    for contact in contacts {
        writer.write_all(render_contact(contact, captions).as_bytes())?;
    }
    writer.flush()
}
