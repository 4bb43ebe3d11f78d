//! Contact extraction pipeline.

use std::io::BufRead;

use super::classify::FieldClassifier;
use super::splitter::RecordSplitter;
use crate::error::RfcResult;
use crate::rfc::vcard::core::Contact;

/// Lazily yields the contacts of a vCard stream in source order.
///
/// Records without any recognised field are skipped. After the first error
/// the reader yields nothing more.
#[derive(Debug)]
pub struct ContactReader<R> {
    records: RecordSplitter<R>,
    failed: bool,
}

impl<R: BufRead> ContactReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            records: RecordSplitter::new(reader),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for ContactReader<R> {
    type Item = RfcResult<Contact>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for record in self.records.by_ref() {
            let result: RfcResult<Contact> = record
                .map_err(Into::into)
                .and_then(|record| {
                    let contact = FieldClassifier::classify_record(&record)?;
                    tracing::debug!(
                        start_line = record.start_line,
                        lines = record.lines.len(),
                        terminated = record.terminated,
                        has_content = contact.has_content(),
                        "Record classified"
                    );
                    Ok(contact)
                });

            match result {
                Ok(contact) if !contact.has_content() => {}
                Ok(contact) => return Some(Ok(contact)),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

/// Reads every contact from a buffered reader.
///
/// ## Errors
/// Returns an error if reading fails or a record declares an unsupported
/// charset. No contacts are returned in that case.
pub fn parse_reader<R: BufRead>(reader: R) -> RfcResult<Vec<Contact>> {
    let contacts = ContactReader::new(reader).collect::<RfcResult<Vec<_>>>()?;
    tracing::debug!(count = contacts.len(), "Contacts extracted");
    Ok(contacts)
}

/// Reads every contact from an in-memory vCard document.
///
/// ## Errors
/// Returns an error if a record declares an unsupported charset.
pub fn parse(input: &str) -> RfcResult<Vec<Contact>> {
    parse_reader(input.as_bytes())
}
