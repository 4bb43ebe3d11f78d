//! vCard contact extraction.
//!
//! Splits a `.vcf` stream into records, turns each record into a
//! [`Contact`](rfc::vcard::Contact) and renders contacts as labelled text.

pub mod error;
pub mod rfc;
