//! vCard parsing.
//!
//! This module reads `.vcf` exports into [`Contact`](crate::rfc::vcard::Contact)
//! values.
//!
//! ## Usage
//!
//! ```rust
//! use cardtext_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! N:Doe;John;M;;\r\n\
//! EMAIL;HOME;pref:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse::parse(input).unwrap();
//! assert_eq!(contacts[0].first_name(), Some("John"));
//! assert!(contacts[0].email_addresses.contains_key("home preferred address"));
//! ```
//!
//! ## Stages
//!
//! - [`decode_line`] / [`RawPropertyLine`]: lossy decoding and label/data splitting
//! - [`RecordSplitter`]: `BEGIN:VCARD` / `END:VCARD` grouping
//! - [`FieldClassifier`]: per-line classification and normalization

mod classify;
mod error;
mod lexer;
mod parser;
mod splitter;
mod values;

pub use classify::FieldClassifier;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{RawPropertyLine, decode_line};
pub use parser::{ContactReader, parse, parse_reader};
pub use splitter::{RawRecord, RecordLine, RecordSplitter};
pub use values::{
    NEWLINE_PLACEHOLDER, email_label, escape_note, filter_phone_number, format_revision,
    parse_name_parts, phone_label,
};
