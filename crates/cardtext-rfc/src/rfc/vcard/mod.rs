//! vCard contact extraction.
//!
//! This module turns the `.vcf` exports produced by phones and address books
//! into [`Contact`] values and renders them as labelled, localized text.
//!
//! ## Usage
//!
//! ```rust
//! use cardtext_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! N:Doe;John;;;\r\n\
//! FN:John Doe\r\n\
//! TEL;CELL:(555) 123-4567\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse(input).unwrap();
//! assert_eq!(contacts[0].formatted_name.as_deref(), Some("John Doe"));
//! assert_eq!(contacts[0].phone_numbers["mobile number"], "555 1234567");
//! ```
//!
//! ## Pipeline
//!
//! Raw bytes are decoded line by line (invalid UTF-8 is replaced, never fatal),
//! grouped into records by [`parse::RecordSplitter`], classified into a
//! [`Contact`] by [`parse::FieldClassifier`] and finally written out by
//! [`build::render`].
//!
//! The only fatal condition is a name, nickname or note property declaring a
//! `CHARSET` other than UTF-8; the whole run stops at that line.
//!
//! ## Submodules
//!
//! - [`core`] - The [`Contact`] model and name components
//! - [`parse`] - Line lexing, record splitting and field classification
//! - [`build`] - Text rendering

pub mod build;
pub mod core;
pub mod parse;


pub use build::{Captions, render, render_contact, write_contacts};
pub use self::core::{Contact, NameComponent, NameParts};
pub use parse::{ContactReader, ParseError, ParseErrorKind, ParseResult, parse, parse_reader};
