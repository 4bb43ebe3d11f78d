//! Contact rendering.
//!
//! Turns [`Contact`](crate::rfc::vcard::Contact) values into labelled text
//! blocks, one per contact, with captions in the configured
//! [`Locale`](cardtext_core::types::Locale).

mod captions;
mod render;

pub use captions::Captions;
pub use render::{capitalize, render, render_contact, write_contacts};
