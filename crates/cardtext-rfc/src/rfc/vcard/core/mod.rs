//! Core contact types.

mod contact;
mod name;

pub use contact::Contact;
pub use name::{NameComponent, NameParts};
