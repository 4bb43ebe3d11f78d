//! The `cardtext` command line tool.
//!
//! Reads a `.vcf` export and writes one labelled text block per contact.

pub mod cli;
pub mod error;
pub mod logging;
pub mod run;
