//! Shared building blocks for the cardtext workspace.
//!
//! Holds the pieces every other crate needs: the core error type, runtime
//! configuration, vCard marker constants and the output [`types::Locale`].

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
