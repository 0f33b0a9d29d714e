//! dialpick: a debounced integer value picker.
//!
//! The [`picker`] module holds the input-reconciliation engine; [`config`],
//! [`error`] and [`log`] are shared with the terminal host binary.

pub mod config;
pub mod error;
pub mod log;
pub mod picker;
