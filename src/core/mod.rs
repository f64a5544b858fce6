//! Core library components.
//!
//! The password history manager, its domain types and collaborators, plus
//! the configuration and entry store used by the command-line front end.

pub mod config;
pub mod constants;
pub mod domain;
pub mod history;
pub mod sink;
pub mod store;
