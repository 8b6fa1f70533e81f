//! # GuestGraph Common
//!
//! Shared types, errors, and logging setup for the GuestGraph workspace.
//!
//! This crate provides the domain model (appearance records, season filters,
//! episode counts) and the error taxonomy used across all other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logging;
pub mod types;

pub use error::{GuestGraphError, Result};
pub use types::*;
