//! # sysmc-core
//!
//! Core types for sysmc: the input data model (datasets of components with
//! correlated/uncorrelated shift bases), the sign-combination selectors, and
//! the shared error type. No randomness and no file I/O live here.

pub mod error;
pub mod input;
pub mod types;

pub use error::{Error, Result};

/// Version of the sysmc workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
